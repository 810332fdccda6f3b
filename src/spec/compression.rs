// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// A compression method supported by this crate.
///
/// Entries are always written stored (method 0); the enum keeps the method field explicitly
/// typed at API boundaries rather than passing bare integers around.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Stored,
}

impl TryFrom<u16> for Compression {
    type Error = ZipError;

    // Convert a u16 stored with little endianness into a supported compression method.
    fn try_from(value: u16) -> Result<Self> {
        match value {
            0 => Ok(Compression::Stored),
            _ => Err(ZipError::CompressionNotSupported(value)),
        }
    }
}

impl From<&Compression> for u16 {
    // Convert a supported compression method into its relevant u16 stored with little endianness.
    fn from(compression: &Compression) -> u16 {
        match compression {
            Compression::Stored => 0,
        }
    }
}

impl From<Compression> for u16 {
    fn from(compression: Compression) -> u16 {
        (&compression).into()
    }
}
