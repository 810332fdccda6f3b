// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// An attribute host compatibility supported by this crate.
///
/// The variant's numeric value forms the high byte of the version-made-by field and decides
/// how external file attributes are interpreted by readers.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCompatibility {
    Unix,
}

impl TryFrom<u16> for AttributeCompatibility {
    type Error = ZipError;

    // https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.4.2.2)
    fn try_from(value: u16) -> Result<Self> {
        match value {
            3 => Ok(AttributeCompatibility::Unix),
            _ => Err(ZipError::AttributeCompatibilityNotSupported(value)),
        }
    }
}

impl From<AttributeCompatibility> for u16 {
    // https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.4.2.2)
    fn from(compatibility: AttributeCompatibility) -> Self {
        match compatibility {
            AttributeCompatibility::Unix => 3,
        }
    }
}
