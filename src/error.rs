// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("compression not supported: {0}")]
    CompressionNotSupported(u16),
    #[error("host attribute compatibility not supported: {0}")]
    AttributeCompatibilityNotSupported(u16),

    #[error("entry data exceeds the 4 GiB limit of 32-bit size fields ({0} bytes)")]
    EntryDataTooLarge(u64),
    #[error("file name exceeds the 16-bit length field ({0} bytes)")]
    FileNameTooLong(usize),
    #[error("archive holds more entries than a 16-bit count can record ({0})")]
    TooManyEntries(usize),
    #[error("archive layout exceeds the 32-bit offset fields of a non-ZIP64 archive")]
    ArchiveTooLarge,

    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
    #[error("attempted to interpret a non-UTF8 string as UTF8")]
    StringNotUtf8,
}
