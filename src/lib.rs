// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

//! # flatzip
//!
//! A synchronous ZIP archive writing crate for stored (uncompressed) entries.
//!
//! ## Features
//! - Writes archives over any [`std::io::Write`] implementer, including plain `Vec<u8>` buffers.
//! - Entries are always stored; the raw bytes land in the archive verbatim.
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance
//!   within the non-ZIP64 subset of the format.

pub mod error;
pub mod write;

pub(crate) mod entry;
pub(crate) mod spec;
pub(crate) mod string;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::entry::{builder::ZipEntryBuilder, ZipEntry};
pub use crate::spec::attribute::AttributeCompatibility;
pub use crate::spec::compression::Compression;
pub use crate::spec::date::{ZipDateTime, ZipDateTimeBuilder};
pub use crate::string::{StringEncoding, ZipString};
