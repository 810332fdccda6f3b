// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

//! A module which supports writing ZIP files.
//!
//! # Example
//! ```
//! use flatzip::{Compression, ZipEntryBuilder};
//! use flatzip::write::ZipWriter;
//! # use flatzip::error::ZipError;
//!
//! # fn run() -> Result<(), ZipError> {
//! let mut writer = ZipWriter::new(Vec::new());
//!
//! let data = b"This is an example file.";
//! let entry = ZipEntryBuilder::new("foo.txt".into(), Compression::Stored);
//!
//! writer.write_entry_whole(entry, data)?;
//! let bytes = writer.close()?;
//! #   let _ = bytes;
//! #   Ok(())
//! # }
//! ```

pub(crate) mod entry_whole;
pub(crate) mod io;

use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::spec::consts::{CDH_SIGNATURE, EOCDR_SIGNATURE, NON_ZIP64_MAX_NUM_FILES};
use crate::spec::header::{CentralDirectoryHeader, EndOfCentralDirectoryHeader};

use std::io::Write;

use entry_whole::EntryWholeWriter;
use io::offset::OffsetWriter;

pub(crate) struct CentralDirectoryEntry {
    pub header: CentralDirectoryHeader,
    pub entry: ZipEntry,
}

/// A ZIP file writer which acts over [`Write`] implementers.
///
/// Entries are appended in call order; each one's local file header lands at the running
/// byte offset recorded for its central directory record.
///
/// # Note
/// - [`ZipWriter::close()`] must be called before the writer goes out of scope, otherwise
///   the produced stream lacks its central directory and is a corrupted ZIP file.
pub struct ZipWriter<W: Write> {
    pub(crate) writer: OffsetWriter<W>,
    pub(crate) cd_entries: Vec<CentralDirectoryEntry>,
}

impl<W: Write> ZipWriter<W> {
    /// Construct a new ZIP file writer from an inner writer.
    pub fn new(writer: W) -> Self {
        Self { writer: OffsetWriter::new(writer), cd_entries: Vec::new() }
    }

    /// Write a new ZIP entry of known size and data.
    pub fn write_entry_whole<E: Into<ZipEntry>>(&mut self, entry: E, data: &[u8]) -> Result<()> {
        EntryWholeWriter::from_raw(self, entry.into(), data).write()
    }

    /// Returns a mutable reference to the inner writer.
    ///
    /// Care should be taken when using this inner writer as doing so may invalidate internal
    /// state of this writer.
    pub fn inner_mut(&mut self) -> &mut W {
        self.writer.inner_mut()
    }

    /// Consumes this ZIP writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Writing all central directory headers.
    /// - Writing the end of central directory record.
    ///
    /// Failure to call this function before going out of scope would result in a corrupted
    /// ZIP file.
    #[tracing::instrument(skip(self), fields(entries = self.cd_entries.len()))]
    pub fn close(mut self) -> Result<W> {
        if self.cd_entries.len() > usize::from(NON_ZIP64_MAX_NUM_FILES) {
            return Err(ZipError::TooManyEntries(self.cd_entries.len()));
        }
        let num_entries = self.cd_entries.len() as u16;
        let cd_offset = self.writer.offset();

        for entry in &self.cd_entries {
            self.writer.write_all(&CDH_SIGNATURE.to_le_bytes())?;
            self.writer.write_all(&entry.header.as_slice())?;
            self.writer.write_all(entry.entry.filename().as_bytes())?;
        }

        let cd_size = u32::try_from(self.writer.offset() - cd_offset)
            .map_err(|_| ZipError::ArchiveTooLarge)?;
        let cd_offset = u32::try_from(cd_offset).map_err(|_| ZipError::ArchiveTooLarge)?;

        let header = EndOfCentralDirectoryHeader {
            disk_number: 0,
            cd_start_disk: 0,
            num_entries_disk: num_entries,
            num_entries,
            cd_size,
            cd_offset,
            file_comment_length: 0,
        };

        self.writer.write_all(&EOCDR_SIGNATURE.to_le_bytes())?;
        self.writer.write_all(&header.as_slice())?;

        Ok(self.writer.into_inner())
    }
}
