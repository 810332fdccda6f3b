// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::spec::consts::{LFH_SIGNATURE, NON_ZIP64_MAX_SIZE};
use crate::spec::header::{CentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader};
use crate::write::{CentralDirectoryEntry, ZipWriter};

use std::io::Write;

use crc32fast::Hasher;

pub struct EntryWholeWriter<'b, 'c, W: Write> {
    writer: &'b mut ZipWriter<W>,
    entry: ZipEntry,
    data: &'c [u8],
}

impl<'b, 'c, W: Write> EntryWholeWriter<'b, 'c, W> {
    pub fn from_raw(writer: &'b mut ZipWriter<W>, entry: ZipEntry, data: &'c [u8]) -> Self {
        Self { writer, entry, data }
    }

    #[tracing::instrument(skip_all, fields(filename = ?self.entry.filename()))]
    pub fn write(self) -> Result<()> {
        if self.data.len() as u64 > u64::from(NON_ZIP64_MAX_SIZE) {
            return Err(ZipError::EntryDataTooLarge(self.data.len() as u64));
        }
        let file_name_length = u16::try_from(self.entry.filename().len())
            .map_err(|_| ZipError::FileNameTooLong(self.entry.filename().len()))?;
        let local_header_offset = u32::try_from(self.writer.writer.offset())
            .map_err(|_| ZipError::ArchiveTooLarge)?;

        let date = self.entry.last_modification_date();

        // Stored data: both size fields carry the identical raw byte count.
        let lf_header = LocalFileHeader {
            version_needed: crate::spec::version::as_needed_to_extract(&self.entry),
            flags: GeneralPurposeFlag { encrypted: false, data_descriptor: false },
            compression: self.entry.compression().into(),
            mod_time: date.time,
            mod_date: date.date,
            crc: compute_crc(self.data),
            compressed_size: self.data.len() as u32,
            uncompressed_size: self.data.len() as u32,
            file_name_length,
            extra_field_length: 0,
        };

        let header = CentralDirectoryHeader {
            version_made_by: crate::spec::version::as_made_by(),
            version_needed: lf_header.version_needed,
            flags: lf_header.flags,
            compression: lf_header.compression,
            mod_time: lf_header.mod_time,
            mod_date: lf_header.mod_date,
            crc: lf_header.crc,
            compressed_size: lf_header.compressed_size,
            uncompressed_size: lf_header.uncompressed_size,
            file_name_length: lf_header.file_name_length,
            extra_field_length: lf_header.extra_field_length,
            file_comment_length: 0,
            disk_start: 0,
            internal_attribute: self.entry.internal_file_attribute(),
            external_attribute: self.entry.external_file_attribute(),
            local_header_offset,
        };

        self.writer.writer.write_all(&LFH_SIGNATURE.to_le_bytes())?;
        self.writer.writer.write_all(&lf_header.as_slice())?;
        self.writer.writer.write_all(self.entry.filename().as_bytes())?;
        self.writer.writer.write_all(self.data)?;

        self.writer.cd_entries.push(CentralDirectoryEntry { header, entry: self.entry });

        Ok(())
    }
}

fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
