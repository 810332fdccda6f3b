// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

//! Fixed-size header records and their little-endian serialisation.
//!
//! Each struct mirrors the wire layout of its record minus the leading four-byte signature,
//! which the writer emits separately. Multi-byte integers are serialised least-significant
//! byte first via `to_le_bytes()`; the `as_slice()` length of each record therefore matches
//! its fixed length in `consts` exactly.

use crate::spec::consts::{CDH_LENGTH, EOCDR_LENGTH, LFH_LENGTH};

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.7)
pub struct LocalFileHeader {
    pub version_needed: u16,
    pub flags: GeneralPurposeFlag,
    pub compression: u16,
    pub mod_time: u16,
    pub mod_date: u16,
    pub crc: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
}

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.4.4)
#[derive(Debug, Default, Copy, Clone)]
pub struct GeneralPurposeFlag {
    pub encrypted: bool,
    pub data_descriptor: bool,
}

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.12)
pub struct CentralDirectoryHeader {
    pub version_made_by: u16,
    pub version_needed: u16,
    pub flags: GeneralPurposeFlag,
    pub compression: u16,
    pub mod_time: u16,
    pub mod_date: u16,
    pub crc: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
    pub file_comment_length: u16,
    pub disk_start: u16,
    pub internal_attribute: u16,
    pub external_attribute: u32,
    pub local_header_offset: u32,
}

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.16)
#[derive(Debug)]
pub struct EndOfCentralDirectoryHeader {
    pub disk_number: u16,
    pub cd_start_disk: u16,
    pub num_entries_disk: u16,
    pub num_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
    pub file_comment_length: u16,
}

impl LocalFileHeader {
    pub fn as_slice(&self) -> [u8; LFH_LENGTH] {
        let mut array = [0; LFH_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, self.version_needed.to_le_bytes());
        array_push!(array, cursor, self.flags.as_slice());
        array_push!(array, cursor, self.compression.to_le_bytes());
        array_push!(array, cursor, self.mod_time.to_le_bytes());
        array_push!(array, cursor, self.mod_date.to_le_bytes());
        array_push!(array, cursor, self.crc.to_le_bytes());
        array_push!(array, cursor, self.compressed_size.to_le_bytes());
        array_push!(array, cursor, self.uncompressed_size.to_le_bytes());
        array_push!(array, cursor, self.file_name_length.to_le_bytes());
        array_push!(array, cursor, self.extra_field_length.to_le_bytes());

        array
    }
}

impl GeneralPurposeFlag {
    pub fn as_slice(&self) -> [u8; 2] {
        let encrypted: u16 = match self.encrypted {
            false => 0x0,
            true => 0b1,
        };
        let data_descriptor: u16 = match self.data_descriptor {
            false => 0x0,
            true => 0x8,
        };

        (encrypted | data_descriptor).to_le_bytes()
    }
}

impl CentralDirectoryHeader {
    pub fn as_slice(&self) -> [u8; CDH_LENGTH] {
        let mut array = [0; CDH_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, self.version_made_by.to_le_bytes());
        array_push!(array, cursor, self.version_needed.to_le_bytes());
        array_push!(array, cursor, self.flags.as_slice());
        array_push!(array, cursor, self.compression.to_le_bytes());
        array_push!(array, cursor, self.mod_time.to_le_bytes());
        array_push!(array, cursor, self.mod_date.to_le_bytes());
        array_push!(array, cursor, self.crc.to_le_bytes());
        array_push!(array, cursor, self.compressed_size.to_le_bytes());
        array_push!(array, cursor, self.uncompressed_size.to_le_bytes());
        array_push!(array, cursor, self.file_name_length.to_le_bytes());
        array_push!(array, cursor, self.extra_field_length.to_le_bytes());
        array_push!(array, cursor, self.file_comment_length.to_le_bytes());
        array_push!(array, cursor, self.disk_start.to_le_bytes());
        array_push!(array, cursor, self.internal_attribute.to_le_bytes());
        array_push!(array, cursor, self.external_attribute.to_le_bytes());
        array_push!(array, cursor, self.local_header_offset.to_le_bytes());

        array
    }
}

impl EndOfCentralDirectoryHeader {
    pub fn as_slice(&self) -> [u8; EOCDR_LENGTH] {
        let mut array = [0; EOCDR_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, self.disk_number.to_le_bytes());
        array_push!(array, cursor, self.cd_start_disk.to_le_bytes());
        array_push!(array, cursor, self.num_entries_disk.to_le_bytes());
        array_push!(array, cursor, self.num_entries.to_le_bytes());
        array_push!(array, cursor, self.cd_size.to_le_bytes());
        array_push!(array, cursor, self.cd_offset.to_le_bytes());
        array_push!(array, cursor, self.file_comment_length.to_le_bytes());

        array
    }
}

/// Replace elements of an array at a given cursor index for use with a zero-initialised array.
macro_rules! array_push {
    ($arr:ident, $cursor:ident, $value:expr) => {{
        for entry in $value {
            $arr[$cursor] = entry;
            $cursor += 1;
        }
    }};
}

pub(crate) use array_push;
