// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

use crate::spec::consts::{CDH_LENGTH, EOCDR_LENGTH, LFH_LENGTH};
use crate::spec::header::{
    CentralDirectoryHeader, EndOfCentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader,
};

#[test]
fn general_purpose_flag_bit_packing() {
    let unset = GeneralPurposeFlag { encrypted: false, data_descriptor: false };
    assert_eq!(unset.as_slice(), [0x0, 0x0]);

    let encrypted = GeneralPurposeFlag { encrypted: true, data_descriptor: false };
    assert_eq!(encrypted.as_slice(), [0x1, 0x0]);

    let descriptor = GeneralPurposeFlag { encrypted: false, data_descriptor: true };
    assert_eq!(descriptor.as_slice(), [0x8, 0x0]);

    let both = GeneralPurposeFlag { encrypted: true, data_descriptor: true };
    assert_eq!(both.as_slice(), [0x9, 0x0]);
}

#[test]
fn local_file_header_little_endian_layout() {
    let header = LocalFileHeader {
        version_needed: 10,
        flags: GeneralPurposeFlag::default(),
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0x3610a686,
        compressed_size: 5,
        uncompressed_size: 5,
        file_name_length: 9,
        extra_field_length: 0,
    };

    let expected: [u8; LFH_LENGTH] = [
        10, 0, // version needed to extract
        0, 0, // general purpose flags
        0, 0, // compression method (stored)
        0, 0, // modification time
        0, 0, // modification date
        0x86, 0xa6, 0x10, 0x36, // CRC-32
        5, 0, 0, 0, // compressed size
        5, 0, 0, 0, // uncompressed size
        9, 0, // file name length
        0, 0, // extra field length
    ];

    assert_eq!(header.as_slice(), expected);
}

#[test]
fn central_directory_header_little_endian_layout() {
    let header = CentralDirectoryHeader {
        version_made_by: 0x0314,
        version_needed: 10,
        flags: GeneralPurposeFlag::default(),
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0x3610a686,
        compressed_size: 5,
        uncompressed_size: 5,
        file_name_length: 9,
        extra_field_length: 0,
        file_comment_length: 0,
        disk_start: 0,
        internal_attribute: 0,
        external_attribute: 0o644 << 16,
        local_header_offset: 0,
    };

    let expected: [u8; CDH_LENGTH] = [
        0x14, 0x03, // version made by (Unix, spec 2.0)
        10, 0, // version needed to extract
        0, 0, // general purpose flags
        0, 0, // compression method (stored)
        0, 0, // modification time
        0, 0, // modification date
        0x86, 0xa6, 0x10, 0x36, // CRC-32
        5, 0, 0, 0, // compressed size
        5, 0, 0, 0, // uncompressed size
        9, 0, // file name length
        0, 0, // extra field length
        0, 0, // file comment length
        0, 0, // disk number start
        0, 0, // internal file attributes
        0x00, 0x00, 0xa4, 0x01, // external file attributes (rw-r--r--)
        0, 0, 0, 0, // local header offset
    ];

    assert_eq!(header.as_slice(), expected);
}

#[test]
fn end_of_central_directory_little_endian_layout() {
    let header = EndOfCentralDirectoryHeader {
        disk_number: 0,
        cd_start_disk: 0,
        num_entries_disk: 1,
        num_entries: 1,
        cd_size: 55,
        cd_offset: 44,
        file_comment_length: 0,
    };

    let expected: [u8; EOCDR_LENGTH] = [
        0, 0, // disk number
        0, 0, // central directory start disk
        1, 0, // entries on this disk
        1, 0, // entries total
        55, 0, 0, 0, // central directory size
        44, 0, 0, 0, // central directory offset
        0, 0, // comment length
    ];

    assert_eq!(header.as_slice(), expected);
}
