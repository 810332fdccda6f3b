// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

pub(crate) mod offset;

use crate::error::ZipError;
use crate::spec::consts::{CDH_SIGNATURE, EOCDR_SIGNATURE, LFH_SIGNATURE};
use crate::write::ZipWriter;
use crate::{Compression, StringEncoding, ZipEntryBuilder, ZipString};

#[test]
fn empty_archive_is_a_bare_trailer() {
    let bytes = ZipWriter::new(Vec::new()).close().expect("failed to close writer");

    assert_eq!(bytes.len(), 22);
    assert_eq!(&bytes[0..4], &EOCDR_SIGNATURE.to_le_bytes());
    // both entry counts zero
    assert_eq!(&bytes[8..10], &[0, 0]);
    assert_eq!(&bytes[10..12], &[0, 0]);
}

#[test]
fn single_entry_layout() {
    let mut writer = ZipWriter::new(Vec::new());
    let entry = ZipEntryBuilder::new("hello.txt".into(), Compression::Stored);
    writer.write_entry_whole(entry, b"hello").expect("failed to write entry");
    let bytes = writer.close().expect("failed to close writer");

    // [local header 39 | data 5 | central directory 55 | trailer 22]
    assert_eq!(bytes.len(), 39 + 5 + 55 + 22);
    assert_eq!(&bytes[0..4], &LFH_SIGNATURE.to_le_bytes());
    assert_eq!(&bytes[30..39], b"hello.txt");
    assert_eq!(&bytes[39..44], b"hello");
    assert_eq!(&bytes[44..48], &CDH_SIGNATURE.to_le_bytes());
    assert_eq!(&bytes[90..99], b"hello.txt");

    // CRC-32 of b"hello", identical in both headers
    assert_eq!(&bytes[14..18], &0x3610a686u32.to_le_bytes());
    assert_eq!(&bytes[60..64], &0x3610a686u32.to_le_bytes());

    // stored data: both size fields carry the raw byte count
    assert_eq!(&bytes[18..22], &5u32.to_le_bytes());
    assert_eq!(&bytes[22..26], &5u32.to_le_bytes());

    // trailer cross-references: one entry, a 55 byte directory starting at offset 44
    let trailer = &bytes[99..];
    assert_eq!(&trailer[0..4], &EOCDR_SIGNATURE.to_le_bytes());
    assert_eq!(&trailer[8..10], &1u16.to_le_bytes());
    assert_eq!(&trailer[10..12], &1u16.to_le_bytes());
    assert_eq!(&trailer[12..16], &55u32.to_le_bytes());
    assert_eq!(&trailer[16..20], &44u32.to_le_bytes());
}

#[test]
fn zero_length_entry() {
    let mut writer = ZipWriter::new(Vec::new());
    let entry = ZipEntryBuilder::new("empty.txt".into(), Compression::Stored);
    writer.write_entry_whole(entry, &[]).expect("failed to write entry");
    let bytes = writer.close().expect("failed to close writer");

    assert_eq!(bytes.len(), 39 + 55 + 22);
    // CRC-32 of no data is zero, as are both size fields
    assert_eq!(&bytes[14..18], &[0, 0, 0, 0]);
    assert_eq!(&bytes[18..22], &[0, 0, 0, 0]);
    assert_eq!(&bytes[22..26], &[0, 0, 0, 0]);
    // the directory immediately follows the local header
    assert_eq!(&bytes[39..43], &CDH_SIGNATURE.to_le_bytes());
}

#[test]
fn local_header_offsets_accumulate() {
    let mut writer = ZipWriter::new(Vec::new());
    writer
        .write_entry_whole(ZipEntryBuilder::new("a.txt".into(), Compression::Stored), b"aaaa")
        .expect("failed to write first entry");
    writer
        .write_entry_whole(ZipEntryBuilder::new("b.txt".into(), Compression::Stored), b"bb")
        .expect("failed to write second entry");
    let bytes = writer.close().expect("failed to close writer");

    // first entry spans [0, 39), second [39, 76), directory starts at 76
    let cd_start = 30 + 5 + 4 + 30 + 5 + 2;
    assert_eq!(&bytes[39..43], &LFH_SIGNATURE.to_le_bytes());
    assert_eq!(&bytes[cd_start..cd_start + 4], &CDH_SIGNATURE.to_le_bytes());

    // each directory record points back at its local header
    let first_cdh = cd_start;
    let second_cdh = cd_start + 46 + 5;
    assert_eq!(&bytes[first_cdh + 42..first_cdh + 46], &0u32.to_le_bytes());
    assert_eq!(&bytes[second_cdh + 42..second_cdh + 46], &39u32.to_le_bytes());

    // trailer records two entries and the directory's exact span
    let trailer = &bytes[bytes.len() - 22..];
    assert_eq!(&trailer[0..4], &EOCDR_SIGNATURE.to_le_bytes());
    assert_eq!(&trailer[8..10], &2u16.to_le_bytes());
    assert_eq!(&trailer[10..12], &2u16.to_le_bytes());
    assert_eq!(&trailer[12..16], &(2 * 46 + 5 + 5_u32).to_le_bytes());
    assert_eq!(&trailer[16..20], &(cd_start as u32).to_le_bytes());
}

#[test]
fn rejects_oversized_file_name() {
    let name = ZipString::new(vec![b'a'; usize::from(u16::MAX) + 1], StringEncoding::Raw);
    let mut writer = ZipWriter::new(Vec::new());
    let entry = ZipEntryBuilder::new(name, Compression::Stored);

    let err = writer.write_entry_whole(entry, b"x").expect_err("expected an oversized name to be rejected");
    assert!(matches!(err, ZipError::FileNameTooLong(length) if length == usize::from(u16::MAX) + 1));

    // the failed entry must leave no bytes behind
    let bytes = writer.close().expect("failed to close writer");
    assert_eq!(bytes.len(), 22);
}

#[test]
fn raw_file_name_bytes_are_written_verbatim() {
    let name = ZipString::new(vec![0x68, 0xc3, 0x28, 0x2e, 0x62, 0x69, 0x6e], StringEncoding::Raw);
    let mut writer = ZipWriter::new(Vec::new());
    writer
        .write_entry_whole(ZipEntryBuilder::new(name, Compression::Stored), b"data")
        .expect("failed to write entry");
    let bytes = writer.close().expect("failed to close writer");

    assert_eq!(&bytes[30..37], &[0x68, 0xc3, 0x28, 0x2e, 0x62, 0x69, 0x6e]);
}
