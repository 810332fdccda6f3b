// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

pub mod builder;

use crate::spec::attribute::AttributeCompatibility;
use crate::spec::compression::Compression;
use crate::spec::consts::DEFAULT_UNIX_PERMISSIONS;
use crate::spec::date::ZipDateTime;
use crate::string::ZipString;

use self::builder::ZipEntryBuilder;

/// An immutable description of a ZIP entry.
///
/// # Builder pattern
/// Each [`ZipEntry`] is immutable once handed to the writer, so construction and mutation go
/// through [`ZipEntryBuilder`]. Conversions between the two are non-allocating via the
/// [`From`] implementations.
#[derive(Clone, Debug)]
pub struct ZipEntry {
    pub(crate) filename: ZipString,
    pub(crate) compression: Compression,
    pub(crate) attribute_compatibility: AttributeCompatibility,
    pub(crate) last_modification_date: ZipDateTime,
    pub(crate) internal_file_attribute: u16,
    pub(crate) external_file_attribute: u32,
}

impl ZipEntry {
    pub(crate) fn new(filename: ZipString, compression: Compression) -> Self {
        ZipEntry {
            filename,
            compression,
            attribute_compatibility: AttributeCompatibility::Unix,
            last_modification_date: ZipDateTime::default(),
            internal_file_attribute: 0,
            external_file_attribute: u32::from(DEFAULT_UNIX_PERMISSIONS) << 16,
        }
    }

    /// Returns the entry's filename.
    ///
    /// # Note
    /// The filename is stored in the archive exactly as the raw bytes held here; no
    /// normalisation is applied on write.
    pub fn filename(&self) -> &ZipString {
        &self.filename
    }

    /// Returns the entry's compression method.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the entry's attribute host compatibility.
    pub fn attribute_compatibility(&self) -> AttributeCompatibility {
        self.attribute_compatibility
    }

    /// Returns the entry's last modification time & date.
    pub fn last_modification_date(&self) -> ZipDateTime {
        self.last_modification_date
    }

    /// Returns the entry's internal file attribute.
    pub fn internal_file_attribute(&self) -> u16 {
        self.internal_file_attribute
    }

    /// Returns the entry's external file attribute.
    pub fn external_file_attribute(&self) -> u32 {
        self.external_file_attribute
    }
}

impl From<ZipEntryBuilder> for ZipEntry {
    fn from(builder: ZipEntryBuilder) -> Self {
        builder.0
    }
}
