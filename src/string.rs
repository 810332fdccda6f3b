// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// A string encoding supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEncoding {
    Utf8,
    Raw,
}

/// A string wrapper over the raw bytes written into ZIP headers.
///
/// File names land in the archive verbatim, so the raw bytes are never normalised or
/// re-encoded. The encoding only records whether the bytes may additionally be viewed
/// as UTF-8 through [`ZipString::as_str()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipString {
    encoding: StringEncoding,
    raw: Vec<u8>,
}

impl ZipString {
    /// Constructs a new encoded string from its raw bytes and its encoding type.
    ///
    /// # Note
    /// If the provided encoding is [`StringEncoding::Utf8`] but the raw bytes are not valid
    /// UTF-8, the encoding is defaulted back to [`StringEncoding::Raw`].
    pub fn new(raw: Vec<u8>, encoding: StringEncoding) -> Self {
        let encoding = match encoding {
            StringEncoding::Utf8 if std::str::from_utf8(&raw).is_err() => StringEncoding::Raw,
            other => other,
        };

        Self { encoding, raw }
    }

    /// Returns the raw bytes for this string.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Returns the length of this string in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns whether this string holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the encoding type for this string.
    pub fn encoding(&self) -> StringEncoding {
        self.encoding
    }

    /// Returns the raw bytes converted into a string slice.
    ///
    /// # Note
    /// A call to this method will only succeed if the encoding type is [`StringEncoding::Utf8`].
    pub fn as_str(&self) -> Result<&str> {
        match self.encoding {
            StringEncoding::Utf8 => std::str::from_utf8(&self.raw).map_err(|_| ZipError::StringNotUtf8),
            StringEncoding::Raw => Err(ZipError::StringNotUtf8),
        }
    }

    /// Consumes this string and returns the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.raw
    }
}

impl From<String> for ZipString {
    fn from(value: String) -> Self {
        Self { encoding: StringEncoding::Utf8, raw: value.into_bytes() }
    }
}

impl From<&str> for ZipString {
    fn from(value: &str) -> Self {
        Self { encoding: StringEncoding::Utf8, raw: value.as_bytes().to_vec() }
    }
}
