// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

use std::io::{Result, Write};

/// A wrapper around a [`Write`] implementation which tracks the current byte offset.
///
/// The offset only advances by the number of bytes the inner writer reports as accepted,
/// so it always equals the exact byte position within the stream being produced.
pub struct OffsetWriter<W: Write> {
    inner: W,
    offset: usize,
}

impl<W: Write> OffsetWriter<W> {
    /// Constructs a new wrapper from an inner [`Write`] writer.
    pub fn new(inner: W) -> Self {
        Self { inner, offset: 0 }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes this wrapper and returns the inner [`Write`] writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Returns a mutable reference to the inner [`Write`] writer.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }
}

impl<W: Write> Write for OffsetWriter<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let written = self.inner.write(buf)?;
        self.offset += written;
        Ok(written)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}
