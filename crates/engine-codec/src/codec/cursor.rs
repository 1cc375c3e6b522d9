//! # Primitive Codec
//!
//! The atomic encode/decode units every schema is built from: little-endian
//! fixed-width integers, width-checked fixed byte arrays, and u32-framed
//! variable-length byte sequences and UTF-8 strings.
//!
//! [`ByteWriter`] is the append-only output side; [`Cursor`] is the borrowing
//! read side. A cursor's position advances with every read, so a cursor must
//! not be reused across unrelated decodes without checking its final offset.

use crate::errors::CodecError;

// =============================================================================
// BYTE WRITER
// =============================================================================

/// Append-only output buffer for wire encoding.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a writer with pre-reserved capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Appends a single byte.
    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Appends a u32, little-endian.
    pub fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a u64, little-endian.
    pub fn put_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a fixed-width field, checking the input length.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::WidthMismatch`] if `bytes` is not exactly
    /// `width` bytes. Fixed fields are never truncated or padded.
    pub fn put_fixed(&mut self, bytes: &[u8], width: usize) -> Result<(), CodecError> {
        if bytes.len() != width {
            return Err(CodecError::WidthMismatch {
                expected: width,
                actual: bytes.len(),
            });
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Appends a variable-length byte field: u32 little-endian length prefix,
    /// then the raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::IntegerOverflow`] if the length does not fit the
    /// u32 prefix.
    pub fn put_var_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let len = u32::try_from(bytes.len()).map_err(|_| CodecError::IntegerOverflow)?;
        self.put_u32(len);
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Appends a string field using the same var-length framing as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::IntegerOverflow`] if the UTF-8 length does not
    /// fit the u32 prefix.
    pub fn put_str(&mut self, s: &str) -> Result<(), CodecError> {
        self.put_var_bytes(s.as_bytes())
    }

    /// Bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the writer, returning the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

// =============================================================================
// CURSOR
// =============================================================================

/// Borrowing read cursor over a wire buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns true if every byte has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Returns the next byte without consuming it, if any remain.
    #[must_use]
    pub fn peek_u8(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(CodecError::UnexpectedEnd {
                needed: n,
                remaining,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEnd`] if the buffer is exhausted.
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    /// Reads a u32, little-endian.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEnd`] if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        let bytes = self.take(4)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(raw))
    }

    /// Reads a u64, little-endian.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEnd`] if fewer than 8 bytes remain.
    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        let bytes = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(raw))
    }

    /// Reads a fixed-width field of exactly `width` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEnd`] if fewer than `width` bytes
    /// remain. Never truncates.
    pub fn read_fixed(&mut self, width: usize) -> Result<&'a [u8], CodecError> {
        self.take(width)
    }

    /// Reads a variable-length byte field: u32 little-endian length prefix,
    /// then that many bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEnd`] if the prefix or the payload is
    /// truncated.
    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], CodecError> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }

    /// Reads a string field with var-length framing, validating UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEnd`] on truncation or
    /// [`CodecError::InvalidUtf8`] on malformed content.
    pub fn read_str(&mut self) -> Result<String, CodecError> {
        let bytes = self.read_var_bytes()?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| CodecError::InvalidUtf8)
    }
}

// =============================================================================
// TESTS
// =============================================================================
