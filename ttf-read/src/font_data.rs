//! raw font bytes

use std::ops::{Range, RangeBounds};

use types::{BigEndian, Fixed, LongDateTime, Scalar};

use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// A bounds-checked big-endian reader over [`FontData`].
///
/// A cursor is a small `Copy` value. Reading through one never mutates the
/// underlying data, so each caller creates its own.
///
/// Failed reads leave the position untouched.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(FontData::new)
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(FontData::new)
    }

    /// Read a scalar at `offset`.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        offset
            .checked_add(T::RAW_BYTE_LEN)
            .and_then(|end| self.bytes.get(offset..end))
            .and_then(T::read)
            .ok_or(ReadError::EndOfFile)
    }

    /// Interpret the bytes in `range` as an array of big-endian scalars.
    pub fn read_array<T>(&self, range: Range<usize>) -> Result<&'a [BigEndian<T>], ReadError>
    where
        T: Scalar + Copy + 'static,
    {
        let bytes = self.bytes.get(range).ok_or(ReadError::EndOfFile)?;
        bytemuck::try_cast_slice(bytes)
            .map_err(|_| ReadError::MalformedData("array length is not a multiple of its element"))
    }

    /// A new cursor positioned at the start of this data.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    /// The current absolute position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The data this cursor reads from.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    pub fn remaining_bytes(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Move to an absolute position.
    ///
    /// Seeking to exactly the end of the data is allowed; any read from there
    /// fails with [`ReadError::EndOfFile`].
    pub fn seek(&mut self, offset: usize) -> Result<(), ReadError> {
        if offset > self.data.len() {
            return Err(ReadError::InvalidOffset(offset));
        }
        self.pos = offset;
        Ok(())
    }

    /// Move forward by `n_bytes`.
    pub fn advance(&mut self, n_bytes: usize) -> Result<(), ReadError> {
        let target = self
            .pos
            .checked_add(n_bytes)
            .ok_or(ReadError::InvalidOffset(usize::MAX))?;
        self.seek(target)
    }

    pub fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let value = self.data.read_at(self.pos)?;
        self.pos += T::RAW_BYTE_LEN;
        Ok(value)
    }

    /// Read a 16.16 fixed point number as a float.
    pub fn read_fixed(&mut self) -> Result<f64, ReadError> {
        self.read::<Fixed>().map(Fixed::to_f64)
    }

    /// Read a timestamp stored as two 32-bit words, high word first.
    pub fn read_timestamp(&mut self) -> Result<LongDateTime, ReadError> {
        let mut probe = *self;
        let high = probe.read::<u32>()?;
        let low = probe.read::<u32>()?;
        *self = probe;
        Ok(LongDateTime::from_parts(high, low))
    }

    pub fn read_array<T>(&mut self, len: usize) -> Result<&'a [BigEndian<T>], ReadError>
    where
        T: Scalar + Copy + 'static,
    {
        let end = len
            .checked_mul(T::RAW_BYTE_LEN)
            .and_then(|n_bytes| n_bytes.checked_add(self.pos))
            .ok_or(ReadError::EndOfFile)?;
        let array = self.data.read_array(self.pos..end)?;
        self.pos = end;
        Ok(array)
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}
