//! raw font bytes

use std::ops::{Bound, RangeBounds};

use bytemuck::AnyBitPattern;
use types::{FixedSize, Scalar};

use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    total_pos: u32,
    bytes: &'a [u8],
}

/// A cursor for validating bytes during parsing.
///
/// Reads advance the position even when they fail, so a failed read leaves
/// the cursor past the end of the data.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData {
            total_pos: 0,
            bytes,
        }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The position of this data in the file it was split from.
    pub fn file_offset(&self) -> usize {
        self.total_pos as usize
    }

    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData {
            bytes,
            total_pos: self.total_pos.saturating_add(pos as u32),
        })
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(i) => *i,
            Bound::Excluded(i) => i.saturating_add(1),
        };

        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        let total_pos = self.total_pos.saturating_add(start as u32);
        self.bytes
            .get(bounds)
            .map(|bytes| FontData { bytes, total_pos })
    }

    pub fn read_at<T: Scalar + FixedSize>(&self, offset: usize) -> Result<T, ReadError> {
        self.bytes
            .get(offset..offset.checked_add(T::RAW_BYTE_LEN).ok_or(ReadError::OutOfBounds)?)
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Interpret the bytes at `offset` as a reference to some type `T`.
    ///
    /// `T` is a fixed header struct; the cast is checked by bytemuck, so
    /// this only fails if the data is too short.
    pub fn read_ref_at<T: AnyBitPattern>(&self, offset: usize) -> Result<&'a T, ReadError> {
        let len = std::mem::size_of::<T>();
        let bytes = self
            .bytes
            .get(offset..offset.checked_add(len).ok_or(ReadError::OutOfBounds)?)
            .ok_or(ReadError::OutOfBounds)?;
        bytemuck::try_from_bytes(bytes).map_err(|_| ReadError::OutOfBounds)
    }

    pub(crate) fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    pub(crate) fn advance_by(&mut self, n_bytes: usize) {
        self.pos = self.pos.saturating_add(n_bytes);
    }

    pub(crate) fn read<T: Scalar + FixedSize>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos = self.pos.saturating_add(T::RAW_BYTE_LEN);
        temp
    }

    /// Look at the next byte without consuming it.
    pub(crate) fn peek_u8(&self) -> Result<u8, ReadError> {
        self.data.read_at(self.pos)
    }

    /// The unread bytes.
    pub(crate) fn remaining(&self) -> &'a [u8] {
        self.data.as_bytes().get(self.pos..).unwrap_or_default()
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
