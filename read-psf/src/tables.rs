//! The fixed headers and the unicode table.
//!
//! A font file is a header, a body of fixed-size glyph bitmaps, and an
//! optional unicode table. The two header layouts are decoded into a common
//! [`Geometry`] which describes where everything is.

pub mod psf1;
pub mod psf2;
pub mod unicode;

use types::Format;

use crate::{read::ReadError, FontData, FontRead};

/// The layout of a font file, as described by its header.
///
/// A `Geometry` is only produced after it has been checked against the
/// length of the file: the glyph body is known to be in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub format: Format,
    pub num_glyphs: u32,
    pub width: u32,
    pub height: u32,
    /// The byte size of one glyph bitmap.
    pub charsize: usize,
    /// The offset of the glyph body from the start of the file.
    pub glyphs_offset: usize,
    pub has_unicode_table: bool,
    /// The header version, if it is newer than any we know of.
    pub unrecognized_version: Option<u32>,
}

impl Geometry {
    /// The byte length of the glyph body.
    pub fn body_len(&self) -> usize {
        // does not overflow; checked in validate
        self.num_glyphs as usize * self.charsize
    }

    /// The offset of the unicode table, which immediately follows the body.
    pub fn table_offset(&self) -> usize {
        self.glyphs_offset + self.body_len()
    }

    /// The number of bytes in one row of a glyph bitmap.
    pub fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    fn validate(self, file_len: usize) -> Result<Self, ReadError> {
        if self.glyphs_offset > file_len {
            return Err(ReadError::OutOfBounds);
        }
        if self.num_glyphs == 0 {
            return Err(ReadError::InvalidGeometry("font has no glyphs"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ReadError::InvalidGeometry("glyphs have no area"));
        }
        let body_len = (self.num_glyphs as usize)
            .checked_mul(self.charsize)
            .ok_or(ReadError::InvalidGeometry("glyph body is too large"))?;
        if body_len > file_len - self.glyphs_offset {
            return Err(ReadError::OutOfBounds);
        }
        Ok(self)
    }
}

impl<'a> FontRead<'a> for Geometry {
    /// Read either header layout, chosen by the magic number.
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        match Format::sniff(data.as_bytes()) {
            Some(Format::Psf1) => <&psf1::Psf1Header>::read(data)?.geometry(data.len()),
            Some(Format::Psf2) => <&psf2::Psf2Header>::read(data)?.geometry(data.len()),
            None => Err(ReadError::InvalidMagic),
        }
    }
}
