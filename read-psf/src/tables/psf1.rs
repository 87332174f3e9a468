//! The version 1 header.
//!
//! Version 1 fonts are always eight pixels wide and contain either 256 or
//! 512 glyphs. The header is four bytes: the magic number, a mode byte and
//! the glyph height.

use types::{FixedSize, Format, PSF1_MAGIC};

use super::Geometry;
use crate::{read::ReadError, FontData, FontRead};

/// The font has 512 glyphs rather than 256.
pub const MODE512: u8 = 0x01;
/// The font is followed by a unicode table.
pub const MODEHASTAB: u8 = 0x02;
/// The unicode table contains sequences.
///
/// Real fonts set this inconsistently; only [`MODEHASTAB`] decides whether a
/// table is read.
pub const MODEHASSEQ: u8 = 0x04;

/// Ends the entries for one glyph.
pub const SEPARATOR: u16 = 0xFFFF;
/// Starts a sequence of code units mapped to one glyph.
pub const STARTSEQ: u16 = 0xFFFE;

/// Every version 1 glyph is one byte wide.
pub const WIDTH: u32 = 8;

/// The fixed header at the start of a version 1 font.
#[derive(Clone, Copy, Debug, bytemuck::AnyBitPattern)]
#[repr(C)]
pub struct Psf1Header {
    pub magic: [u8; 2],
    pub mode: u8,
    /// Height of each glyph, which is also the byte size of each glyph.
    pub height: u8,
}

impl FixedSize for Psf1Header {
    const RAW_BYTE_LEN: usize = 4;
}

impl Psf1Header {
    pub fn num_glyphs(&self) -> u32 {
        if self.mode & MODE512 != 0 {
            512
        } else {
            256
        }
    }

    pub fn has_unicode_table(&self) -> bool {
        self.mode & MODEHASTAB != 0
    }

    pub fn has_sequences(&self) -> bool {
        self.mode & MODEHASSEQ != 0
    }

    /// Compute the validated layout of a file of `file_len` bytes.
    pub fn geometry(&self, file_len: usize) -> Result<Geometry, ReadError> {
        Geometry {
            format: Format::Psf1,
            num_glyphs: self.num_glyphs(),
            width: WIDTH,
            height: self.height as u32,
            charsize: self.height as usize,
            glyphs_offset: Self::RAW_BYTE_LEN,
            has_unicode_table: self.has_unicode_table(),
            unrecognized_version: None,
        }
        .validate(file_len)
    }
}

impl<'a> FontRead<'a> for &'a Psf1Header {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let header: &Psf1Header = data.read_ref_at(0)?;
        if header.magic != PSF1_MAGIC {
            return Err(ReadError::InvalidMagic);
        }
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psf_test_data::psf1;

    #[test]
    fn read_header() {
        let buf = psf1::font(MODE512 | MODEHASTAB, 14);
        let header = <&Psf1Header>::read(FontData::new(&buf)).unwrap();
        assert_eq!(header.num_glyphs(), 512);
        assert_eq!(header.height, 14);
        assert!(header.has_unicode_table());
        assert!(!header.has_sequences());

        let geometry = header.geometry(buf.len()).unwrap();
        assert_eq!(geometry.width, 8);
        assert_eq!(geometry.charsize, 14);
        assert_eq!(geometry.glyphs_offset, 4);
        assert_eq!(geometry.table_offset(), 4 + 512 * 14);
    }

    #[test]
    fn mode512_needs_512_glyphs() {
        // a body that only holds 256 glyphs
        let mut buf = psf1::font(0, 16);
        buf.write_at("mode", MODE512);
        let header = <&Psf1Header>::read(FontData::new(&buf)).unwrap();
        assert_eq!(header.geometry(buf.len()), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn zero_height() {
        let buf = psf1::header(0, 0);
        let header = <&Psf1Header>::read(FontData::new(&buf)).unwrap();
        assert!(matches!(
            header.geometry(buf.len()),
            Err(ReadError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn short_header() {
        let buf = [0x36, 0x04, 0x00];
        assert_eq!(
            <&Psf1Header>::read(FontData::new(&buf)).err(),
            Some(ReadError::OutOfBounds)
        );
    }
}
