//! The version 2 header.

use types::{FixedSize, Format, LittleEndian, PSF2_MAGIC};

use super::Geometry;
use crate::{read::ReadError, FontData, FontRead};

/// The highest header version whose layout is known.
///
/// Fonts with a higher version are still read with the same layout rules,
/// and the version is reported to the caller.
pub const PSF2_MAX_VERSION: u32 = 0;

/// The font is followed by a unicode table.
pub const HAS_UNICODE_TABLE: u32 = 0x01;

/// Ends the entries for one glyph.
pub const SEPARATOR: u8 = 0xFF;
/// Starts a sequence of characters mapped to one glyph.
pub const STARTSEQ: u8 = 0xFE;

/// The fixed header at the start of a version 2 font.
#[derive(Clone, Copy, Debug, bytemuck::AnyBitPattern)]
#[repr(C)]
pub struct Psf2Header {
    pub magic: [u8; 4],
    pub version: LittleEndian<u32>,
    /// Offset of the glyph body from the start of the file.
    pub header_size: LittleEndian<u32>,
    pub flags: LittleEndian<u32>,
    pub num_glyphs: LittleEndian<u32>,
    /// Byte size of each glyph.
    pub charsize: LittleEndian<u32>,
    pub height: LittleEndian<u32>,
    pub width: LittleEndian<u32>,
}

impl FixedSize for Psf2Header {
    const RAW_BYTE_LEN: usize = 32;
}

impl Psf2Header {
    pub fn has_unicode_table(&self) -> bool {
        self.flags.get() & HAS_UNICODE_TABLE != 0
    }

    /// The header version, if it is newer than [`PSF2_MAX_VERSION`].
    pub fn unrecognized_version(&self) -> Option<u32> {
        let version = self.version.get();
        (version > PSF2_MAX_VERSION).then_some(version)
    }

    /// Compute the validated layout of a file of `file_len` bytes.
    pub fn geometry(&self, file_len: usize) -> Result<Geometry, ReadError> {
        let header_size = self.header_size.get() as usize;
        if header_size < Self::RAW_BYTE_LEN {
            return Err(ReadError::InvalidGeometry(
                "header size smaller than the header",
            ));
        }
        let width = self.width.get();
        let height = self.height.get();
        let charsize = self.charsize.get();
        let row_bytes = (width as u64).div_ceil(8);
        if height as u64 * row_bytes != charsize as u64 {
            return Err(ReadError::InvalidGeometry(
                "charsize does not match width and height",
            ));
        }
        Geometry {
            format: Format::Psf2,
            num_glyphs: self.num_glyphs.get(),
            width,
            height,
            charsize: charsize as usize,
            glyphs_offset: header_size,
            has_unicode_table: self.has_unicode_table(),
            unrecognized_version: self.unrecognized_version(),
        }
        .validate(file_len)
    }
}

impl<'a> FontRead<'a> for &'a Psf2Header {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let header: &Psf2Header = data.read_ref_at(0)?;
        if header.magic != PSF2_MAGIC {
            return Err(ReadError::InvalidMagic);
        }
        Ok(header)
    }
}
