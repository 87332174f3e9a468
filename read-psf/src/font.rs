//! The parsed font.

use alloc::vec::Vec;

use types::{Format, GlyphId};

use crate::{
    glyph::Glyph,
    read::ReadError,
    tables::{psf2::PSF2_MAX_VERSION, unicode::read_unicode_table, Geometry},
    unimap::Unimap,
    FontData, FontRead,
};

/// A PC Screen Font, read into memory.
///
/// The glyph bitmaps and the unicode mapping are copied out of the file, so
/// a `Font` does not borrow the data it was parsed from.
#[derive(Clone, Debug)]
pub struct Font {
    format: Format,
    num_glyphs: u32,
    width: u32,
    height: u32,
    charsize: usize,
    glyph_data: Vec<u8>,
    map: Option<Unimap>,
}

impl Font {
    /// Parse a font from the bytes of a font file.
    ///
    /// On success, also returns the header version if the font declares a
    /// version newer than [`PSF2_MAX_VERSION`]. Such fonts are read as if
    /// they were the newest known version.
    pub fn parse(data: &[u8]) -> Result<(Font, Option<u32>), ReadError> {
        let data = FontData::new(data);
        let geometry = Geometry::read(data)?;
        let map = if geometry.has_unicode_table {
            read_unicode_table(data, &geometry)?
        } else {
            None
        };

        let body = data
            .slice(geometry.glyphs_offset..geometry.table_offset())
            .ok_or(ReadError::OutOfBounds)?;
        let mut glyph_data = Vec::new();
        glyph_data
            .try_reserve_exact(body.len())
            .map_err(|_| ReadError::OutOfMemory)?;
        glyph_data.extend_from_slice(body.as_bytes());

        log::debug!(
            "read {} font: {} glyphs of {}x{}, {} mappings",
            geometry.format,
            geometry.num_glyphs,
            geometry.width,
            geometry.height,
            map.as_ref().map(Unimap::len).unwrap_or_default(),
        );

        let font = Font {
            format: geometry.format,
            num_glyphs: geometry.num_glyphs,
            width: geometry.width,
            height: geometry.height,
            charsize: geometry.charsize,
            glyph_data,
            map,
        };
        Ok((font, geometry.unrecognized_version))
    }

    /// Parse a font, logging a warning if its version is not recognized.
    pub fn new(data: &[u8]) -> Result<Font, ReadError> {
        let (font, unrecognized_version) = Self::parse(data)?;
        if let Some(version) = unrecognized_version {
            log::warn!(
                "unrecognized PSF2 version {version}, reading as version {PSF2_MAX_VERSION}"
            );
        }
        Ok(font)
    }

    /// The layout the font was read from.
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn num_glyphs(&self) -> u32 {
        self.num_glyphs
    }

    /// Glyph width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Glyph height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The byte size of each glyph bitmap.
    pub fn charsize(&self) -> usize {
        self.charsize
    }

    /// The number of bytes in each row of a glyph bitmap.
    pub fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// All glyph bitmaps, one after another.
    pub fn glyph_data(&self) -> &[u8] {
        &self.glyph_data
    }

    /// The mapping from text to glyphs, if the font has a unicode table.
    pub fn unimap(&self) -> Option<&Unimap> {
        self.map.as_ref()
    }

    /// The bitmap for a glyph, or `None` if there is no such glyph.
    pub fn glyph(&self, gid: GlyphId) -> Option<Glyph<'_>> {
        if gid.to_u32() >= self.num_glyphs {
            return None;
        }
        let start = gid.to_usize() * self.charsize;
        let data = self.glyph_data.get(start..start + self.charsize)?;
        Some(Glyph::new(self.width, self.height, data))
    }
}
