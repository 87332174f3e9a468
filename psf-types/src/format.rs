//! Identifying the on-disk layout of a font file.

use crate::{PSF1_MAGIC, PSF2_MAGIC};

/// The two PC Screen Font layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    /// The original layout: a 4-byte header, 8-pixel wide glyphs, and an
    /// optional table of UCS-2 code units.
    Psf1,
    /// The extended layout: a 32-byte header, arbitrary glyph geometry,
    /// and an optional table of UTF-8 sequences.
    Psf2,
}

impl Format {
    /// Determine the layout from the leading magic bytes of a file.
    ///
    /// Returns `None` if the data starts with neither signature.
    pub fn sniff(data: &[u8]) -> Option<Format> {
        if data.starts_with(&PSF1_MAGIC) {
            Some(Format::Psf1)
        } else if data.starts_with(&PSF2_MAGIC) {
            Some(Format::Psf2)
        } else {
            None
        }
    }

    /// The magic signature for this layout.
    pub const fn magic(self) -> &'static [u8] {
        match self {
            Format::Psf1 => &PSF1_MAGIC,
            Format::Psf2 => &PSF2_MAGIC,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Format::Psf1 => f.write_str("PSF1"),
            Format::Psf2 => f.write_str("PSF2"),
        }
    }
}
