//! Glyph Identifiers
//!
//! PSF fonts have no notion of a reserved glyph: every index below the
//! font's glyph count is a real bitmap. The raw value is the zero-based
//! position of the bitmap in the glyph body.

/// A 32-bit glyph identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphId(u32);

impl GlyphId {
    /// Construct a new `GlyphId`.
    pub const fn new(raw: u32) -> Self {
        GlyphId(raw)
    }

    /// The identifier as a u32.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// The identifier as an index into the glyph body.
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for GlyphId {
    fn from(value: u32) -> Self {
        GlyphId(value)
    }
}

impl From<GlyphId> for u32 {
    fn from(value: GlyphId) -> Self {
        value.0
    }
}

impl std::fmt::Display for GlyphId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "GID_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(GlyphId::new(65).to_string(), "GID_65");
        assert_eq!(u32::from(GlyphId::from(511)), 511);
    }
}
