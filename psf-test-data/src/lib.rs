//! test data shared between the psf crates.
//!
//! Fonts are assembled in code rather than checked in as binaries, so that
//! each test can see (and patch) the exact bytes it is exercising.

pub mod lebuffer;

pub use lebuffer::LeBuffer;

/// Produce a deterministic glyph body.
///
/// Byte `i` of glyph `g` is `(g + i) as u8`, which makes it easy to assert
/// that a given glyph was copied from the expected position.
pub fn glyph_body(num_glyphs: usize, charsize: usize) -> Vec<u8> {
    (0..num_glyphs)
        .flat_map(|glyph| (0..charsize).map(move |i| (glyph + i) as u8))
        .collect()
}

pub mod psf1 {
    use super::{glyph_body, LeBuffer};
    use crate::le_buffer;

    pub const MODE512: u8 = 0x01;
    pub const MODEHASTAB: u8 = 0x02;
    pub const SEPARATOR: u16 = 0xFFFF;
    pub const STARTSEQ: u16 = 0xFFFE;

    /// The fixed four byte header.
    pub fn header(mode: u8, height: u8) -> LeBuffer {
        le_buffer! {
            [0x36u8, 0x04],
            {mode: "mode"},
            {height: "height"}
        }
    }

    /// A complete font with no unicode table.
    pub fn font(mode: u8, height: u8) -> LeBuffer {
        let num_glyphs = if mode & MODE512 != 0 { 512 } else { 256 };
        header(mode, height).extend_bytes(&glyph_body(num_glyphs, height as usize))
    }

    /// A unicode table for `num_glyphs` glyphs.
    ///
    /// Each entry lists the code units for one glyph, including any
    /// `STARTSEQ` markers; the terminating `SEPARATOR` is appended here.
    /// Glyphs without an entry get only the separator.
    pub fn unicode_table(num_glyphs: usize, entries: &[(usize, &[u16])]) -> LeBuffer {
        let mut buf = LeBuffer::new();
        for glyph in 0..num_glyphs {
            for (_, units) in entries.iter().filter(|(gid, _)| *gid == glyph) {
                buf = buf.extend(units.iter().copied());
            }
            buf = buf.push(SEPARATOR);
        }
        buf
    }

    /// The code units used by [`with_unicode_table`].
    #[rustfmt::skip]
    pub static TABLE_ENTRIES: &[(usize, &[u16])] = &[
        (0x01, &[0x263A]),                                      // WHITE SMILING FACE
        (0x02, &[0xD83D, 0xDE00]),                              // U+1F600, high then low
        (0x03, &[0xDE03, 0xD83D]),                              // U+1F603, low then high
        (0x41, &[0x0041, 0x0391, 0x0410]),                      // A, GREEK ALPHA, CYRILLIC A
        (0x65, &[0x0065]),                                      // e
        (0x82, &[0x00E9, STARTSEQ, 0x0065, 0x0301]),            // é, e + COMBINING ACUTE
        (0x8F, &[STARTSEQ, 0x0041, 0x030A, STARTSEQ, 0x212B]),  // A + RING, ANGSTROM SIGN
    ];

    /// An 8x8 font with 256 glyphs and a small unicode table.
    pub fn with_unicode_table() -> LeBuffer {
        let table = unicode_table(256, TABLE_ENTRIES);
        font(MODEHASTAB, 8).extend_bytes(&table)
    }
}

pub mod psf2 {
    use super::{glyph_body, LeBuffer};
    use crate::le_buffer;

    pub const HAS_UNICODE_TABLE: u32 = 0x01;
    pub const HEADER_SIZE: u32 = 32;
    pub const SEPARATOR: u8 = 0xFF;
    pub const STARTSEQ: u8 = 0xFE;

    /// The fixed 32 byte header.
    ///
    /// The `charsize` is computed from the geometry; every field is tagged
    /// with its name so tests can patch it.
    pub fn header(version: u32, flags: u32, num_glyphs: u32, height: u32, width: u32) -> LeBuffer {
        let charsize = height * width.div_ceil(8);
        le_buffer! {
            [0x72u8, 0xb5, 0x4a, 0x86],
            {version: "version"},
            {HEADER_SIZE: "header_size"},
            {flags: "flags"},
            {num_glyphs: "num_glyphs"},
            {charsize: "charsize"},
            {height: "height"},
            {width: "width"}
        }
    }

    /// A complete font with no unicode table.
    pub fn font(num_glyphs: u32, height: u32, width: u32) -> LeBuffer {
        let charsize = (height * width.div_ceil(8)) as usize;
        header(0, 0, num_glyphs, height, width)
            .extend_bytes(&glyph_body(num_glyphs as usize, charsize))
    }

    /// A unicode table for `num_glyphs` glyphs.
    ///
    /// Each entry holds the raw table bytes for one glyph, including any
    /// `STARTSEQ` markers; the terminating `SEPARATOR` is appended here.
    pub fn unicode_table(num_glyphs: usize, entries: &[(usize, &[u8])]) -> LeBuffer {
        let mut buf = LeBuffer::new();
        for glyph in 0..num_glyphs {
            for (_, bytes) in entries.iter().filter(|(gid, _)| *gid == glyph) {
                buf = buf.extend_bytes(bytes);
            }
            buf = buf.push(SEPARATOR);
        }
        buf
    }

    /// The raw table bytes used by [`with_unicode_table`].
    #[rustfmt::skip]
    pub static TABLE_ENTRIES: &[(usize, &[u8])] = &[
        (1, b"A"),
        (2, b"e"),
        (3, b"\xC3\xA9\xFEe\xCC\x81"),          // é, e + COMBINING ACUTE
        (4, b"\xF0\x9F\x98\x80"),               // U+1F600
        (5, b"\xFEfi"),                         // the "fi" ligature, as a sequence only
        (6, b"f"),
        (7, b"i"),
        (8, b"\xEF\xBF\xBD"),                   // REPLACEMENT CHARACTER
        (9, b"?"),
    ];

    pub const TABLE_NUM_GLYPHS: u32 = 16;
    pub const TABLE_HEIGHT: u32 = 12;
    pub const TABLE_WIDTH: u32 = 10;

    /// A 10x12 font with 16 glyphs and a unicode table.
    ///
    /// The width is not a multiple of eight, so each row is padded to two
    /// bytes.
    pub fn with_unicode_table() -> LeBuffer {
        let charsize = (TABLE_HEIGHT * TABLE_WIDTH.div_ceil(8)) as usize;
        let table = unicode_table(TABLE_NUM_GLYPHS as usize, TABLE_ENTRIES);
        header(
            0,
            HAS_UNICODE_TABLE,
            TABLE_NUM_GLYPHS,
            TABLE_HEIGHT,
            TABLE_WIDTH,
        )
        .extend_bytes(&glyph_body(TABLE_NUM_GLYPHS as usize, charsize))
        .extend_bytes(&table)
    }
}
