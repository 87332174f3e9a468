//! Mapping text to glyphs.

use core::ops::Range;

use types::GlyphId;

use crate::{font::Font, read::ReadError, unimap::GlyphMatch, utf8};

/// Characters tried, in order, by [`Font::replacement_glyph`].
const REPLACEMENT_CHARS: [char; 3] = ['\u{FFFD}', '?', ' '];

impl Font {
    /// Find the glyph for the text at the start of `text`.
    ///
    /// If the font has a unicode table, this is the glyph for the longest
    /// mapped sequence that `text` starts with. Otherwise it is the glyph
    /// whose index is the code point of the first character, if the font
    /// has that many glyphs.
    ///
    /// Returns `Ok(None)` if `text` is empty or nothing matches; the caller
    /// should skip at least one character and draw a placeholder. Without a
    /// unicode table, text that does not start with valid UTF-8 is an
    /// [`ReadError::IllegalSequence`] error. Nothing is consumed in either
    /// case.
    pub fn next_glyph(&self, text: &[u8]) -> Result<Option<GlyphMatch>, ReadError> {
        if let Some(map) = self.unimap() {
            return Ok(map.longest_match(text));
        }
        if text.is_empty() {
            return Ok(None);
        }
        let (ch, len) = utf8::decode(text)?;
        let code_point = ch as u32;
        Ok((code_point < self.num_glyphs()).then(|| GlyphMatch {
            glyph: GlyphId::new(code_point),
            len,
        }))
    }

    /// Like [`next_glyph`](Self::next_glyph), for text that ends at the
    /// first NUL byte.
    pub fn next_glyph_nul_terminated(
        &self,
        text: &[u8],
    ) -> Result<Option<GlyphMatch>, ReadError> {
        let end = text.iter().position(|b| *b == 0).unwrap_or(text.len());
        self.next_glyph(&text[..end])
    }

    /// The glyph for a single character.
    ///
    /// Returns `None` unless some glyph stands for exactly this character.
    pub fn map_char(&self, ch: char) -> Option<GlyphId> {
        let encoded = utf8::encode(ch);
        self.next_glyph(encoded.as_bytes())
            .ok()
            .flatten()
            .filter(|hit| hit.len == encoded.len())
            .map(|hit| hit.glyph)
    }

    /// A glyph to draw in place of text that has no glyph.
    ///
    /// This is the glyph for U+FFFD REPLACEMENT CHARACTER, or failing that
    /// the glyph for `?` or for a space.
    pub fn replacement_glyph(&self) -> Option<GlyphId> {
        REPLACEMENT_CHARS
            .into_iter()
            .find_map(|ch| self.map_char(ch))
    }

    /// Iterate over the glyphs for all of `text`.
    pub fn glyphs<'a>(&'a self, text: &'a [u8]) -> Glyphs<'a> {
        Glyphs {
            font: self,
            text,
            pos: 0,
        }
    }
}

/// A span of text and the glyph that draws it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRun {
    /// The glyph, or `None` if the text has no glyph or is not valid UTF-8.
    pub glyph: Option<GlyphId>,
    /// The byte range of the text.
    pub range: Range<usize>,
}

/// An iterator over the glyphs for some text.
///
/// Text with no glyph is skipped one character at a time: the lead byte
/// and any continuation bytes that follow it. This always makes progress,
/// so every byte of the text is covered by exactly one run.
///
/// See [`Font::glyphs`].
#[derive(Clone, Debug)]
pub struct Glyphs<'a> {
    font: &'a Font,
    text: &'a [u8],
    pos: usize,
}

impl Iterator for Glyphs<'_> {
    type Item = GlyphRun;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.text.get(self.pos..).filter(|rest| !rest.is_empty())?;
        let start = self.pos;
        let (glyph, len) = match self.font.next_glyph(rest) {
            Ok(Some(hit)) => (Some(hit.glyph), hit.len),
            Ok(None) | Err(_) => {
                let continuation = rest[1..]
                    .iter()
                    .take_while(|b| **b & 0xC0 == 0x80)
                    .count();
                (None, 1 + continuation)
            }
        };
        self.pos += len;
        Some(GlyphRun {
            glyph,
            range: start..self.pos,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use psf_test_data::{psf1, psf2};

    fn gid(raw: u32) -> GlyphId {
        GlyphId::new(raw)
    }

    fn hit(glyph: u32, len: usize) -> Option<GlyphMatch> {
        Some(GlyphMatch {
            glyph: gid(glyph),
            len,
        })
    }

    #[test]
    fn identity_mapping() {
        let num_glyphs = 300;
        let font = Font::new(&psf2::font(num_glyphs, 4, 4)).unwrap();
        for code_point in 0..num_glyphs + 100 {
            let ch = char::from_u32(code_point).unwrap();
            let encoded = utf8::encode(ch);
            let expected = (code_point < num_glyphs).then(|| GlyphMatch {
                glyph: gid(code_point),
                len: ch.len_utf8(),
            });
            assert_eq!(font.next_glyph(encoded.as_bytes()), Ok(expected));
        }
    }

    #[test]
    fn identity_mapping_errors() {
        let font = Font::new(&psf1::font(0, 8)).unwrap();
        assert_eq!(font.next_glyph(b""), Ok(None));
        assert_eq!(font.next_glyph(b"\xC3"), Err(ReadError::IllegalSequence));
        assert_eq!(font.next_glyph(b"\x80A"), Err(ReadError::IllegalSequence));
        // NUL is an ordinary character unless the text is NUL-terminated
        assert_eq!(font.next_glyph(b"\0A"), Ok(hit(0, 1)));
        assert_eq!(font.next_glyph_nul_terminated(b"\0A"), Ok(None));
        assert_eq!(font.next_glyph_nul_terminated(b"A\0"), Ok(hit(0x41, 1)));
    }

    #[test]
    fn longest_match_through_font() {
        let table = psf2::unicode_table(8, &[(2, b"e"), (5, b"\xFEe\xCC\x81")]);
        let buf = psf2::header(0, psf2::HAS_UNICODE_TABLE, 8, 8, 8)
            .extend_bytes(&psf_test_data::glyph_body(8, 8))
            .extend_bytes(&table);
        let font = Font::new(&buf).unwrap();

        assert_eq!(font.next_glyph("e\u{301}x".as_bytes()), Ok(hit(5, 3)));
        assert_eq!(font.next_glyph(b"ex"), Ok(hit(2, 1)));
        assert_eq!(font.next_glyph(b"x"), Ok(None));
        // with a table, invalid UTF-8 is simply unmapped
        assert_eq!(font.next_glyph(b"\xFF"), Ok(None));
    }

    #[test]
    fn single_byte_without_terminal() {
        let font = Font::new(&psf2::with_unicode_table()).unwrap();
        // the first byte of "é", which is only mapped as a whole
        assert_eq!(font.next_glyph(b"\xC3"), Ok(None));
        assert_eq!(font.next_glyph_nul_terminated(b"\xC3\0\xA9"), Ok(None));
        assert_eq!(font.next_glyph(b"\xC3\xA9"), Ok(hit(3, 2)));
    }

    #[test]
    fn psf1_surrogates_resolve() {
        let font = Font::new(&psf1::with_unicode_table()).unwrap();
        assert_eq!(font.map_char('\u{1F600}'), Some(gid(0x02)));
        assert_eq!(font.map_char('\u{1F603}'), Some(gid(0x03)));
        assert_eq!(font.map_char('\u{410}'), Some(gid(0x41)));
        assert_eq!(font.next_glyph("A\u{30A}".as_bytes()), Ok(hit(0x8F, 3)));
        assert_eq!(font.map_char('\u{212B}'), Some(gid(0x8F)));
    }

    #[test]
    fn map_char_needs_whole_char() {
        let font = Font::new(&psf2::with_unicode_table()).unwrap();
        assert_eq!(font.map_char('A'), Some(gid(1)));
        assert_eq!(font.map_char('Z'), None);
        // "fi" is mapped, but 'f' and 'i' are separate glyphs too
        assert_eq!(font.map_char('f'), Some(gid(6)));
    }

    #[test]
    fn replacement() {
        let font = Font::new(&psf2::with_unicode_table()).unwrap();
        assert_eq!(font.replacement_glyph(), Some(gid(8)));

        // no table: U+FFFD is out of range, '?' is not
        let font = Font::new(&psf1::font(0, 8)).unwrap();
        assert_eq!(font.replacement_glyph(), Some(gid(b'?' as u32)));

        let table = psf2::unicode_table(2, &[(0, b"a")]);
        let buf = psf2::header(0, psf2::HAS_UNICODE_TABLE, 2, 1, 8)
            .extend_bytes(&[0, 0])
            .extend_bytes(&table);
        let font = Font::new(&buf).unwrap();
        assert_eq!(font.replacement_glyph(), None);
    }

    #[test]
    fn iterate_text() {
        let font = Font::new(&psf2::with_unicode_table()).unwrap();
        let text = "fix\u{E9}\u{1F600}".as_bytes();
        let runs: Vec<_> = font.glyphs(text).collect();
        assert_eq!(
            runs,
            vec![
                GlyphRun {
                    glyph: Some(gid(5)),
                    range: 0..2
                },
                GlyphRun {
                    glyph: None,
                    range: 2..3
                },
                GlyphRun {
                    glyph: Some(gid(3)),
                    range: 3..5
                },
                GlyphRun {
                    glyph: Some(gid(4)),
                    range: 5..9
                },
            ]
        );
    }

    #[test]
    fn iterate_skips_whole_characters() {
        let font = Font::new(&psf1::font(0, 8)).unwrap();
        // U+0416 is past the last glyph; the stray continuation byte after
        // it is skipped along with it
        let text = b"a\xD0\x96\x80b\x80";
        let runs: Vec<_> = font
            .glyphs(text)
            .map(|run| (run.glyph.map(GlyphId::to_u32), run.range))
            .collect();
        assert_eq!(
            runs,
            vec![
                (Some(0x61), 0..1),
                (None, 1..4),
                (Some(0x62), 4..5),
                (None, 5..6),
            ]
        );
    }

    #[test]
    fn iterate_empty() {
        let font = Font::new(&psf1::font(0, 8)).unwrap();
        assert_eq!(font.glyphs(b"").count(), 0);
    }
}
