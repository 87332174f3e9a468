//! The unicode table.
//!
//! The table follows the glyph body and holds, for each glyph in order, the
//! text that the glyph represents. Each glyph's entries are a list of
//! single characters, optionally followed by one or more sequences of
//! characters (such as a base letter and a combining mark), and end with a
//! separator:
//!
//! ```text
//! entries  := char* ( STARTSEQ char+ )* SEPARATOR
//! ```
//!
//! Version 1 fonts store characters as 16-bit code units, using surrogate
//! pairs for characters outside the basic plane. Version 2 fonts store
//! characters as UTF-8.
//!
//! Every character and sequence becomes a key in a [`Unimap`] whose value is
//! the glyph.

use types::{Format, GlyphId};

use super::{psf1, psf2, Geometry};
use crate::{
    font_data::Cursor,
    read::ReadError,
    unimap::{SequenceBuilder, Unimap},
    utf8::{self, Utf8Char},
    FontData,
};

/// Decode the unicode table of a font into a [`Unimap`].
///
/// `data` is the whole file. Returns `None` if the table contains no
/// mappings at all, in which case glyphs are selected by code point.
pub fn read_unicode_table(
    data: FontData,
    geometry: &Geometry,
) -> Result<Option<Unimap>, ReadError> {
    let table = data
        .split_off(geometry.table_offset())
        .ok_or(ReadError::OutOfBounds)?;
    match geometry.format {
        Format::Psf1 => decode_entries(Psf1Tokens::new(table), geometry.num_glyphs),
        Format::Psf2 => decode_entries(Psf2Tokens::new(table), geometry.num_glyphs),
    }
}

/// One lexical item in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    Separator,
    StartSequence,
    Char(Utf8Char),
}

/// Splits a table into tokens.
pub(crate) trait TokenSource {
    /// Read the next token; running out of data is an error.
    fn next_token(&mut self) -> Result<Token, ReadError>;
}

/// Version 1 tokens: little-endian UTF-16 code units.
pub(crate) struct Psf1Tokens<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Psf1Tokens<'a> {
    pub(crate) fn new(data: FontData<'a>) -> Self {
        Psf1Tokens {
            cursor: data.cursor(),
        }
    }
}

impl TokenSource for Psf1Tokens<'_> {
    fn next_token(&mut self) -> Result<Token, ReadError> {
        let unit: u16 = self.cursor.read()?;
        let ch = match unit {
            psf1::SEPARATOR => return Ok(Token::Separator),
            psf1::STARTSEQ => return Ok(Token::StartSequence),
            0xD800..=0xDFFF => {
                let partner: u16 = self.cursor.read()?;
                combine_surrogates(unit, partner)?
            }
            _ => char::from_u32(unit as u32)
                .ok_or(ReadError::MalformedData("invalid code unit"))?,
        };
        Ok(Token::Char(utf8::encode(ch)))
    }
}

/// Combine two surrogates into a scalar value.
///
/// Some fonts in the wild store the low surrogate first, so the pair is
/// accepted in either order.
fn combine_surrogates(first: u16, second: u16) -> Result<char, ReadError> {
    let (high, low) = match (first, second) {
        (0xD800..=0xDBFF, 0xDC00..=0xDFFF) => (first, second),
        (0xDC00..=0xDFFF, 0xD800..=0xDBFF) => (second, first),
        _ => return Err(ReadError::MalformedData("unpaired surrogate")),
    };
    let scalar = 0x10000 + (((high - 0xD800) as u32) << 10) + (low - 0xDC00) as u32;
    char::from_u32(scalar).ok_or(ReadError::MalformedData("unpaired surrogate"))
}

/// Version 2 tokens: UTF-8, with two bytes that never occur in UTF-8 as
/// markers.
pub(crate) struct Psf2Tokens<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Psf2Tokens<'a> {
    pub(crate) fn new(data: FontData<'a>) -> Self {
        Psf2Tokens {
            cursor: data.cursor(),
        }
    }
}

impl TokenSource for Psf2Tokens<'_> {
    fn next_token(&mut self) -> Result<Token, ReadError> {
        match self.cursor.peek_u8()? {
            psf2::SEPARATOR => {
                self.cursor.advance_by(1);
                Ok(Token::Separator)
            }
            psf2::STARTSEQ => {
                self.cursor.advance_by(1);
                Ok(Token::StartSequence)
            }
            _ => {
                let (ch, len) = utf8::decode(self.cursor.remaining())?;
                self.cursor.advance_by(len);
                Ok(Token::Char(utf8::encode(ch)))
            }
        }
    }
}

/// Read the entries for `num_glyphs` glyphs.
pub(crate) fn decode_entries(
    mut tokens: impl TokenSource,
    num_glyphs: u32,
) -> Result<Option<Unimap>, ReadError> {
    let mut map: Option<Unimap> = None;
    'glyphs: for gid in 0..num_glyphs {
        let glyph = GlyphId::new(gid);
        // single characters
        loop {
            match tokens.next_token()? {
                Token::Separator => continue 'glyphs,
                Token::StartSequence => break,
                Token::Char(ch) => {
                    log::trace!("{glyph}: {ch:?}");
                    let map = map.get_or_insert_with(Unimap::new);
                    map.insert(ch.as_bytes(), glyph)?;
                }
            }
        }
        // sequences
        let mut builder = SequenceBuilder::new(map.get_or_insert_with(Unimap::new));
        loop {
            match tokens.next_token()? {
                Token::Char(ch) => builder.push(ch.as_bytes())?,
                Token::StartSequence => {
                    log::trace!("{glyph}: sequence");
                    builder.commit(glyph)?;
                }
                Token::Separator => {
                    log::trace!("{glyph}: sequence");
                    builder.commit(glyph)?;
                    break;
                }
            }
        }
    }
    Ok(map)
}
