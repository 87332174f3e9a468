//! Strict UTF-8 coding of single scalar values.
//!
//! Glyph mapping keys are always UTF-8, regardless of the encoding used by
//! the unicode table on disk.

use crate::read::ReadError;

/// The length of the sequence introduced by `lead`.
///
/// Returns `None` for continuation bytes and for lead bytes that would
/// introduce a sequence longer than four bytes.
pub fn sequence_len(lead: u8) -> Option<usize> {
    match lead.leading_ones() {
        0 => Some(1),
        n @ 2..=4 => Some(n as usize),
        _ => None,
    }
}

/// Decode the scalar value at the start of `bytes`.
///
/// Returns the value and the number of bytes it occupies. Overlong forms,
/// surrogates, values above U+10FFFF, and sequences cut short by the end of
/// `bytes` are all rejected with [`ReadError::IllegalSequence`].
pub fn decode(bytes: &[u8]) -> Result<(char, usize), ReadError> {
    let lead = *bytes.first().ok_or(ReadError::IllegalSequence)?;
    let len = sequence_len(lead).ok_or(ReadError::IllegalSequence)?;
    let seq = bytes.get(..len).ok_or(ReadError::IllegalSequence)?;
    // the slice holds exactly one sequence, so this is a validation of that
    // sequence alone
    core::str::from_utf8(seq)
        .ok()
        .and_then(|s| s.chars().next())
        .map(|ch| (ch, len))
        .ok_or(ReadError::IllegalSequence)
}

/// Encode a scalar value as its minimal UTF-8 sequence.
pub fn encode(ch: char) -> Utf8Char {
    Utf8Char::new(ch)
}

/// The UTF-8 encoding of one `char`, stored inline.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf8Char {
    buf: [u8; 4],
    len: u8,
}

impl Utf8Char {
    pub fn new(ch: char) -> Self {
        let mut buf = [0; 4];
        let len = ch.encode_utf8(&mut buf).len() as u8;
        Utf8Char { buf, len }
    }

    /// The encoded bytes; between one and four of them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for Utf8Char {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Utf8Char({:02X?})", self.as_bytes())
    }
}
