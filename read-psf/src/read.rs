//! Traits for interpreting font data

use crate::font_data::FontData;

/// A type that can be read from raw font data.
///
/// This is implemented for the self-describing parts of a font file, such as
/// the fixed headers.
pub trait FontRead<'a>: Sized {
    /// Read an instace of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The data ended before a header, glyph body or table was complete.
    OutOfBounds,
    /// The data does not start with a known PSF signature.
    InvalidMagic,
    /// A header field disagrees with the geometry or size of the file.
    InvalidGeometry(&'static str),
    /// The unicode table violates its grammar.
    MalformedData(&'static str),
    /// Bytes that are not valid UTF-8 were found where text was expected.
    IllegalSequence,
    /// Memory for the glyph body or mapping table could not be reserved.
    OutOfMemory,
}

/// Broad classes of [`ReadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The file is corrupt or is not a supported PSF font.
    Format,
    /// An allocation failed.
    OutOfMemory,
    /// Invalid UTF-8 was encountered.
    IllegalSequence,
}

impl ReadError {
    /// The class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::OutOfBounds
            | ReadError::InvalidMagic
            | ReadError::InvalidGeometry(_)
            | ReadError::MalformedData(_) => ErrorKind::Format,
            ReadError::IllegalSequence => ErrorKind::IllegalSequence,
            ReadError::OutOfMemory => ErrorKind::OutOfMemory,
        }
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::InvalidMagic => write!(f, "Not a PSF font: unrecognized magic number"),
            ReadError::InvalidGeometry(msg) => write!(f, "Invalid glyph geometry: '{msg}'"),
            ReadError::MalformedData(msg) => write!(f, "Malformed data: '{msg}'"),
            ReadError::IllegalSequence => write!(f, "Illegal UTF-8 byte sequence"),
            ReadError::OutOfMemory => write!(f, "Out of memory"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(ReadError::OutOfBounds.kind(), ErrorKind::Format);
        assert_eq!(
            ReadError::MalformedData("unpaired surrogate").kind(),
            ErrorKind::Format
        );
        assert_eq!(ReadError::IllegalSequence.kind(), ErrorKind::IllegalSequence);
        assert_eq!(ReadError::OutOfMemory.kind(), ErrorKind::OutOfMemory);
    }

    #[test]
    fn display() {
        assert_eq!(
            ReadError::InvalidGeometry("no glyphs").to_string(),
            "Invalid glyph geometry: 'no glyphs'"
        );
    }
}
