//! Common scalar data types used in [PC Screen Font][psf] files
//!
//! Both PSF layouts store their multi-byte fields in little-endian order, so
//! unlike most font formats there is no big-endian wrapper here.
//!
//! [psf]: https://www.win.tue.nl/~aeb/linux/kbd/font-formats-1.html

#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod format;
mod glyph_id;
mod raw;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use format::Format;
pub use glyph_id::GlyphId;
pub use raw::{FixedSize, LittleEndian, Scalar};

/// The magic number at the start of a version 1 font.
pub const PSF1_MAGIC: [u8; 2] = [0x36, 0x04];

/// The magic number at the start of a version 2 font.
pub const PSF2_MAGIC: [u8; 4] = [0x72, 0xb5, 0x4a, 0x86];
