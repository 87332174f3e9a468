//! Reading PC Screen Font files
//!
//! This crate parses the bitmap console fonts used by the Linux kernel and
//! `kbd`, in both the original (version 1) and extended (version 2) layouts,
//! and maps text to the glyphs that draw it.
//!
//! A font is a body of fixed-size monochrome bitmaps plus an optional
//! unicode table. When the table is present, each glyph can stand for any
//! number of characters or character sequences, and text is mapped to glyphs
//! by finding the longest sequence that matches. Without a table, the glyph
//! for a character is the one at the index of its code point.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use read_psf::Font;
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = Font::new(&font_bytes).expect("failed to read font");
//!
//! for run in font.glyphs("héllo".as_bytes()) {
//!     let glyph = run.glyph.or_else(|| font.replacement_glyph());
//!     println!("{:?} -> {:?}", run.range, glyph);
//! }
//! ```
//!
//! For lower level access, the header decoders live in [`tables`], and the
//! glyph trie is a [`Unimap`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

extern crate alloc;

mod font;
mod font_data;
mod glyph;
mod read;
mod resolve;
pub mod tables;
pub mod unimap;
pub mod utf8;

pub use font::Font;
pub use font_data::FontData;
pub use glyph::{Glyph, Rows};
pub use read::{ErrorKind, FontRead, ReadError};
pub use resolve::{GlyphRun, Glyphs};
pub use unimap::{GlyphMatch, Unimap};

/// Public re-export of the psf-types crate.
pub extern crate psf_types as types;
