//! Reading MFnt bitmap fonts
//!
//! This crate provides memory safe parsing of MFnt files, a compact container
//! for small monochrome bitmap fonts aimed at microcontroller displays.
//!
//! A file consists of a 12 byte header, a table of 256 little-endian glyph
//! offsets indexed by byte value, an optional kerning table, and a sequence of
//! glyph records. Each glyph record holds six bytes of metrics followed by the
//! glyph's bitmap, which is either packed rows or a compressed command stream;
//! see the [`codec`] module for the latter.
//!
//! # Related projects
//!
//! - [`write-mfnt`] is a companion crate for creating font files
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use read_mfnt::FontRef;
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).expect("failed to read font data");
//! let glyph = font.glyph(b'A').unwrap().expect("no glyph for 'A'");
//!
//! println!("{}", glyph.bitmap().unwrap());
//! println!("'Hello' is {} pixels wide", font.measure(b"Hello").unwrap());
//! ```
//!
//! [`write-mfnt`]: https://docs.rs/write-mfnt/

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bitmap;
mod bits;
pub mod charset;
pub mod codec;
mod flags;
mod font;
mod font_data;
mod glyph;
mod read;
mod scalar;

pub use bitmap::Bitmap;
pub use bits::BitReader;
pub use codec::{decode_word_mode, Command, DecodedBitmap, MalformedReason, MalformedStream};
pub use flags::FontFlags;
pub use font::{
    FontRef, Header, KerningPair, HEADER_LEN, KERNING_RECORD_LEN, MAGIC, PAYLOAD_OFFSET,
    POINTER_TABLE_LEN, POINTER_TABLE_OFFSET,
};
pub use font_data::FontData;
pub use glyph::{GlyphMetrics, GlyphRef, METRICS_LEN};
pub use read::{FontRead, ReadError};
pub use scalar::{Scalar, U16Le};

/// Public re-export of the font-types crate.
pub extern crate font_types as types;
