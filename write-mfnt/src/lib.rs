//! Writing MFnt bitmap fonts
//!
//! This crate turns rasterized glyphs into MFnt files. Glyphs are either
//! stored as packed rows, or compressed by trying every applicable word
//! length and keeping the smallest command stream.
//!
//! # Example
//!
//! ```
//! use read_mfnt::{Bitmap, FontRef};
//! use write_mfnt::{FontBuilder, FontOptions, Glyph};
//!
//! let bitmap = Bitmap::from_rows([[false, true, false], [true, true, true]]).unwrap();
//! let glyph = Glyph {
//!     codepoint: b'A',
//!     advance: 4,
//!     bearing_x: 0,
//!     bearing_y: 2,
//!     bitmap,
//! };
//! let options = FontOptions {
//!     compressed: true,
//!     ..Default::default()
//! };
//! let bytes = FontBuilder::new(options).add_glyph(&glyph)?.build()?;
//!
//! let font = FontRef::new(&bytes).unwrap();
//! assert_eq!(font.glyph(b'A').unwrap().unwrap().bitmap().unwrap(), glyph.bitmap);
//! # Ok::<_, write_mfnt::error::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bits;
pub mod codec;
pub mod error;
mod font_builder;
mod glyph;
pub mod kerning;
mod raster;
pub mod selector;
mod write;

pub use bits::BitWriter;
pub use codec::{encode_raw, encode_word_mode, EncodedBitmap};
pub use error::Error;
pub use font_builder::{FontBuilder, FontOptions};
pub use glyph::{pack_rows, Glyph, PackedGlyph, MAX_DIMENSION};
pub use kerning::build_kerning;
pub use raster::Rasterizer;
pub use selector::{compress, Compressed};
pub use write::{dump_table, FontWrite, TableWriter};

/// Public re-export of the read-mfnt crate.
pub extern crate read_mfnt as read;
