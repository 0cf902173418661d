//! Packing glyph records

use read_mfnt::{Bitmap, GlyphMetrics};

use crate::error::Error;
use crate::selector::{compress_with, Compressed};
use crate::write::{FontWrite, TableWriter};

/// The largest width or height a glyph may have.
///
/// Metrics bytes are read as signed values by some consumers.
pub const MAX_DIMENSION: usize = i8::MAX as usize;

/// A rasterized glyph, before packing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    pub codepoint: u8,
    pub advance: u8,
    pub bearing_x: i8,
    pub bearing_y: i8,
    pub bitmap: Bitmap,
}

/// A glyph record, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedGlyph {
    pub codepoint: u8,
    pub metrics: GlyphMetrics,
    pub compressed: bool,
    pub payload: Vec<u8>,
}

impl Glyph {
    pub fn new(codepoint: u8, bitmap: Bitmap) -> Self {
        Glyph {
            codepoint,
            bitmap,
            ..Default::default()
        }
    }

    /// `true` if the glyph has no pixels to store.
    pub fn is_empty(&self) -> bool {
        self.bitmap.is_empty()
    }

    /// Pack this glyph as packed rows or as a compressed stream.
    pub fn pack(&self, compressed: bool) -> Result<PackedGlyph, Error> {
        let (width, height) = (self.bitmap.width(), self.bitmap.height());
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Error::GlyphTooLarge {
                codepoint: self.codepoint,
                width,
                height,
            });
        }
        let (stored_width, packing, payload) = if self.is_empty() {
            (width, 1, Vec::new())
        } else if compressed {
            // the padded width must still fit
            let Compressed {
                encoded,
                word_len,
                width,
            } = compress_with(&self.bitmap, width < MAX_DIMENSION);
            log::debug!(
                "glyph {:?}: word length {word_len}, {} bytes",
                self.codepoint as char,
                encoded.byte_len()
            );
            (width, word_len, encoded.data)
        } else {
            let stride = width.div_ceil(8);
            (width, stride, pack_rows(&self.bitmap, stride))
        };
        Ok(PackedGlyph {
            codepoint: self.codepoint,
            metrics: GlyphMetrics {
                width: stored_width as u8,
                height: height as u8,
                packing: packing as u8,
                advance: self.advance,
                bearing_x: self.bearing_x,
                bearing_y: self.bearing_y,
            },
            compressed,
            payload,
        })
    }
}

/// Pack rows of pixels, `stride` bytes per row, leftmost pixel in the low bit.
pub fn pack_rows(bitmap: &Bitmap, stride: usize) -> Vec<u8> {
    let mut out = vec![0u8; stride * bitmap.height()];
    for (row, packed) in bitmap.rows().zip(out.chunks_mut(stride.max(1))) {
        for (x, _) in row.iter().enumerate().filter(|(_, bit)| **bit) {
            if let Some(byte) = packed.get_mut(x / 8) {
                *byte |= 1 << (x % 8);
            }
        }
    }
    out
}

impl PackedGlyph {
    /// The size of the record in bytes.
    pub fn len(&self) -> usize {
        read_mfnt::METRICS_LEN + self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl FontWrite for PackedGlyph {
    fn write_into(&self, writer: &mut TableWriter) {
        self.metrics.write_into(writer);
        writer.write_slice(&self.payload);
    }
}
