//! Glyph records

use crate::bitmap::Bitmap;
use crate::codec::{decode_word_mode, DecodedBitmap};
use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// The size in bytes of the metrics that begin each glyph record.
pub const METRICS_LEN: usize = 6;

/// The fixed-size prefix of a glyph record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphMetrics {
    pub width: u8,
    pub height: u8,
    /// Bytes per row for uncompressed glyphs, the word length in pixels for
    /// compressed ones.
    pub packing: u8,
    pub advance: u8,
    pub bearing_x: i8,
    pub bearing_y: i8,
}

impl GlyphMetrics {
    /// `true` if the glyph has no bitmap.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The metrics encoded as they appear in a glyph record.
    pub fn to_bytes(&self) -> [u8; METRICS_LEN] {
        [
            self.width,
            self.height,
            self.packing,
            self.advance,
            self.bearing_x as u8,
            self.bearing_y as u8,
        ]
    }
}

impl<'a> FontRead<'a> for GlyphMetrics {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        Ok(GlyphMetrics {
            width: cursor.read()?,
            height: cursor.read()?,
            packing: cursor.read()?,
            advance: cursor.read()?,
            bearing_x: cursor.read()?,
            bearing_y: cursor.read()?,
        })
    }
}

/// A glyph record within a font file.
#[derive(Clone, Debug)]
pub struct GlyphRef<'a> {
    pub(crate) codepoint: u8,
    pub(crate) metrics: GlyphMetrics,
    pub(crate) compressed: bool,
    /// Everything after the metrics, up to the end of the file.
    pub(crate) data: FontData<'a>,
}

impl<'a> GlyphRef<'a> {
    pub(crate) fn read(data: FontData<'a>, codepoint: u8, compressed: bool) -> Result<Self, ReadError> {
        let metrics = GlyphMetrics::read(data)?;
        let data = data.split_off(METRICS_LEN).ok_or(ReadError::OutOfBounds)?;
        Ok(GlyphRef {
            codepoint,
            metrics,
            compressed,
            data,
        })
    }

    pub fn codepoint(&self) -> u8 {
        self.codepoint
    }

    pub fn metrics(&self) -> &GlyphMetrics {
        &self.metrics
    }

    /// The file offset of this glyph's record.
    pub fn offset(&self) -> usize {
        self.data.position_in_file().saturating_sub(METRICS_LEN)
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// The bitmap payload, which runs to the end of the file.
    pub fn payload(&self) -> FontData<'a> {
        self.data
    }

    /// Decode the glyph's bitmap.
    ///
    /// The trace is empty for uncompressed glyphs.
    pub fn decode(&self) -> Result<DecodedBitmap, ReadError> {
        let width = self.metrics.width as usize;
        let height = self.metrics.height as usize;
        let packing = self.metrics.packing as usize;
        if self.metrics.is_empty() {
            return Ok(DecodedBitmap {
                bitmap: Bitmap::new(width, height),
                trace: Vec::new(),
            });
        }
        if self.compressed {
            Ok(decode_word_mode(
                self.data.as_bytes(),
                width,
                height,
                packing,
            )?)
        } else {
            Ok(DecodedBitmap {
                bitmap: Bitmap::from_packed_rows(self.data.as_bytes(), width, height, packing)?,
                trace: Vec::new(),
            })
        }
    }

    /// Decode the glyph's bitmap, discarding the trace.
    pub fn bitmap(&self) -> Result<Bitmap, ReadError> {
        self.decode().map(|decoded| decoded.bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_round_trip() {
        let bytes = [5, 7, 1, 6, 0xff, 7];
        let metrics = GlyphMetrics::read(FontData::new(&bytes)).unwrap();
        assert_eq!(metrics.bearing_x, -1);
        assert_eq!(metrics.to_bytes(), bytes);
    }

    #[test]
    fn truncated_metrics() {
        assert!(matches!(
            GlyphMetrics::read(FontData::new(&[1, 2, 3])),
            Err(ReadError::OutOfBounds)
        ));
    }

    #[test]
    fn uncompressed_payload() {
        // 3x2, one byte per row
        let bytes = [3, 2, 1, 4, 0, 2, 0b101, 0b010];
        let glyph = GlyphRef::read(FontData::new(&bytes), b'x', false).unwrap();
        let decoded = glyph.decode().unwrap();
        assert_eq!(decoded.bitmap.to_string(), "#.#\n.#.");
        assert!(decoded.trace.is_empty());
    }
}
