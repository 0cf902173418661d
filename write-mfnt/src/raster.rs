//! The interface to a glyph rasterizer

use crate::glyph::Glyph;

/// Something that can render characters as bitmaps.
///
/// Implementations own whatever handle they need (a font face, a cache);
/// callers pass the rasterizer explicitly to each operation that needs it.
pub trait Rasterizer {
    type Error;

    /// Render `codepoint`, returning its bitmap and metrics in pixels.
    ///
    /// A character without an outline is returned as an empty bitmap.
    fn rasterize(&mut self, codepoint: u8) -> Result<Glyph, Self::Error>;

    /// `true` if the source font has kerning data.
    fn has_kerning(&self) -> bool;

    /// The kerning between two characters, in 26.6 fixed point pixels.
    fn kerning(&mut self, first: u8, second: u8) -> Result<i32, Self::Error>;
}
