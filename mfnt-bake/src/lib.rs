//! Convert outline fonts into MFnt bitmap fonts.
//!
//! The conversion is driven by a [`Rasterizer`], which renders each
//! supported character. Glyphs are rendered in codepoint order, packed in
//! parallel and then assembled into a single file.
//!
//! With the `freetype` feature enabled, [`bake_file`] renders a font file
//! with FreeType.

#[cfg(feature = "freetype")]
mod freetype;

use rayon::prelude::*;
use thiserror::Error;

use read_mfnt::charset;
use write_mfnt::{build_kerning, FontBuilder, FontOptions, Glyph, PackedGlyph, Rasterizer};

#[cfg(feature = "freetype")]
pub use freetype::FreeTypeRasterizer;

/// Options for a conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BakeOptions {
    /// The height of the em square, in pixels.
    pub pixel_size: u32,
    /// The face to use from a font collection.
    pub face_index: usize,
    pub font: FontOptions,
}

impl Default for BakeOptions {
    fn default() -> Self {
        BakeOptions {
            pixel_size: 16,
            face_index: 0,
            font: FontOptions::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BakeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Write(#[from] write_mfnt::Error),

    #[error("Invalid pixel size {0}")]
    InvalidPixelSize(u32),

    #[error("Rasterizer error: {0}")]
    Rasterizer(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "freetype")]
impl From<::freetype::Error> for BakeError {
    fn from(value: ::freetype::Error) -> Self {
        BakeError::Rasterizer(Box::new(value))
    }
}

/// Render every supported character and assemble the font file.
pub fn bake<R>(rasterizer: &mut R, options: &BakeOptions) -> Result<Vec<u8>, BakeError>
where
    R: Rasterizer,
    BakeError: From<R::Error>,
{
    if options.pixel_size == 0 {
        return Err(BakeError::InvalidPixelSize(options.pixel_size));
    }
    let glyphs = charset::sorted()
        .map(|codepoint| rasterizer.rasterize(codepoint))
        .collect::<Result<Vec<Glyph>, _>>()?;

    let compressed = options.font.compressed;
    let packed = glyphs
        .par_iter()
        .map(|glyph| glyph.pack(compressed))
        .collect::<Result<Vec<PackedGlyph>, _>>()?;

    let mut builder = FontBuilder::new(options.font);
    for glyph in packed {
        builder.add_packed(glyph)?;
    }

    if rasterizer.has_kerning() {
        let pairs = build_kerning(|first, second| rasterizer.kerning(first, second))?;
        log::debug!("{} kerning pairs", pairs.len());
        builder.set_has_kerning(true).add_kerning_pairs(pairs);
    }

    let bytes = builder.build()?;
    log::info!(
        "baked {} glyphs at {}px into {} bytes",
        charset::SUPPORTED
            .iter()
            .filter(|cp| builder.contains(**cp))
            .count(),
        options.pixel_size,
        bytes.len()
    );
    Ok(bytes)
}

/// Render the font at `path` with FreeType.
#[cfg(feature = "freetype")]
pub fn bake_file(
    path: impl AsRef<std::path::Path>,
    options: &BakeOptions,
) -> Result<Vec<u8>, BakeError> {
    if options.pixel_size == 0 {
        return Err(BakeError::InvalidPixelSize(options.pixel_size));
    }
    let mut rasterizer =
        FreeTypeRasterizer::new(path.as_ref(), options.face_index, options.pixel_size)?;
    bake(&mut rasterizer, options)
}
