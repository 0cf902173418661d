use std::{borrow::Borrow, path::Path, sync::Arc};

use freetype::{face::KerningMode, face::LoadFlag, Face, Library};
use read_mfnt::Bitmap;
use write_mfnt::{Glyph, Rasterizer};

#[derive(Clone)]
pub struct SharedFontData(Arc<memmap2::Mmap>);

impl AsRef<[u8]> for SharedFontData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for SharedFontData {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

/// Renders monochrome glyphs with FreeType.
pub struct FreeTypeRasterizer {
    face: Face<SharedFontData>,
    _library: Library,
}

impl FreeTypeRasterizer {
    pub fn new(path: &Path, face_index: usize, pixel_size: u32) -> Result<Self, crate::BakeError> {
        let file = std::fs::File::open(path)?;
        let data = SharedFontData(unsafe { Arc::new(memmap2::Mmap::map(&file)?) });
        let library = Library::init()?;
        let face = library.new_memory_face2(data, face_index as isize)?;
        face.set_pixel_sizes(0, pixel_size)?;
        log::debug!(
            "loaded {:?} at {pixel_size}px",
            face.family_name().unwrap_or_default()
        );
        Ok(Self {
            face,
            _library: library,
        })
    }
}

/// Both glyph indices, unless either character is missing from the face.
fn glyph_pair(left: u32, right: u32) -> Option<(u32, u32)> {
    (left != 0 && right != 0).then_some((left, right))
}

/// Convert 26.6 fixed point to whole pixels, truncating.
fn to_pixels(value: freetype::ffi::FT_Pos) -> i64 {
    value as i64 / 64
}

impl Rasterizer for FreeTypeRasterizer {
    type Error = freetype::Error;

    fn rasterize(&mut self, codepoint: u8) -> Result<Glyph, Self::Error> {
        self.face
            .load_char(codepoint as usize, LoadFlag::RENDER | LoadFlag::TARGET_MONO)?;
        let slot = self.face.glyph();
        let metrics = slot.metrics();
        let source = slot.bitmap();
        let pitch = source.pitch().unsigned_abs() as usize;
        let width = source.width().max(0) as usize;
        let height = source.rows().max(0) as usize;

        // mono bitmaps are packed with the leftmost pixel in the high bit
        let mut bitmap = if pitch == 0 || height == 0 {
            Bitmap::default()
        } else {
            Bitmap::new(width, height)
        };
        if !bitmap.is_empty() {
            for (y, row) in source.buffer().chunks(pitch).take(height).enumerate() {
                for x in 0..width {
                    let set = row.get(x / 8).is_some_and(|byte| byte & (0x80 >> (x % 8)) != 0);
                    bitmap.set(x, y, set);
                }
            }
        }
        Ok(Glyph {
            codepoint,
            advance: to_pixels(metrics.horiAdvance).clamp(0, u8::MAX as i64) as u8,
            bearing_x: to_pixels(metrics.horiBearingX).clamp(i8::MIN as i64, i8::MAX as i64) as i8,
            bearing_y: to_pixels(metrics.horiBearingY).clamp(i8::MIN as i64, i8::MAX as i64) as i8,
            bitmap,
        })
    }

    fn has_kerning(&self) -> bool {
        self.face.has_kerning()
    }

    fn kerning(&mut self, first: u8, second: u8) -> Result<i32, Self::Error> {
        let Some((left, right)) = glyph_pair(
            self.face.get_char_index(first as usize),
            self.face.get_char_index(second as usize),
        ) else {
            return Ok(0);
        };
        let delta = self
            .face
            .get_kerning(left, right, KerningMode::KerningDefault)?;
        Ok(delta.x as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_glyphs_do_not_kern() {
        assert_eq!(glyph_pair(3, 7), Some((3, 7)));
        assert_eq!(glyph_pair(0, 7), None);
        assert_eq!(glyph_pair(3, 0), None);
    }

    #[test]
    fn truncates_to_whole_pixels() {
        assert_eq!(to_pixels(127), 1);
        assert_eq!(to_pixels(-127), -1);
        assert_eq!(to_pixels(64 * 9), 9);
    }
}
