//! Monochrome glyph bitmaps

use crate::read::ReadError;

/// A monochrome pixel matrix, stored row-major.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// Create a bitmap with every pixel unset.
    pub fn new(width: usize, height: usize) -> Self {
        Bitmap {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Create a bitmap from row-major pixels.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<bool>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Bitmap {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap from a sequence of rows.
    ///
    /// Returns `None` if the rows do not all have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: impl IntoIterator<Item = R>) -> Option<Self> {
        let mut width = None;
        let mut height = 0;
        let mut pixels = Vec::new();
        for row in rows {
            let row = row.as_ref();
            if *width.get_or_insert(row.len()) != row.len() {
                return None;
            }
            pixels.extend_from_slice(row);
            height += 1;
        }
        Some(Bitmap {
            width: width.unwrap_or_default(),
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` if the bitmap has no pixels, i.e. a zero width or height.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The row-major pixels.
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Set a pixel, returning `false` if it is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y * self.width + x] = value;
        true
    }

    /// Returns the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= self.height()`.
    pub fn row(&self, y: usize) -> &[bool] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Returns a copy of this bitmap with `columns` unset columns appended to
    /// every row.
    pub fn padded(&self, columns: usize) -> Bitmap {
        let width = self.width + columns;
        let mut pixels = Vec::with_capacity(width * self.height);
        for row in self.rows() {
            pixels.extend_from_slice(row);
            pixels.extend(std::iter::repeat(false).take(columns));
        }
        Bitmap {
            width,
            height: self.height,
            pixels,
        }
    }

    /// Unpack uncompressed rows.
    ///
    /// Each row occupies `stride` bytes. Within a byte the least significant
    /// bit is the leftmost of its eight pixels; bits past `width` are ignored.
    pub fn from_packed_rows(
        data: &[u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Bitmap, ReadError> {
        if stride * 8 < width {
            return Err(ReadError::OutOfBounds);
        }
        let data = data.get(..stride * height).ok_or(ReadError::OutOfBounds)?;
        let mut pixels = Vec::with_capacity(width * height);
        // stride is never zero here unless width is zero too
        for row in data.chunks(stride.max(1)).take(height) {
            pixels.extend((0..width).map(|x| row[x / 8] & (1 << (x % 8)) != 0));
        }
        pixels.resize(width * height, false);
        Ok(Bitmap {
            width,
            height,
            pixels,
        })
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bitmap({}x{})", self.width, self.height)?;
        std::fmt::Display::fmt(self, f)
    }
}

/// Renders the bitmap as ASCII art, `#` for set pixels and `.` otherwise.
impl std::fmt::Display for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for pixel in row {
                f.write_str(if *pixel { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows() {
        let bitmap = Bitmap::from_rows([[true, false, true], [false, true, false]]).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
        assert_eq!(bitmap.get(1, 1), Some(true));
        assert_eq!(bitmap.get(3, 0), None);
        assert_eq!(bitmap.to_string(), "#.#\n.#.");
        assert!(Bitmap::from_rows([vec![true], vec![true, false]]).is_none());
    }

    #[test]
    fn padding_appends_columns() {
        let bitmap = Bitmap::from_rows([[true, true, true]]).unwrap();
        let padded = bitmap.padded(1);
        assert_eq!(padded.width(), 4);
        assert_eq!(padded.row(0), &[true, true, true, false]);
    }

    #[test]
    fn packed_rows_are_lsb_first() {
        // 10 pixels wide, two bytes per row
        let data = [0b0000_0101, 0b10, 0xff, 0b01];
        let bitmap = Bitmap::from_packed_rows(&data, 10, 2, 2).unwrap();
        assert_eq!(bitmap.to_string(), "#.#......#\n#########.");
    }

    #[test]
    fn packed_rows_truncated() {
        assert_eq!(
            Bitmap::from_packed_rows(&[0, 0, 0], 9, 2, 2),
            Err(ReadError::OutOfBounds)
        );
    }
}
