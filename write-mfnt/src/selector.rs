//! Choosing the word length for a compressed glyph

use read_mfnt::Bitmap;

use crate::codec::{encode_raw, encode_word_mode, EncodedBitmap};

/// The smallest encoding found for a bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compressed {
    pub encoded: EncodedBitmap,
    /// The word length to store in the glyph metrics; `1` for RAW streams.
    pub word_len: usize,
    /// The width to store in the glyph metrics.
    ///
    /// This is one more than the width of the source bitmap if a padded
    /// candidate won.
    pub width: usize,
}

impl Compressed {
    pub fn byte_len(&self) -> usize {
        self.encoded.byte_len()
    }

    /// `true` if the stream is literal pixels behind a RAW command.
    pub fn is_raw(&self) -> bool {
        self.encoded.commands.first() == Some(&read_mfnt::Command::Raw)
    }
}

/// A single set of parameters to try.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Candidate {
    Raw,
    Words { word_len: usize, padded: bool },
}

fn divisors(n: usize) -> impl Iterator<Item = usize> {
    (1..=n).filter(move |len| n % len == 0)
}

/// Every candidate, in the order they are tried.
fn candidates(width: usize, allow_padding: bool) -> impl Iterator<Item = Candidate> {
    let padded = (allow_padding && width % 2 == 1)
        .then(|| divisors(width + 1))
        .into_iter()
        .flatten()
        .map(|word_len| Candidate::Words {
            word_len,
            padded: true,
        });
    std::iter::once(Candidate::Raw)
        .chain(divisors(width).map(|word_len| Candidate::Words {
            word_len,
            padded: false,
        }))
        .chain(padded)
}

/// Find the smallest encoding of `bitmap`.
///
/// Tries a RAW stream, then every word length that divides the width and,
/// for odd widths, every word length that divides the width plus one with
/// the bitmap padded by a blank column. Ties go to the earliest candidate.
pub fn compress(bitmap: &Bitmap) -> Compressed {
    compress_with(bitmap, true)
}

/// Like [`compress`], optionally skipping the padded candidates.
pub fn compress_with(bitmap: &Bitmap, allow_padding: bool) -> Compressed {
    let padded_bitmap = (allow_padding && bitmap.width() % 2 == 1).then(|| bitmap.padded(1));
    candidates(bitmap.width(), allow_padding)
        .map(|candidate| match candidate {
            Candidate::Raw => Compressed {
                encoded: encode_raw(bitmap),
                word_len: 1,
                width: bitmap.width(),
            },
            Candidate::Words { word_len, padded } => {
                let source = match (&padded_bitmap, padded) {
                    (Some(padded), true) => padded,
                    _ => bitmap,
                };
                Compressed {
                    encoded: encode_word_mode(source, word_len),
                    word_len,
                    width: source.width(),
                }
            }
        })
        .min_by_key(Compressed::byte_len)
        .unwrap_or_else(|| Compressed {
            encoded: encode_raw(bitmap),
            word_len: 1,
            width: bitmap.width(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use read_mfnt::{decode_word_mode, Command};

    #[test]
    fn candidate_order() {
        let found: Vec<_> = candidates(3, true).collect();
        assert_eq!(
            found,
            [
                Candidate::Raw,
                Candidate::Words {
                    word_len: 1,
                    padded: false
                },
                Candidate::Words {
                    word_len: 3,
                    padded: false
                },
                Candidate::Words {
                    word_len: 1,
                    padded: true
                },
                Candidate::Words {
                    word_len: 2,
                    padded: true
                },
                Candidate::Words {
                    word_len: 4,
                    padded: true
                },
            ]
        );
        assert_eq!(candidates(4, true).count(), 4);
        assert_eq!(candidates(3, false).count(), 3);
    }

    #[test]
    fn blank_bitmap_is_tiny() {
        for (width, height) in [(3, 3), (8, 12), (13, 20), (32, 32)] {
            let compressed = compress(&Bitmap::new(width, height));
            let bound = (2 + 2 * height).div_ceil(8);
            assert!(compressed.byte_len() <= bound, "{width}x{height}");
            assert!(compressed.byte_len() < width.div_ceil(8) * height);
        }
    }

    #[test]
    fn tiny_bitmap_prefers_raw() {
        let bitmap = Bitmap::from_rows([[true, false], [false, true]]).unwrap();
        let compressed = compress(&bitmap);
        assert!(compressed.is_raw());
        assert_eq!(compressed.word_len, 1);
        assert_eq!(compressed.byte_len(), 1);
    }

    #[test]
    fn repeated_rows_use_words() {
        let row = [true, false, true, false, true, false, true, false];
        let bitmap = Bitmap::from_rows([row; 6]).unwrap();
        let compressed = compress(&bitmap);
        assert!(!compressed.is_raw());
        // COPY_ROW then five REPEAT_ROWs
        assert_eq!(compressed.encoded.bit_len, 10 + 5 * 3);
        assert_eq!(compressed.encoded.commands[1], Command::RepeatRow);
        assert_eq!(compressed.width, 8);
    }

    #[test]
    fn never_larger_than_raw() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let width = rng.gen_range(1..=32);
            let height = rng.gen_range(1..=32);
            let mut bitmap = Bitmap::new(width, height);
            for y in 0..height {
                for x in 0..width {
                    bitmap.set(x, y, rng.gen_bool(0.5));
                }
            }
            let compressed = compress(&bitmap);
            assert!(compressed.byte_len() <= (2 + width * height).div_ceil(8));
            let decoded = decode_word_mode(
                &compressed.encoded.data,
                compressed.width,
                height,
                compressed.word_len,
            )
            .unwrap();
            assert_eq!(decoded.bitmap.rows().len(), height);
            for (y, row) in decoded.bitmap.rows().enumerate() {
                assert_eq!(&row[..width], bitmap.row(y));
                assert!(row[width..].iter().all(|bit| !bit));
            }
        }
    }

    #[test]
    fn empty() {
        let compressed = compress(&Bitmap::new(0, 0));
        assert_eq!(compressed.byte_len(), 0);
        assert_eq!(compressed.word_len, 1);
    }
}
