//! Building the kerning table

use read_mfnt::{charset, KerningPair};

/// Convert a 26.6 fixed point distance to whole pixels.
///
/// Rounds half away from zero and saturates at the bounds of `i8`.
pub fn kerning_to_pixels(value: i32) -> i8 {
    let pixels = (value as f64 / 64.0).round();
    if pixels > i8::MAX as f64 || pixels < i8::MIN as f64 {
        log::warn!("kerning of {pixels} pixels clamped to fit in a byte");
    }
    pixels.clamp(i8::MIN as f64, i8::MAX as f64) as i8
}

/// Compute the kerning table for every ordered pair of supported characters.
///
/// `kern` returns the kerning between two characters in 26.6 fixed point.
/// Pairs that round to zero pixels are skipped; the result is sorted by the
/// first character and then the second.
pub fn build_kerning<E>(
    mut kern: impl FnMut(u8, u8) -> Result<i32, E>,
) -> Result<Vec<KerningPair>, E> {
    let mut pairs = Vec::new();
    for first in charset::sorted() {
        for second in charset::sorted() {
            let offset = kerning_to_pixels(kern(first, second)?);
            if offset != 0 {
                pairs.push(KerningPair::new(first, second, offset));
            }
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rounding() {
        assert_eq!(kerning_to_pixels(0), 0);
        assert_eq!(kerning_to_pixels(31), 0);
        assert_eq!(kerning_to_pixels(32), 1);
        assert_eq!(kerning_to_pixels(-32), -1);
        assert_eq!(kerning_to_pixels(-31), 0);
        assert_eq!(kerning_to_pixels(-96), -2);
        assert_eq!(kerning_to_pixels(64 * 300), 127);
        assert_eq!(kerning_to_pixels(-64 * 300), -128);
    }

    #[test]
    fn ordered_and_nonzero() {
        let _ = env_logger::builder().is_test(true).try_init();
        let pairs = build_kerning(|a, b| -> Result<_, ()> {
            Ok(match (a, b) {
                (b'V', b'A') => -128,
                (b'A', b'V') => -64,
                (b'T', b'o') => -20,
                (b'~', b' ') => 100,
                _ => 0,
            })
        })
        .unwrap();
        assert_eq!(
            pairs,
            [
                KerningPair::new(b'A', b'V', -1),
                KerningPair::new(b'V', b'A', -2),
                KerningPair::new(b'~', b' ', 2),
            ]
        );
        assert!(pairs.windows(2).all(|w| w[0].first() <= w[1].first()));
        assert!(pairs.iter().all(|pair| pair.offset() != 0));
    }

    #[test]
    fn errors_propagate() {
        let result = build_kerning(|a, _| if a == b'x' { Err("no face") } else { Ok(0) });
        assert_eq!(result, Err("no face"));
    }
}
