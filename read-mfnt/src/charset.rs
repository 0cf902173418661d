//! The characters an MFnt file can contain.
//!
//! Glyphs exist for the ASCII letters, digits, punctuation and space; every
//! other byte value has a null pointer table entry.

/// The supported characters, in the order their glyph records are written.
pub const SUPPORTED: &[u8; 95] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ ";

/// Returns `true` if `codepoint` belongs to the supported set.
pub const fn is_supported(codepoint: u8) -> bool {
    // letters, digits, punctuation and space are exactly printable ascii
    matches!(codepoint, 0x20..=0x7e)
}

/// The supported characters in ascending codepoint order.
pub fn sorted() -> impl DoubleEndedIterator<Item = u8> + Clone {
    0x20u8..=0x7e
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_agree() {
        let mut from_list = SUPPORTED.to_vec();
        from_list.sort_unstable();
        from_list.dedup();
        assert_eq!(from_list, sorted().collect::<Vec<_>>());
        assert!(SUPPORTED.iter().all(|cp| is_supported(*cp)));
        assert!(!is_supported(0x7f));
        assert!(!is_supported(b'\n'));
    }
}
