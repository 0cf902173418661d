//! test data shared between the mfnt crates.

#[macro_use]
pub mod lebuffer;

use lebuffer::LeBuffer;

/// Offset of the pointer table entry for `codepoint`.
const fn pointer_entry(codepoint: u8) -> usize {
    12 + 2 * codepoint as usize
}

/// Hand-assembled compressed bitmap streams.
pub mod streams {
    /// 8x2, word length 8, both rows `#.#.#.#.`
    #[rustfmt::skip]
    pub static ALTERNATING_8X2: &[u8] = &[
        0b1010_1010, // COPY_ROW, first 6 bits of the row
        0b1000_1000, // last 2 bits of the row, REPEAT_ROW, padding
    ];

    /// 4x3, word length 2:
    ///
    /// ```text
    /// ##..
    /// ##.#
    /// ...#
    /// ```
    #[rustfmt::skip]
    pub static WORDS_4X3: &[u8] = &[
        0b0111_1100, // COPY_WORD 11, ZERO_WORD, REPEAT_WORD (first bit)
        0b0010_1110, // REPEAT_WORD, COPY_WORD 01, ZERO_WORD
        0b0000_0000, // REPEAT_WORD, padding
    ];
}

/// An uncompressed font with two glyphs and two kerning pairs.
///
/// ```text
/// 'A'  .#.   'V'  #.#
///      #.#        #.#
///      ###        .#.
/// ```
///
/// Both glyphs advance by 4; `AV` kerns by -1 and `VA` by -2.
pub fn uncompressed_font() -> LeBuffer {
    let buf = le_buffer! {
        b'M', b'F', b'n', b't',
        0x08u8,     // flags: has kerning
        0u8,        // padding
        0x000Cu16,  // pointer table origin
        2u16,       // kerning pairs
        0x020Cu16,  // payload origin
    }
    .extend([0u16; 256])
    // kerning
    .extend([b'A', b'V'])
    .push(-1i8)
    .extend([b'V', b'A'])
    .push(-2i8)
    // 'A': width, height, stride, advance, bearing x, bearing y
    .push_with_tag(3u8, "A")
    .extend([3u8, 1, 4, 0, 3])
    .extend([0b010u8, 0b101, 0b111])
    // 'V'
    .push_with_tag(3u8, "V")
    .extend([3u8, 1, 4, 0, 3])
    .extend([0b101u8, 0b101, 0b010]);
    let a = buf.offset_for("A") as u16;
    let v = buf.offset_for("V") as u16;
    buf.write_u16_at(pointer_entry(b'A'), a)
        .write_u16_at(pointer_entry(b'V'), v)
}

/// A compressed font with a single glyph for `=`, without kerning.
///
/// The glyph is 8x2 with word length 8 and uses [`streams::ALTERNATING_8X2`].
pub fn compressed_font() -> LeBuffer {
    let buf = le_buffer! {
        b'M', b'F', b'n', b't',
        0x01u8,     // flags: compressed
        0u8,        // padding
        0x000Cu16,  // pointer table origin
        0u16,       // kerning pairs
        0x020Cu16,  // payload origin
    }
    .extend([0u16; 256])
    .push_with_tag(8u8, "=")
    .extend([2u8, 8, 9, 0, 2])
    .extend(streams::ALTERNATING_8X2.iter().copied());
    let eq = buf.offset_for("=") as u16;
    buf.write_u16_at(pointer_entry(b'='), eq)
}

/// A compressed font whose only glyph has a truncated stream.
pub fn truncated_stream_font() -> LeBuffer {
    let buf = le_buffer! {
        b'M', b'F', b'n', b't',
        0x01u8,
        0u8,
        0x000Cu16,
        0u16,
        0x020Cu16,
    }
    .extend([0u16; 256])
    // 4x2, word length 4; COPY_ROW [1111] then nothing
    .push_with_tag(4u8, "x")
    .extend([2u8, 4, 5, 0, 2])
    .push(0b1011_1100u8);
    let x = buf.offset_for("x") as u16;
    buf.write_u16_at(pointer_entry(b'x'), x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_layout() {
        let font = uncompressed_font();
        assert_eq!(font.len(), 548);
        assert_eq!(font.offset_for("A"), 530);
        assert_eq!(font.offset_for("V"), 539);
        assert_eq!(&font[pointer_entry(b'A')..][..2], &[0x12, 0x02]);
        assert_eq!(compressed_font().offset_for("="), 524);
    }
}
