//! Errors that occur during writing

/// An error occured while building a font
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A glyph dimension does not fit in the signed metrics byte.
    GlyphTooLarge {
        codepoint: u8,
        width: usize,
        height: usize,
    },
    /// A glyph record starts past the range of a 16-bit offset.
    OffsetOverflow { codepoint: u8, offset: usize },
    /// The kerning table has more entries than a 16-bit count can hold.
    TooManyKerningPairs(usize),
    /// A pre-packed glyph does not match the packing of the font.
    PackingMismatch { codepoint: u8, compressed: bool },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::GlyphTooLarge {
                codepoint,
                width,
                height,
            } => write!(
                f,
                "glyph {codepoint:#04x} is {width}x{height}, larger than {0}x{0}",
                crate::glyph::MAX_DIMENSION
            ),
            Error::OffsetOverflow { codepoint, offset } => write!(
                f,
                "glyph {codepoint:#04x} starts at offset {offset}, past the 16-bit limit"
            ),
            Error::TooManyKerningPairs(count) => {
                write!(f, "{count} kerning pairs, at most {} allowed", u16::MAX)
            }
            Error::PackingMismatch {
                codepoint,
                compressed,
            } => {
                let (found, expected) = if *compressed {
                    ("compressed", "uncompressed")
                } else {
                    ("uncompressed", "compressed")
                };
                write!(
                    f,
                    "glyph {codepoint:#04x} is {found} but the font is {expected}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
