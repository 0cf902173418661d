//! Traits for interpreting font data

use font_types::Tag;

use crate::codec::MalformedStream;
use crate::font_data::FontData;

/// A type that can be read from raw font data.
///
/// This trait is implemented for all structures that are self-describing: that
/// is, structures that do not require any external state in order to interpret
/// their underlying bytes.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The leading tag is not `MFnt`.
    InvalidMagic(Tag),
    /// Fewer bytes than the fixed-size header.
    TruncatedHeader { len: usize },
    /// A fixed-size structure or payload runs past the end of the data.
    OutOfBounds,
    InvalidArrayLen,
    /// A compressed bitmap could not be decoded.
    MalformedStream(MalformedStream),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::InvalidMagic(tag) => write!(f, "Invalid magic '{tag}'"),
            ReadError::TruncatedHeader { len } => {
                write!(f, "Expected a 12 byte header, found {len} bytes")
            }
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::InvalidArrayLen => {
                write!(f, "Specified array length not a multiple of item size")
            }
            ReadError::MalformedStream(err) => err.fmt(f),
        }
    }
}

impl From<MalformedStream> for ReadError {
    fn from(src: MalformedStream) -> ReadError {
        ReadError::MalformedStream(src)
    }
}

impl std::error::Error for ReadError {}
