//! raw font bytes

use std::ops::{Bound, Range, RangeBounds};

use crate::read::ReadError;
use crate::scalar::Scalar;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    total_pos: u32,
    bytes: &'a [u8],
}

/// A cursor for reading sequential fields during parsing.
pub(crate) struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData {
            total_pos: 0,
            bytes,
        }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The position of this data within the file it was split from.
    pub fn position_in_file(&self) -> usize {
        self.total_pos as usize
    }

    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData {
            bytes,
            total_pos: self.total_pos.saturating_add(pos as u32),
        })
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(i) => *i,
            Bound::Excluded(i) => i.saturating_add(1),
        };

        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        let total_pos = self.total_pos.saturating_add(start as u32);
        self.bytes
            .get(bounds)
            .map(|bytes| FontData { bytes, total_pos })
    }

    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        self.bytes
            .get(offset..offset + T::RAW_BYTE_LEN)
            .and_then(T::read_le)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Interpret the bytes in `range` as a slice of `T`.
    ///
    /// `T` is any plain-old-data record with an alignment of 1, so the cast
    /// can only fail if the range is out of bounds or not a multiple of the
    /// record size.
    pub fn read_array<T: bytemuck::Pod>(&self, range: Range<usize>) -> Result<&'a [T], ReadError> {
        let bytes = self.bytes.get(range).ok_or(ReadError::OutOfBounds)?;
        bytemuck::try_cast_slice(bytes).map_err(|_| ReadError::InvalidArrayLen)
    }

    pub(crate) fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    pub(crate) fn advance_by(&mut self, n_bytes: usize) {
        self.pos += n_bytes;
    }

    pub(crate) fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos += T::RAW_BYTE_LEN;
        temp
    }

    pub(crate) fn read_array<T: bytemuck::Pod>(&mut self, len: usize) -> Result<&'a [T], ReadError> {
        let len = len * std::mem::size_of::<T>();
        let temp = self.data.read_array(self.pos..self.pos + len);
        self.pos += len;
        temp
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_track_file_position() {
        let bytes = [0u8, 1, 2, 3, 4, 5];
        let data = FontData::new(&bytes);
        let tail = data.split_off(2).unwrap();
        assert_eq!(tail.position_in_file(), 2);
        let mid = tail.slice(1..3).unwrap();
        assert_eq!(mid.position_in_file(), 3);
        assert_eq!(mid.as_bytes(), &[3, 4]);
        assert!(data.slice(4..8).is_none());
    }

    #[test]
    fn cursor_reads_in_order() {
        let bytes = [0x0c, 0x02, 0xfe, 0x07];
        let data = FontData::new(&bytes);
        let mut cursor = data.cursor();
        assert_eq!(cursor.read::<u16>().unwrap(), 0x020c);
        assert_eq!(cursor.read::<i8>().unwrap(), -2);
        assert_eq!(cursor.pos, 3);
        assert!(matches!(cursor.read::<u16>(), Err(ReadError::OutOfBounds)));
    }
}
