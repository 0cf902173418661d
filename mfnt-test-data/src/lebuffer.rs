//! small utilities for assembling test fonts

use std::collections::HashMap;

/// A value that can be written as little-endian bytes.
pub trait LeScalar: Copy {
    fn write_le(self, out: &mut Vec<u8>);
}

macro_rules! le_scalar {
    ($($ty:ty),*) => {
        $(
            impl LeScalar for $ty {
                fn write_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes())
                }
            }
        )*
    };
}

le_scalar!(u8, i8, u16, i16, u32);

/// A convenience type for generating a buffer of little-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct LeBuffer {
    data: Vec<u8>,
    tagged_offsets: HashMap<String, usize>,
}

impl LeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn offset(&self) -> usize {
        self.data.len()
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl LeScalar) -> Self {
        item.write_le(&mut self.data);
        self
    }

    /// Write a scalar, and remember the offset it was written at.
    pub fn push_with_tag(mut self, item: impl LeScalar, tag: &str) -> Self {
        self.tagged_offsets.insert(tag.to_string(), self.data.len());
        item.write_le(&mut self.data);
        self
    }

    /// Write multiple scalars into the buffer.
    pub fn extend<T: LeScalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            item.write_le(&mut self.data);
        }
        self
    }

    /// The offset of a value previously written with [`push_with_tag`].
    ///
    /// [`push_with_tag`]: LeBuffer::push_with_tag
    pub fn offset_for(&self, tag: &str) -> usize {
        // panic on unknown tags: this is only used by tests
        self.tagged_offsets[tag]
    }

    /// Overwrite a little-endian `u16` at `offset`.
    pub fn write_u16_at(mut self, offset: usize, value: u16) -> Self {
        self.data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
        self
    }
}

impl std::ops::Deref for LeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<LeBuffer> for Vec<u8> {
    fn from(value: LeBuffer) -> Self {
        value.data
    }
}

/// Build an [`LeBuffer`] from a comma separated list of scalars.
#[macro_export]
macro_rules! le_buffer {
    ( $( $x:expr ),* $(,)? ) => {
        $crate::lebuffer::LeBuffer::new()
        $(
            .push($x)
        )*
    };
}
