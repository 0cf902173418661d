//! Little-endian scalars

/// A fixed-size value that can be read from little-endian bytes.
///
/// Every multi-byte integer in an MFnt file is stored little-endian.
pub trait Scalar: Sized + Copy {
    /// The number of bytes required to represent this type.
    const RAW_BYTE_LEN: usize;

    /// Attempt to read a scalar from a slice.
    ///
    /// This will always succeed if `slice.len() == Self::RAW_BYTE_LEN`, and will
    /// always return `None` otherwise.
    fn read_le(slice: &[u8]) -> Option<Self>;
}

macro_rules! le_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            const RAW_BYTE_LEN: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn read_le(slice: &[u8]) -> Option<Self> {
                slice.try_into().ok().map(<$ty>::from_le_bytes)
            }
        }
    };
}

le_scalar!(u8);
le_scalar!(i8);
le_scalar!(u16);

/// A little-endian `u16` stored as raw bytes.
///
/// Used for zero-copy views of the pointer table.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct U16Le([u8; 2]);

impl U16Le {
    /// Create a raw value from a native `u16`.
    pub const fn new(value: u16) -> Self {
        U16Le(value.to_le_bytes())
    }

    /// Convert to the native representation.
    #[inline]
    pub const fn get(self) -> u16 {
        u16::from_le_bytes(self.0)
    }
}

impl std::fmt::Debug for U16Le {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.get().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian() {
        assert_eq!(u16::read_le(&[0x0c, 0x02]), Some(0x020c));
        assert_eq!(i8::read_le(&[0xff]), Some(-1));
        assert_eq!(u16::read_le(&[0x0c]), None);
        assert_eq!(U16Le::new(0x1234).get(), 0x1234);
        assert_eq!(bytemuck::bytes_of(&U16Le::new(0x1234)), &[0x34, 0x12]);
    }
}
