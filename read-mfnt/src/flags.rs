//! The header flag byte

/// Flags describing how the glyphs in a file are stored.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FontFlags {
    bits: u8,
}

impl FontFlags {
    /// Glyph bitmaps are compressed command streams rather than packed rows.
    pub const COMPRESSED: Self = Self { bits: 0x01 };
    /// Reserved; set from options but not used when encoding.
    pub const ITALIC: Self = Self { bits: 0x02 };
    /// Reserved; set from options but not used when encoding.
    pub const BOLD: Self = Self { bits: 0x04 };
    /// The file contains a kerning table.
    pub const HAS_KERNING: Self = Self { bits: 0x08 };
}

// most of this impl is taken from the bitflags crate, under the MIT/Apache license
// https://docs.rs/bitflags/latest/bitflags/
impl FontFlags {
    ///  Returns an empty set of flags.
    #[inline]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Returns the set containing all flags.
    #[inline]
    pub const fn all() -> Self {
        Self {
            bits: Self::COMPRESSED.bits | Self::ITALIC.bits | Self::BOLD.bits | Self::HAS_KERNING.bits,
        }
    }

    /// Returns the raw value of the flags currently stored.
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Convert from underlying bit representation, dropping any bits
    /// that do not correspond to flags.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self {
            bits: bits & Self::all().bits,
        }
    }

    /// Returns `true` if all of the flags in `other` are contained within `self`.
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Inserts or removes the specified flags depending on the passed value.
    #[inline]
    pub fn set(&mut self, other: Self, value: bool) {
        if value {
            self.bits |= other.bits;
        } else {
            self.bits &= !other.bits;
        }
    }
}

impl std::ops::BitOr for FontFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, other: FontFlags) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }
}

impl std::fmt::Debug for FontFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members: &[(&str, Self)] = &[
            ("COMPRESSED", Self::COMPRESSED),
            ("ITALIC", Self::ITALIC),
            ("BOLD", Self::BOLD),
            ("HAS_KERNING", Self::HAS_KERNING),
        ];
        let mut first = true;
        for (name, value) in members {
            if self.contains(*value) {
                if !first {
                    f.write_str(" | ")?;
                }
                first = false;
                f.write_str(name)?;
            }
        }
        if first {
            f.write_str("(empty)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_bits_are_dropped() {
        let flags = FontFlags::from_bits_truncate(0xf9);
        assert_eq!(flags, FontFlags::COMPRESSED | FontFlags::HAS_KERNING);
        assert_eq!(format!("{flags:?}"), "COMPRESSED | HAS_KERNING");
        assert_eq!(format!("{:?}", FontFlags::empty()), "(empty)");
    }
}
