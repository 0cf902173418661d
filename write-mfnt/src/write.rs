use font_types::Tag;
use read_mfnt::{FontFlags, GlyphMetrics, KerningPair};

/// A type that that can be written out as part of a font file.
///
/// All multi-byte integers are written little-endian.
pub trait FontWrite {
    /// Write our data into this [TableWriter].
    fn write_into(&self, writer: &mut TableWriter);
}

/// Accumulates the bytes of a font file.
#[derive(Debug, Default)]
pub struct TableWriter {
    bytes: Vec<u8>,
}

/// Serialize an object on its own.
pub fn dump_table<T: FontWrite + ?Sized>(table: &T) -> Vec<u8> {
    let mut writer = TableWriter::default();
    table.write_into(&mut writer);
    writer.into_data()
}

impl TableWriter {
    /// Write raw bytes.
    ///
    /// The caller is responsible for ensuring bytes are in little-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

macro_rules! write_le_bytes {
    ($ty:ty) => {
        impl FontWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut TableWriter) {
                writer.write_slice(&self.to_le_bytes())
            }
        }
    };
}

write_le_bytes!(u8);
write_le_bytes!(i8);
write_le_bytes!(u16);

// tags are byte strings, so they are written in file order
impl FontWrite for Tag {
    fn write_into(&self, writer: &mut TableWriter) {
        writer.write_slice(&self.to_be_bytes())
    }
}

impl FontWrite for FontFlags {
    fn write_into(&self, writer: &mut TableWriter) {
        self.bits().write_into(writer)
    }
}

impl FontWrite for GlyphMetrics {
    fn write_into(&self, writer: &mut TableWriter) {
        writer.write_slice(&self.to_bytes())
    }
}

impl FontWrite for KerningPair {
    fn write_into(&self, writer: &mut TableWriter) {
        self.first().write_into(writer);
        self.second().write_into(writer);
        self.offset().write_into(writer);
    }
}

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut TableWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}
