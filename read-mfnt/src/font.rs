//! The top-level font container

use font_types::Tag;

use crate::flags::FontFlags;
use crate::font_data::FontData;
use crate::glyph::GlyphRef;
use crate::read::{FontRead, ReadError};
use crate::scalar::U16Le;

/// The tag that begins every MFnt file.
pub const MAGIC: Tag = Tag::new(b"MFnt");
/// The size of the header in bytes.
pub const HEADER_LEN: usize = 12;
/// The number of entries in the pointer table, one per byte value.
pub const POINTER_TABLE_LEN: usize = 256;
/// The pointer table always follows the header.
pub const POINTER_TABLE_OFFSET: u16 = HEADER_LEN as u16;
/// Where the kerning table begins; glyph records follow it.
pub const PAYLOAD_OFFSET: u16 = POINTER_TABLE_OFFSET + 2 * POINTER_TABLE_LEN as u16;
/// The size in bytes of one kerning record.
pub const KERNING_RECORD_LEN: usize = 3;

/// A kerning adjustment between two characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct KerningPair {
    first: u8,
    second: u8,
    offset: i8,
}

impl KerningPair {
    pub const fn new(first: u8, second: u8, offset: i8) -> Self {
        KerningPair {
            first,
            second,
            offset,
        }
    }

    /// The left character of the pair.
    pub fn first(&self) -> u8 {
        self.first
    }

    /// The right character of the pair.
    pub fn second(&self) -> u8 {
        self.second
    }

    /// The adjustment to the pen position, in pixels.
    pub fn offset(&self) -> i8 {
        self.offset
    }
}

/// The fixed-size file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub magic: Tag,
    pub flags: FontFlags,
    pub pointer_table_offset: u16,
    pub num_kerning_pairs: u16,
    pub payload_offset: u16,
}

impl<'a> FontRead<'a> for Header {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let raw: [u8; 4] = data
            .as_bytes()
            .get(..4)
            .and_then(|raw| raw.try_into().ok())
            .ok_or(ReadError::TruncatedHeader { len: data.len() })?;
        let magic = Tag::new(&raw);
        if magic != MAGIC {
            return Err(ReadError::InvalidMagic(magic));
        }
        if data.len() < HEADER_LEN {
            return Err(ReadError::TruncatedHeader { len: data.len() });
        }
        let mut cursor = data.cursor();
        cursor.advance_by(4);
        let flags = FontFlags::from_bits_truncate(cursor.read()?);
        // padding
        cursor.advance_by(1);
        Ok(Header {
            magic,
            flags,
            pointer_table_offset: cursor.read()?,
            num_kerning_pairs: cursor.read()?,
            payload_offset: cursor.read()?,
        })
    }
}

/// A parsed MFnt file.
///
/// Parsing validates the header, the pointer table and the kerning table;
/// glyph records are validated as they are accessed.
#[derive(Clone)]
pub struct FontRef<'a> {
    data: FontData<'a>,
    header: Header,
    pointers: &'a [U16Le],
    kerning: &'a [KerningPair],
}

impl<'a> FontRead<'a> for FontRef<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let header = Header::read(data)?;
        let pointers = data
            .slice(header.pointer_table_offset as usize..)
            .ok_or(ReadError::OutOfBounds)?
            .cursor()
            .read_array(POINTER_TABLE_LEN)?;
        let kerning = if header.flags.contains(FontFlags::HAS_KERNING) {
            data.slice(header.payload_offset as usize..)
                .ok_or(ReadError::OutOfBounds)?
                .cursor()
                .read_array(header.num_kerning_pairs as usize)?
        } else {
            &[]
        };
        Ok(FontRef {
            data,
            header,
            pointers,
            kerning,
        })
    }
}

impl<'a> FontRef<'a> {
    /// Parse a font from raw bytes.
    pub fn new(bytes: &'a [u8]) -> Result<Self, ReadError> {
        Self::read(FontData::new(bytes))
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn flags(&self) -> FontFlags {
        self.header.flags
    }

    pub fn is_compressed(&self) -> bool {
        self.header.flags.contains(FontFlags::COMPRESSED)
    }

    pub fn has_kerning(&self) -> bool {
        self.header.flags.contains(FontFlags::HAS_KERNING)
    }

    /// The raw bytes of the whole file.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    /// The kerning table, ordered by first then second character.
    pub fn kerning_pairs(&self) -> &'a [KerningPair] {
        self.kerning
    }

    /// Look up the kerning adjustment between two characters.
    pub fn kerning(&self, first: u8, second: u8) -> Option<i8> {
        self.kerning
            .binary_search_by_key(&(first, second), |pair| (pair.first, pair.second))
            .ok()
            .map(|ix| self.kerning[ix].offset)
    }

    /// The offset of the first glyph record, immediately after the kerning table.
    pub fn glyph_data_offset(&self) -> usize {
        self.header.payload_offset as usize
            + self.header.num_kerning_pairs as usize * KERNING_RECORD_LEN
    }

    /// The file offset of the glyph record for `codepoint`, if it has one.
    pub fn glyph_offset(&self, codepoint: u8) -> Option<u16> {
        self.pointers
            .get(codepoint as usize)
            .map(|raw| raw.get())
            .filter(|offset| *offset != 0)
    }

    /// The glyph record for `codepoint`.
    ///
    /// Returns `Ok(None)` if the pointer table entry is null.
    pub fn glyph(&self, codepoint: u8) -> Result<Option<GlyphRef<'a>>, ReadError> {
        let Some(offset) = self.glyph_offset(codepoint) else {
            return Ok(None);
        };
        let data = self
            .data
            .split_off(offset as usize)
            .ok_or(ReadError::OutOfBounds)?;
        GlyphRef::read(data, codepoint, self.is_compressed()).map(Some)
    }

    /// Iterate over every glyph with a non-null pointer, in codepoint order.
    pub fn glyphs(&self) -> impl Iterator<Item = Result<GlyphRef<'a>, ReadError>> + '_ {
        (0..=u8::MAX).filter_map(|cp| self.glyph(cp).transpose())
    }

    /// The horizontal distance covered by `text`, in pixels.
    ///
    /// Characters without a glyph record contribute no advance, but still
    /// take part in kerning with their neighbours.
    pub fn measure(&self, text: &[u8]) -> Result<i32, ReadError> {
        let mut pen = 0i32;
        let mut prev = None;
        for &c in text {
            if let Some(prev) = prev.filter(|_| self.has_kerning()) {
                pen += self.kerning(prev, c).unwrap_or_default() as i32;
            }
            prev = Some(c);
            if let Some(glyph) = self.glyph(c)? {
                pen += glyph.metrics().advance as i32;
            }
        }
        Ok(pen)
    }
}
