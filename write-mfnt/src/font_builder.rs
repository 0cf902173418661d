//! A builder for MFnt files

use std::collections::{BTreeMap, HashMap};

use read_mfnt::{
    charset, FontFlags, KerningPair, KERNING_RECORD_LEN, MAGIC, PAYLOAD_OFFSET,
    POINTER_TABLE_LEN, POINTER_TABLE_OFFSET,
};

use crate::error::Error;
use crate::glyph::{Glyph, PackedGlyph};
use crate::write::{FontWrite, TableWriter};

/// Options that control how a font is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontOptions {
    /// Store glyphs as compressed command streams.
    pub compressed: bool,
    /// Set the italic flag.
    pub italic: bool,
    /// Set the bold flag.
    pub bold: bool,
    /// Write metrics-only records for glyphs without pixels (such as space),
    /// instead of leaving them out.
    pub keep_empty_glyphs: bool,
}

impl FontOptions {
    fn flags(&self) -> FontFlags {
        let mut flags = FontFlags::empty();
        flags.set(FontFlags::COMPRESSED, self.compressed);
        flags.set(FontFlags::ITALIC, self.italic);
        flags.set(FontFlags::BOLD, self.bold);
        flags
    }
}

/// Build a font from a set of glyphs and kerning pairs.
#[derive(Clone, Debug, Default)]
pub struct FontBuilder {
    options: FontOptions,
    glyphs: HashMap<u8, PackedGlyph>,
    kerning: BTreeMap<(u8, u8), i8>,
    has_kerning: bool,
}

impl FontBuilder {
    /// Create a new builder to compile a binary font
    pub fn new(options: FontOptions) -> Self {
        FontBuilder {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &FontOptions {
        &self.options
    }

    /// Pack and add a glyph, replacing any previous glyph for its codepoint.
    pub fn add_glyph(&mut self, glyph: &Glyph) -> Result<&mut Self, Error> {
        if !self.accepts(glyph.codepoint, glyph.is_empty()) {
            return Ok(self);
        }
        let packed = glyph.pack(self.options.compressed)?;
        self.glyphs.insert(glyph.codepoint, packed);
        Ok(self)
    }

    /// Add a glyph that was packed ahead of time.
    ///
    /// The glyph must use the same packing as the font.
    pub fn add_packed(&mut self, glyph: PackedGlyph) -> Result<&mut Self, Error> {
        if glyph.compressed != self.options.compressed {
            return Err(Error::PackingMismatch {
                codepoint: glyph.codepoint,
                compressed: glyph.compressed,
            });
        }
        if self.accepts(glyph.codepoint, glyph.is_empty()) {
            self.glyphs.insert(glyph.codepoint, glyph);
        }
        Ok(self)
    }

    fn accepts(&self, codepoint: u8, is_empty: bool) -> bool {
        if !charset::is_supported(codepoint) {
            log::warn!("codepoint {codepoint:#04x} is not supported, skipping");
            return false;
        }
        if is_empty && !self.options.keep_empty_glyphs {
            log::debug!("glyph {:?} has no pixels, skipping", codepoint as char);
            return false;
        }
        true
    }

    /// Mark the font as having kerning data, even if every pair is zero.
    pub fn set_has_kerning(&mut self, has_kerning: bool) -> &mut Self {
        self.has_kerning = has_kerning;
        self
    }

    /// Add a kerning adjustment between two characters.
    ///
    /// Zero offsets and pairs of unsupported characters are ignored.
    pub fn add_kerning(&mut self, first: u8, second: u8, offset: i8) -> &mut Self {
        self.has_kerning = true;
        if !(charset::is_supported(first) && charset::is_supported(second)) {
            log::warn!("kerning pair {first:#04x}/{second:#04x} is not supported, skipping");
        } else if offset != 0 {
            self.kerning.insert((first, second), offset);
        }
        self
    }

    /// Add each pair in `pairs`.
    pub fn add_kerning_pairs(&mut self, pairs: impl IntoIterator<Item = KerningPair>) -> &mut Self {
        self.has_kerning = true;
        for pair in pairs {
            self.add_kerning(pair.first(), pair.second(), pair.offset());
        }
        self
    }

    /// Returns `true` if the builder contains a glyph for this codepoint.
    pub fn contains(&self, codepoint: u8) -> bool {
        self.glyphs.contains_key(&codepoint)
    }

    /// Assemble the header, pointer table, kerning table and glyph records.
    pub fn build(&self) -> Result<Vec<u8>, Error> {
        let kerning: Vec<_> = self
            .kerning
            .iter()
            .map(|(&(first, second), &offset)| KerningPair::new(first, second, offset))
            .collect();
        let num_kerning_pairs =
            u16::try_from(kerning.len()).map_err(|_| Error::TooManyKerningPairs(kerning.len()))?;

        // glyph records are written in the order of the supported set
        let glyphs: Vec<_> = charset::SUPPORTED
            .iter()
            .filter_map(|cp| self.glyphs.get(cp))
            .collect();
        let mut pointers = [0u16; POINTER_TABLE_LEN];
        let mut position = PAYLOAD_OFFSET as usize + kerning.len() * KERNING_RECORD_LEN;
        for glyph in &glyphs {
            pointers[glyph.codepoint as usize] =
                u16::try_from(position).map_err(|_| Error::OffsetOverflow {
                    codepoint: glyph.codepoint,
                    offset: position,
                })?;
            position += glyph.len();
        }

        let mut flags = self.options.flags();
        flags.set(FontFlags::HAS_KERNING, self.has_kerning);

        let mut writer = TableWriter::default();
        MAGIC.write_into(&mut writer);
        flags.write_into(&mut writer);
        0u8.write_into(&mut writer);
        POINTER_TABLE_OFFSET.write_into(&mut writer);
        num_kerning_pairs.write_into(&mut writer);
        PAYLOAD_OFFSET.write_into(&mut writer);
        pointers.as_slice().write_into(&mut writer);
        kerning.write_into(&mut writer);
        for glyph in glyphs {
            glyph.write_into(&mut writer);
        }
        debug_assert_eq!(writer.len(), position);
        log::info!(
            "built font with {} glyphs and {} kerning pairs, {} bytes",
            self.glyphs.len(),
            kerning.len(),
            writer.len()
        );
        Ok(writer.into_data())
    }
}
