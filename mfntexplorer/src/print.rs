//! report printing implementation

use ansi_term::{Color, Style};
use read_mfnt::{Bitmap, Command, FontRef, GlyphRef, ReadError};

/// What to include in the report.
#[derive(Clone, Copy, Debug)]
pub struct PrintOptions {
    /// Only print the glyph for this codepoint.
    pub glyph: Option<u8>,
    pub trace: bool,
    pub bitmap: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            glyph: None,
            trace: true,
            bitmap: true,
        }
    }
}

/// An error that stops the report.
#[derive(Debug)]
pub enum PrintError {
    Io(std::io::Error),
    Read(ReadError),
}

impl From<std::io::Error> for PrintError {
    fn from(value: std::io::Error) -> Self {
        PrintError::Io(value)
    }
}

impl From<ReadError> for PrintError {
    fn from(value: ReadError) -> Self {
        PrintError::Read(value)
    }
}

impl std::fmt::Display for PrintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintError::Io(err) => write!(f, "failed to write report: {err}"),
            PrintError::Read(err) => err.fmt(f),
        }
    }
}

pub struct ReportPrinter<'a> {
    is_tty: bool,
    options: PrintOptions,
    writer: &'a mut (dyn std::io::Write + 'a),
}

/// A printable form of a codepoint.
fn display_char(codepoint: u8) -> char {
    if codepoint.is_ascii_graphic() || codepoint == b' ' {
        codepoint as char
    } else {
        '?'
    }
}

impl<'a> ReportPrinter<'a> {
    pub fn new(writer: &'a mut (dyn std::io::Write + 'a), options: PrintOptions) -> Self {
        ReportPrinter {
            is_tty: atty::is(atty::Stream::Stdout),
            options,
            writer,
        }
    }

    pub fn print_font(&mut self, font: &FontRef) -> Result<(), PrintError> {
        self.print_header(font)?;
        if font.has_kerning() && self.options.glyph.is_none() {
            self.print_kerning(font)?;
        }
        let mode = if font.is_compressed() { "" } else { "un" };
        writeln!(self.writer, "Start {mode}compressed font data")?;
        writeln!(self.writer)?;
        for glyph in font.glyphs() {
            let glyph = glyph?;
            if self
                .options
                .glyph
                .is_some_and(|codepoint| codepoint != glyph.codepoint())
            {
                continue;
            }
            self.print_glyph(&glyph)?;
        }
        Ok(())
    }

    fn print_header(&mut self, font: &FontRef) -> std::io::Result<()> {
        let mode = if font.is_compressed() { "" } else { "un" };
        let kerning = if font.has_kerning() { "with" } else { "without" };
        let line = format!("Got MFnt, {mode}compressed, {kerning} kerning");
        self.print_with_style(Style::default().bold(), |this| writeln!(this.writer, "{line}"))?;
        writeln!(self.writer, "Flags: {:?}", font.flags())?;
        writeln!(self.writer)
    }

    fn print_kerning(&mut self, font: &FontRef) -> std::io::Result<()> {
        let pairs = font.kerning_pairs();
        writeln!(
            self.writer,
            "Start kerning table with {} entries; at offset {:02x}",
            pairs.len(),
            font.header().payload_offset
        )?;
        writeln!(self.writer, "First   Last     Offset")?;
        writeln!(self.writer)?;
        for pair in pairs {
            writeln!(
                self.writer,
                "{:02x} ({})  {:02x} ({})  {}",
                pair.first(),
                display_char(pair.first()),
                pair.second(),
                display_char(pair.second()),
                pair.offset()
            )?;
        }
        writeln!(self.writer)
    }

    fn print_glyph(&mut self, glyph: &GlyphRef) -> Result<(), PrintError> {
        let codepoint = glyph.codepoint();
        let line = format!(
            "Entry {codepoint} ({}), @{:04X}",
            display_char(codepoint),
            glyph.offset()
        );
        self.print_with_style(Color::Cyan.into(), |this| writeln!(this.writer, "{line}"))?;
        let metrics = glyph.metrics();
        let packing = if glyph.is_compressed() {
            "wordlen"
        } else {
            "stride"
        };
        writeln!(
            self.writer,
            " Glyph : {}x{} {packing} = {}",
            metrics.width, metrics.height, metrics.packing
        )?;
        writeln!(
            self.writer,
            " Metrics : advance = {}, bearing = [{}, {}]",
            metrics.advance, metrics.bearing_x, metrics.bearing_y
        )?;
        if metrics.is_empty() {
            writeln!(self.writer, " No bitmap")?;
            return Ok(());
        }
        match glyph.decode() {
            Ok(decoded) => {
                if glyph.is_compressed() && self.options.trace {
                    self.print_trace(&decoded.trace)?;
                }
                if self.options.bitmap {
                    self.print_bitmap(&decoded.bitmap)?;
                }
                Ok(())
            }
            Err(ReadError::MalformedStream(err)) => {
                self.print_trace(&err.trace)?;
                let line = format!(" Error : {err}");
                self.print_with_style(Color::Red.into(), |this| writeln!(this.writer, "{line}"))?;
                Err(ReadError::MalformedStream(err).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn print_trace(&mut self, trace: &[Command]) -> std::io::Result<()> {
        writeln!(self.writer, " Disasm :")?;
        for command in trace {
            writeln!(self.writer, "  {command}")?;
        }
        Ok(())
    }

    fn print_bitmap(&mut self, bitmap: &Bitmap) -> std::io::Result<()> {
        writeln!(self.writer, " Bitmap :")?;
        for line in bitmap.to_string().lines() {
            writeln!(self.writer, "  {line}")?;
        }
        Ok(())
    }

    fn print_with_style(
        &mut self,
        style: Style,
        f: impl FnOnce(&mut ReportPrinter) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        if !self.is_tty {
            f(self)
        } else {
            write!(self.writer, "{}", style.prefix())?;
            f(self)?;
            write!(self.writer, "{}", style.suffix())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report(bytes: &[u8], options: PrintOptions) -> (String, Result<(), PrintError>) {
        let font = FontRef::new(bytes).unwrap();
        let mut out = Vec::new();
        let mut printer = ReportPrinter::new(&mut out, options);
        printer.is_tty = false;
        let result = printer.print_font(&font);
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn uncompressed() {
        let (text, result) = report(&mfnt_test_data::uncompressed_font(), Default::default());
        assert!(result.is_ok());
        assert_eq!(
            text,
            "\
Got MFnt, uncompressed, with kerning
Flags: HAS_KERNING

Start kerning table with 2 entries; at offset 20c
First   Last     Offset

41 (A)  56 (V)  -1
56 (V)  41 (A)  -2

Start uncompressed font data

Entry 65 (A), @0212
 Glyph : 3x3 stride = 1
 Metrics : advance = 4, bearing = [0, 3]
 Bitmap :
  .#.
  #.#
  ###
Entry 86 (V), @021B
 Glyph : 3x3 stride = 1
 Metrics : advance = 4, bearing = [0, 3]
 Bitmap :
  #.#
  #.#
  .#.
"
        );
    }

    #[test]
    fn compressed_trace() {
        let (text, result) = report(&mfnt_test_data::compressed_font(), Default::default());
        assert!(result.is_ok());
        assert_eq!(
            text,
            "\
Got MFnt, compressed, without kerning
Flags: COMPRESSED

Start compressed font data

Entry 61 (=), @020C
 Glyph : 8x2 wordlen = 8
 Metrics : advance = 9, bearing = [0, 2]
 Disasm :
  (10) COPY_ROW [10101010]
  (001) REPEAT_ROW
 Bitmap :
  #.#.#.#.
  #.#.#.#.
"
        );
    }

    #[test]
    fn filters() {
        let options = PrintOptions {
            glyph: Some(b'V'),
            trace: true,
            bitmap: false,
        };
        let (text, _) = report(&mfnt_test_data::uncompressed_font(), options);
        assert!(!text.contains("kerning table"));
        assert!(!text.contains("Entry 65"));
        assert!(text.contains("Entry 86"));
        assert!(!text.contains("Bitmap"));

        let options = PrintOptions {
            trace: false,
            ..Default::default()
        };
        let (text, _) = report(&mfnt_test_data::compressed_font(), options);
        assert!(!text.contains("Disasm"));
        assert!(text.contains("  #.#.#.#."));
    }

    #[test]
    fn malformed_stream_prints_partial_trace() {
        let (text, result) = report(&mfnt_test_data::truncated_stream_font(), Default::default());
        assert!(matches!(
            result,
            Err(PrintError::Read(ReadError::MalformedStream(_)))
        ));
        assert!(text.contains("  (10) COPY_ROW [1111]\n Error : Malformed bitstream"));
    }
}
