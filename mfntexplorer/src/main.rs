//! Print the contents of an MFnt file.
//!
//! This prints the header, the kerning table, and each glyph's metrics,
//! decoded command trace and bitmap.

use read_mfnt::FontRef;

mod print;

use print::{PrintOptions, ReportPrinter};

fn main() -> Result<(), Error> {
    let args = flags::Args::from_env().map_err(Error::new)?;
    let bytes = std::fs::read(&args.input)
        .map_err(|e| Error(format!("failed to read {}: {e}", args.input.display())))?;
    let font = FontRef::new(&bytes).map_err(Error::new)?;
    let options = PrintOptions::from_args(&args)?;

    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    let mut printer = ReportPrinter::new(&mut locked, options);
    printer.print_font(&font).map_err(Error::new)
}

impl PrintOptions {
    fn from_args(args: &flags::Args) -> Result<Self, Error> {
        let glyph = args.glyph.as_deref().map(parse_glyph).transpose()?;
        Ok(PrintOptions {
            glyph,
            trace: !args.no_trace,
            bitmap: !args.no_bitmap,
        })
    }
}

/// A single ascii character, or a codepoint written as `0x41`.
fn parse_glyph(raw: &str) -> Result<u8, Error> {
    if let Some(hex) = raw.strip_prefix("0x") {
        return u8::from_str_radix(hex, 16)
            .map_err(|e| Error(format!("Invalid codepoint '{}': {e}", raw.escape_default())));
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(Error(format!(
            "Invalid glyph '{}': expected one ascii character",
            raw.escape_default()
        ))),
    }
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Print the contents of an MFnt file
        cmd args {
            /// The MFnt file to print
            required input: PathBuf
            /// Only print this glyph (a character, or a codepoint like 0x41)
            optional -g, --glyph glyph: String
            /// Do not print the decoded command trace
            optional --no-trace
            /// Do not print bitmaps
            optional --no-bitmap
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line() {
        let args = flags::Args::from_vec(vec!["font.mfnt".into(), "-g".into(), "A".into()])
            .unwrap();
        assert_eq!(args.input, std::path::PathBuf::from("font.mfnt"));
        let options = PrintOptions::from_args(&args).unwrap();
        assert_eq!(options.glyph, Some(b'A'));
        assert!(options.trace && options.bitmap);

        let args = flags::Args::from_vec(vec![
            "font.mfnt".into(),
            "--no-trace".into(),
            "--no-bitmap".into(),
        ])
        .unwrap();
        let options = PrintOptions::from_args(&args).unwrap();
        assert_eq!(options.glyph, None);
        assert!(!options.trace && !options.bitmap);

        assert!(flags::Args::from_vec(vec![]).is_err());
    }

    #[test]
    fn glyph_argument() {
        assert_eq!(parse_glyph("A").unwrap(), b'A');
        assert_eq!(parse_glyph(" ").unwrap(), b' ');
        assert_eq!(parse_glyph("0x7e").unwrap(), b'~');
        assert!(parse_glyph("AB").is_err());
        assert!(parse_glyph("é").is_err());
        assert!(parse_glyph("0xzz").is_err());
    }
}
