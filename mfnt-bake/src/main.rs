use std::path::PathBuf;

use mfnt_bake::BakeOptions;
use write_mfnt::FontOptions;

/// Convert an outline font into an MFnt bitmap font.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The font file to convert.
    font: PathBuf,

    /// The font size in pixels.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pixel_size: u32,

    /// Where to write the MFnt file.
    output: PathBuf,

    /// Store glyphs as compressed command streams
    #[arg(short, long)]
    compressed: bool,

    /// Set the italic flag
    #[arg(long)]
    italic: bool,

    /// Set the bold flag
    #[arg(long)]
    bold: bool,

    /// Keep metrics-only records for glyphs without pixels
    #[arg(long)]
    keep_empty_glyphs: bool,

    /// The face to use from a font collection
    #[arg(long, default_value_t = 0)]
    face_index: usize,
}

impl Args {
    fn options(&self) -> BakeOptions {
        BakeOptions {
            pixel_size: self.pixel_size,
            face_index: self.face_index,
            font: FontOptions {
                compressed: self.compressed,
                italic: self.italic,
                bold: self.bold,
                keep_empty_glyphs: self.keep_empty_glyphs,
            },
        }
    }
}

fn main() {
    env_logger::init();
    use clap::Parser as _;
    let args = Args::parse_from(wild::args());

    let bytes = match mfnt_bake::bake_file(&args.font, &args.options()) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = std::fs::write(&args.output, bytes) {
        eprintln!("failed to write {}: {e}", args.output.display());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_map_to_options() {
        let args =
            Args::try_parse_from(["mfnt-bake", "font.ttf", "12", "out.mfnt", "-c", "--bold"])
                .unwrap();
        let options = args.options();
        assert_eq!(options.pixel_size, 12);
        assert!(options.font.compressed);
        assert!(options.font.bold);
        assert!(!options.font.italic);
        assert_eq!(options.face_index, 0);
    }

    #[test]
    fn zero_pixel_size_is_rejected() {
        assert!(Args::try_parse_from(["mfnt-bake", "font.ttf", "0", "out.mfnt"]).is_err());
    }
}
