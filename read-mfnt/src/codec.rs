//! Decoding compressed glyph bitmaps.
//!
//! A compressed bitmap is a sequence of commands, each introduced by a two
//! bit opcode read most significant bit first:
//!
//! | bits  | command       | effect                                              |
//! |-------|---------------|-----------------------------------------------------|
//! | `00`  | RAW           | first command only: `width * height` literal bits   |
//! | `001` | REPEAT_ROW    | copy the previous row                               |
//! | `000` | REPEAT_WORD   | copy the word at the same position in the previous row |
//! | `10`  | COPY_ROW      | `width` literal bits                                |
//! | `11`  | ZERO_WORD     | `word_len` unset bits                               |
//! | `01`  | COPY_WORD     | `word_len` literal bits                             |
//!
//! Decoding stops as soon as `width * height` pixels have been produced; any
//! trailing padding is ignored.

use crate::bitmap::Bitmap;
use crate::bits::BitReader;

/// The two-bit command opcodes.
pub mod opcode {
    /// RAW when it is the first command, otherwise REPEAT_ROW or REPEAT_WORD
    /// depending on the following bit.
    pub const REPEAT: u8 = 0b00;
    pub const RAW: u8 = 0b00;
    pub const COPY_ROW: u8 = 0b10;
    pub const ZERO_WORD: u8 = 0b11;
    pub const COPY_WORD: u8 = 0b01;
    /// The bit following [`REPEAT`] that selects REPEAT_ROW.
    pub const REPEAT_ROW_BIT: bool = true;
}

/// A single decoded command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// The remainder of the stream is literal pixels.
    Raw,
    RepeatRow,
    /// Repeat the word at `index` in the previous row.
    RepeatWord { index: usize },
    CopyRow(Vec<bool>),
    ZeroWord,
    CopyWord(Vec<bool>),
}

impl Command {
    /// The bits that introduce this command.
    pub fn opcode_bits(&self) -> &'static [bool] {
        match self {
            Command::Raw => &[false, false],
            Command::RepeatRow => &[false, false, true],
            Command::RepeatWord { .. } => &[false, false, false],
            Command::CopyRow(_) => &[true, false],
            Command::ZeroWord => &[true, true],
            Command::CopyWord(_) => &[false, true],
        }
    }

    /// The encoded size of this command in bits.
    ///
    /// For [`Command::Raw`] this does not include the literal pixels that
    /// follow it.
    pub fn bit_len(&self) -> usize {
        let payload = match self {
            Command::CopyRow(bits) | Command::CopyWord(bits) => bits.len(),
            _ => 0,
        };
        self.opcode_bits().len() + payload
    }
}

fn write_bits(f: &mut std::fmt::Formatter<'_>, bits: &[bool]) -> std::fmt::Result {
    bits.iter()
        .try_for_each(|bit| f.write_str(if *bit { "1" } else { "0" }))
}

/// Formats the command as a line of a disassembly trace, e.g.
/// `(01) COPY_WORD [0110]`.
impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        write_bits(f, self.opcode_bits())?;
        f.write_str(") ")?;
        match self {
            Command::Raw => f.write_str("UNCOMPRESSED_RAW"),
            Command::RepeatRow => f.write_str("REPEAT_ROW"),
            Command::RepeatWord { index } => write!(f, "REPEAT_WORD (@{index})"),
            Command::CopyRow(bits) => {
                f.write_str("COPY_ROW [")?;
                write_bits(f, bits)?;
                f.write_str("]")
            }
            Command::ZeroWord => f.write_str("ZERO_WORD"),
            Command::CopyWord(bits) => {
                f.write_str("COPY_WORD [")?;
                write_bits(f, bits)?;
                f.write_str("]")
            }
        }
    }
}

/// A decoded bitmap, along with the commands that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBitmap {
    pub bitmap: Bitmap,
    pub trace: Vec<Command>,
}

/// Why a stream could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The stream ended before every pixel was produced.
    Exhausted,
    /// The word length does not evenly divide the width.
    WordLength { width: usize, word_len: usize },
    /// A row-level command appeared in the middle of a row.
    MidRowCommand,
    /// A repeat command appeared before any row was complete.
    NoPreviousRow,
}

/// An error produced while decoding a compressed bitmap.
///
/// Includes the commands decoded before the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedStream {
    pub reason: MalformedReason,
    pub pixels_decoded: usize,
    pub pixels_expected: usize,
    pub trace: Vec<Command>,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::Exhausted => f.write_str("stream exhausted"),
            MalformedReason::WordLength { width, word_len } => {
                write!(f, "word length {word_len} does not divide width {width}")
            }
            MalformedReason::MidRowCommand => f.write_str("row command in the middle of a row"),
            MalformedReason::NoPreviousRow => f.write_str("repeat before the first full row"),
        }
    }
}

impl std::fmt::Display for MalformedStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Malformed bitstream: {} after {} of {} pixels",
            self.reason, self.pixels_decoded, self.pixels_expected
        )
    }
}

impl std::error::Error for MalformedStream {}

#[derive(Debug)]
enum State {
    AwaitStartCommand,
    AwaitCommand {
        word_index: usize,
        /// The most recently completed row; empty before the first.
        row_buffer: Vec<bool>,
    },
}

struct Decoder<'a> {
    reader: BitReader<'a>,
    width: usize,
    word_len: usize,
    expected: usize,
    pixels: Vec<bool>,
    trace: Vec<Command>,
}

/// Decode a compressed bitmap of the given dimensions.
///
/// A `word_len` of zero is treated as one.
pub fn decode_word_mode(
    data: &[u8],
    width: usize,
    height: usize,
    word_len: usize,
) -> Result<DecodedBitmap, MalformedStream> {
    let mut decoder = Decoder {
        reader: BitReader::new(data),
        width,
        word_len: word_len.max(1),
        expected: width * height,
        pixels: Vec::with_capacity(width * height),
        trace: Vec::new(),
    };
    decoder.run()?;
    // run only returns once every pixel is present
    let bitmap = Bitmap::from_pixels(width, height, decoder.pixels).unwrap_or_default();
    Ok(DecodedBitmap {
        bitmap,
        trace: decoder.trace,
    })
}

impl Decoder<'_> {
    fn run(&mut self) -> Result<(), MalformedStream> {
        let mut state = State::AwaitStartCommand;
        while self.pixels.len() < self.expected {
            let op = self.read_opcode()?;
            state = match state {
                State::AwaitStartCommand if op == opcode::RAW => {
                    self.trace.push(Command::Raw);
                    self.read_literal(self.expected - self.pixels.len())?;
                    return Ok(());
                }
                State::AwaitStartCommand => {
                    if self.width % self.word_len != 0 {
                        return Err(self.error(MalformedReason::WordLength {
                            width: self.width,
                            word_len: self.word_len,
                        }));
                    }
                    self.step(op, 0, Vec::new())?
                }
                State::AwaitCommand {
                    word_index,
                    row_buffer,
                } => self.step(op, word_index, row_buffer)?,
            };
        }
        Ok(())
    }

    /// Execute one command, returning the next state.
    fn step(
        &mut self,
        op: u8,
        word_index: usize,
        row_buffer: Vec<bool>,
    ) -> Result<State, MalformedStream> {
        let word_len = self.word_len;
        match op {
            opcode::REPEAT => {
                let repeat_row = self.read_bit()? == opcode::REPEAT_ROW_BIT;
                if row_buffer.is_empty() {
                    return Err(self.error(MalformedReason::NoPreviousRow));
                }
                if repeat_row {
                    if word_index != 0 {
                        return Err(self.error(MalformedReason::MidRowCommand));
                    }
                    self.trace.push(Command::RepeatRow);
                    self.pixels.extend_from_slice(&row_buffer);
                    Ok(State::AwaitCommand {
                        word_index,
                        row_buffer,
                    })
                } else {
                    self.trace.push(Command::RepeatWord { index: word_index });
                    let start = word_index * word_len;
                    self.pixels
                        .extend_from_slice(&row_buffer[start..start + word_len]);
                    Ok(self.advance_word(word_index, row_buffer))
                }
            }
            opcode::COPY_ROW => {
                if word_index != 0 {
                    return Err(self.error(MalformedReason::MidRowCommand));
                }
                let start = self.pixels.len();
                self.read_literal(self.width)?;
                let row = self.pixels[start..].to_vec();
                self.trace.push(Command::CopyRow(row.clone()));
                Ok(State::AwaitCommand {
                    word_index: 0,
                    row_buffer: row,
                })
            }
            opcode::ZERO_WORD => {
                self.trace.push(Command::ZeroWord);
                self.pixels.extend(std::iter::repeat(false).take(word_len));
                Ok(self.advance_word(word_index, row_buffer))
            }
            _ => {
                let start = self.pixels.len();
                self.read_literal(word_len)?;
                self.trace
                    .push(Command::CopyWord(self.pixels[start..].to_vec()));
                Ok(self.advance_word(word_index, row_buffer))
            }
        }
    }

    /// Move to the next word, snapshotting the row once it is complete.
    fn advance_word(&self, word_index: usize, row_buffer: Vec<bool>) -> State {
        let word_index = word_index + 1;
        if word_index == self.width / self.word_len {
            let row_start = self.pixels.len() - self.width;
            State::AwaitCommand {
                word_index: 0,
                row_buffer: self.pixels[row_start..].to_vec(),
            }
        } else {
            State::AwaitCommand {
                word_index,
                row_buffer,
            }
        }
    }

    fn read_opcode(&mut self) -> Result<u8, MalformedStream> {
        match self.reader.read_bits(2) {
            Some(bits) => Ok(bits as u8),
            None => Err(self.error(MalformedReason::Exhausted)),
        }
    }

    fn read_bit(&mut self) -> Result<bool, MalformedStream> {
        match self.reader.read_bit() {
            Some(bit) => Ok(bit),
            None => Err(self.error(MalformedReason::Exhausted)),
        }
    }

    fn read_literal(&mut self, len: usize) -> Result<(), MalformedStream> {
        match self.reader.read_into(len, &mut self.pixels) {
            Some(()) => Ok(()),
            None => Err(self.error(MalformedReason::Exhausted)),
        }
    }

    fn error(&self, reason: MalformedReason) -> MalformedStream {
        MalformedStream {
            reason,
            pixels_decoded: self.pixels.len(),
            pixels_expected: self.expected,
            trace: self.trace.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn one_pixel() {
        // COPY_ROW [0]
        let decoded = decode_word_mode(&[0b1000_0000], 1, 1, 1).unwrap();
        assert_eq!(decoded.bitmap.to_string(), ".");
        assert_eq!(decoded.trace, vec![Command::CopyRow(bits("0"))]);
    }

    #[test]
    fn copy_row_then_repeat_row() {
        // 10 10101010 | 001 | padding
        let data = mfnt_test_data::streams::ALTERNATING_8X2;
        let decoded = decode_word_mode(data, 8, 2, 8).unwrap();
        assert_eq!(decoded.bitmap.to_string(), "#.#.#.#.\n#.#.#.#.");
        let trace: Vec<_> = decoded.trace.iter().map(ToString::to_string).collect();
        assert_eq!(trace, ["(10) COPY_ROW [10101010]", "(001) REPEAT_ROW"]);
    }

    #[test]
    fn raw_start() {
        // 00 | 1001 | padding
        let decoded = decode_word_mode(&[0b0010_0100], 2, 2, 0).unwrap();
        assert_eq!(decoded.bitmap.to_string(), "#.\n.#");
        assert_eq!(decoded.trace, vec![Command::Raw]);
    }

    #[test]
    fn word_commands() {
        let data = mfnt_test_data::streams::WORDS_4X3;
        let decoded = decode_word_mode(data, 4, 3, 2).unwrap();
        assert_eq!(decoded.bitmap.to_string(), "##..\n##.#\n...#");
        assert_eq!(
            decoded.trace,
            vec![
                Command::CopyWord(bits("11")),
                Command::ZeroWord,
                Command::RepeatWord { index: 0 },
                Command::CopyWord(bits("01")),
                Command::ZeroWord,
                Command::RepeatWord { index: 1 },
            ]
        );
    }

    #[test]
    fn exhausted_reports_partial_trace() {
        // COPY_ROW [1111] then nothing useful
        let err = decode_word_mode(&[0b1011_1100], 4, 2, 4).unwrap_err();
        assert_eq!(err.reason, MalformedReason::Exhausted);
        assert_eq!(err.pixels_decoded, 4);
        assert_eq!(err.pixels_expected, 8);
        assert_eq!(err.trace, vec![Command::CopyRow(bits("1111"))]);
    }

    #[test]
    fn repeat_without_previous_row() {
        // ZERO_WORD then REPEAT_WORD
        let err = decode_word_mode(&[0b1100_0000], 2, 2, 1).unwrap_err();
        assert_eq!(err.reason, MalformedReason::NoPreviousRow);
        assert_eq!(err.trace, vec![Command::ZeroWord]);
    }

    #[test]
    fn copy_row_mid_row() {
        // ZERO_WORD then COPY_ROW
        let err = decode_word_mode(&[0b1110_1100], 2, 1, 1).unwrap_err();
        assert_eq!(err.reason, MalformedReason::MidRowCommand);
    }

    #[test]
    fn word_length_must_divide_width() {
        let err = decode_word_mode(&[0xff], 3, 1, 2).unwrap_err();
        assert_eq!(
            err.reason,
            MalformedReason::WordLength {
                width: 3,
                word_len: 2
            }
        );
    }

    #[test]
    fn empty_bitmap_reads_nothing() {
        let decoded = decode_word_mode(&[], 0, 5, 1).unwrap();
        assert!(decoded.bitmap.is_empty());
        assert!(decoded.trace.is_empty());
    }

    #[test]
    fn decoding_is_repeatable() {
        let data = mfnt_test_data::streams::WORDS_4X3;
        let first = decode_word_mode(data, 4, 3, 2).unwrap();
        let second = decode_word_mode(data, 4, 3, 2).unwrap();
        assert_eq!(first, second);
    }
}
