//! Encoding glyph bitmaps as command streams.
//!
//! This produces streams in the format decoded by
//! [`read_mfnt::codec::decode_word_mode`].

use read_mfnt::{codec::opcode, Bitmap, Command};

use crate::bits::BitWriter;

/// An encoded bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedBitmap {
    /// The stream, padded with zero bits to a whole number of bytes.
    pub data: Vec<u8>,
    /// The number of meaningful bits in `data`.
    pub bit_len: usize,
    /// The commands that make up the stream.
    pub commands: Vec<Command>,
}

impl EncodedBitmap {
    fn from_commands(commands: Vec<Command>, literal: &[bool]) -> Self {
        let mut writer = BitWriter::new();
        for command in &commands {
            write_command(&mut writer, command);
        }
        writer.extend(literal.iter().copied());
        EncodedBitmap {
            bit_len: writer.bit_len(),
            data: writer.into_bytes(),
            commands,
        }
    }

    /// The size of the padded stream in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

fn write_command(writer: &mut BitWriter, command: &Command) {
    match command {
        Command::Raw => writer.push_bits(opcode::RAW as u32, 2),
        Command::RepeatRow => {
            writer.push_bits(opcode::REPEAT as u32, 2);
            writer.push_bit(opcode::REPEAT_ROW_BIT);
        }
        Command::RepeatWord { .. } => {
            writer.push_bits(opcode::REPEAT as u32, 2);
            writer.push_bit(!opcode::REPEAT_ROW_BIT);
        }
        Command::CopyRow(bits) => {
            writer.push_bits(opcode::COPY_ROW as u32, 2);
            writer.extend(bits.iter().copied());
        }
        Command::ZeroWord => writer.push_bits(opcode::ZERO_WORD as u32, 2),
        Command::CopyWord(bits) => {
            writer.push_bits(opcode::COPY_WORD as u32, 2);
            writer.extend(bits.iter().copied());
        }
    }
}

/// Encode the whole bitmap as literal pixels behind a single RAW command.
pub fn encode_raw(bitmap: &Bitmap) -> EncodedBitmap {
    if bitmap.is_empty() {
        return EncodedBitmap::from_commands(Vec::new(), &[]);
    }
    EncodedBitmap::from_commands(vec![Command::Raw], bitmap.pixels())
}

/// Encode a bitmap using words of `word_len` pixels.
///
/// A `word_len` of zero is treated as one. If `word_len` does not evenly
/// divide the width of the bitmap, the result is a RAW stream.
pub fn encode_word_mode(bitmap: &Bitmap, word_len: usize) -> EncodedBitmap {
    let word_len = word_len.max(1);
    if bitmap.is_empty() {
        return EncodedBitmap::from_commands(Vec::new(), &[]);
    }
    if bitmap.width() % word_len != 0 {
        return encode_raw(bitmap);
    }
    let mut commands = Vec::new();
    let mut prev: Option<&[bool]> = None;
    for row in bitmap.rows() {
        commands.extend(encode_row(row, prev, word_len));
        prev = Some(row);
    }
    EncodedBitmap::from_commands(commands, &[])
}

fn cost(commands: &[Command]) -> usize {
    commands.iter().map(Command::bit_len).sum()
}

/// Choose the cheapest commands for one row.
///
/// On equal cost a REPEAT_ROW is preferred, then a COPY_ROW. Rows are picked
/// by cost rather than by fixed rules, so the bytes can differ from those of a
/// greedy rule-based encoder, but are never longer and decode the same way.
fn encode_row(row: &[bool], prev: Option<&[bool]>, word_len: usize) -> Vec<Command> {
    if prev == Some(row) {
        let repeat = Command::RepeatRow;
        let words = encode_words(row, prev, word_len);
        return if cost(&words) < repeat.bit_len() {
            words
        } else {
            vec![repeat]
        };
    }
    let copy = Command::CopyRow(row.to_vec());
    let words = encode_words(row, prev, word_len);
    if cost(&words) < copy.bit_len() {
        words
    } else {
        vec![copy]
    }
}

/// Encode each word of a row independently.
fn encode_words(row: &[bool], prev: Option<&[bool]>, word_len: usize) -> Vec<Command> {
    row.chunks(word_len)
        .enumerate()
        .map(|(index, word)| {
            let is_zero = !word.iter().any(|bit| *bit);
            let above = prev.map(|prev| &prev[index * word_len..(index + 1) * word_len]);
            if is_zero {
                Command::ZeroWord
            } else if above == Some(word) {
                Command::RepeatWord { index }
            } else {
                Command::CopyWord(word.to_vec())
            }
        })
        .collect()
}
