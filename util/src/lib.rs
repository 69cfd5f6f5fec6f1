// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hex dumps in the classic `xxd` layout:
//!
//! ```text
//! 0000000: 5359 4e54 4845 5820 524f 4d20 4445 434f  SYNTHEX ROM DECO
//! 0000010: 4445 5221                                DER!
//! ```

use std::{
    fmt::{self, Write as _},
    io,
};

/// The number of bytes shown on each line of a dump.
pub const BYTES_PER_LINE: usize = 16;

/// The width of the hex column, counting the gap before the ASCII column.
///
/// A full line has sixteen two-digit values with a space after every pair, plus one more space.
const HEX_COLUMN_WIDTH: usize = (BYTES_PER_LINE * 2) + (BYTES_PER_LINE / 2) + 1;

/// Writes a dump of `bytes`, one line at a time, to `w`.
pub fn dump_hex(w: &mut impl io::Write, bytes: &[u8]) -> io::Result<()> {
    for line in dump(bytes) {
        writeln!(w, "{}", line)?;
    }

    Ok(())
}

/// Splits `bytes` into the lines of a dump.
///
/// There is always at least one line; an empty buffer yields a lone offset.
pub fn dump(bytes: &[u8]) -> Dump<'_> {
    Dump {
        bytes,
        offset: 0,
        is_done: false,
    }
}

/// An iterator over the [`Line`]s of a dump.
#[derive(Clone, Debug)]
pub struct Dump<'a> {
    bytes: &'a [u8],
    offset: usize,
    is_done: bool,
}

impl<'a> Iterator for Dump<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done {
            return None;
        }

        let end = (self.offset + BYTES_PER_LINE).min(self.bytes.len());
        let line = Line {
            offset: self.offset,
            bytes: &self.bytes[self.offset..end],
        };
        self.offset = end;
        self.is_done = end == self.bytes.len();

        Some(line)
    }
}

/// Up to [`BYTES_PER_LINE`] bytes of a dump and where they start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    offset: usize,
    bytes: &'a [u8],
}

impl<'a> Line<'a> {
    /// The offset of the first byte on this line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The bytes shown on this line, at most [`BYTES_PER_LINE`] of them.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:07x}: ", self.offset)?;
        if self.bytes.is_empty() {
            return Ok(());
        }

        for (i, byte) in self.bytes.iter().enumerate() {
            write!(f, "{:02x}", byte)?;
            if (i % 2) == 1 {
                f.write_char(' ')?;
            }
        }

        // Short lines are padded so that the ASCII column lines up with full lines. The ASCII
        // column itself is not padded.
        let written = (self.bytes.len() * 2) + (self.bytes.len() / 2);
        write!(f, "{:1$}", "", HEX_COLUMN_WIDTH - written)?;

        self.bytes
            .iter()
            .try_for_each(|byte| f.write_char(to_ascii(*byte)))
    }
}

fn to_ascii(byte: u8) -> char {
    if (0x20..0x7f).contains(&byte) {
        char::from(byte)
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn render(bytes: &[u8]) -> Vec<String> {
        dump(bytes).map(|it| it.to_string()).collect()
    }

    fn counting(len: usize) -> Vec<u8> {
        (0..len).map(|it| it as u8).collect()
    }

    #[test]
    fn full_line() {
        assert_eq!(
            vec!["0000000: 0001 0203 0405 0607 0809 0a0b 0c0d 0e0f  ................"],
            render(&counting(16)),
        );
    }

    #[test]
    fn short_final_line() {
        let lines = render(&counting(17));

        assert_eq!(2, lines.len());
        assert_eq!(
            format!("0000010: 10{}.", " ".repeat(39)),
            lines[1],
        );
    }

    #[test]
    fn empty_buffer() {
        let lines: Vec<Line> = dump(&[]).collect();

        assert_eq!(1, lines.len());
        assert_eq!(0, lines[0].offset());
        assert_eq!("0000000: ", lines[0].to_string());
    }

    #[test]
    fn short_lines_align_with_full_lines() {
        let full_len = render(&counting(16))[0].len();
        for len in 1..BYTES_PER_LINE {
            let line = &render(&counting(len))[0];

            // Only the ASCII column is shorter.
            assert_eq!(
                full_len - (BYTES_PER_LINE - len),
                line.len(),
                "misaligned line for {} bytes: {:?}",
                len,
                line,
            );
        }
    }

    #[test]
    fn short_line_keeps_pair_grouping() {
        assert_eq!(
            format!("0000000: 0001 02{}...", " ".repeat(34)),
            render(&counting(3))[0],
        );
    }

    #[test]
    fn printable_bounds() {
        assert_eq!(
            format!("0000000: 1f20 7e7f{}. ~.", " ".repeat(32)),
            render(&[0x1f, 0x20, 0x7e, 0x7f])[0],
        );
    }

    #[test]
    fn offsets_step_by_line() {
        let offsets: Vec<usize> = dump(&counting(48)).map(|it| it.offset()).collect();

        assert_eq!(vec![0x00, 0x10, 0x20], offsets);
    }

    #[test]
    fn lines_split_buffer() {
        let bytes = counting(40);
        let lines: Vec<Line> = dump(&bytes).collect();

        assert_eq!(&bytes[0x00..0x10], lines[0].bytes());
        assert_eq!(&bytes[0x10..0x20], lines[1].bytes());
        assert_eq!(&bytes[0x20..0x28], lines[2].bytes());
        assert_eq!(bytes, lines.iter().flat_map(|it| it.bytes()).copied().collect::<Vec<_>>());
    }

    #[test]
    fn dump_is_restartable() {
        let bytes = counting(40);
        let dump = dump(&bytes);

        assert_eq!(
            dump.clone().map(|it| it.to_string()).collect::<Vec<_>>(),
            dump.map(|it| it.to_string()).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn dump_hex_writes_lines() {
        let mut out = Vec::new();
        dump_hex(&mut out, b"SYNTHEX ROM DECODER!").unwrap();

        assert_eq!(
            indoc! {"
                0000000: 5359 4e54 4845 5820 524f 4d20 4445 434f  SYNTHEX ROM DECO
                0000010: 4445 5221                                DER!
            "},
            String::from_utf8(out).unwrap(),
        );
    }

    #[test]
    fn dump_hex_consecutive_lines() {
        let mut out = Vec::new();
        dump_hex(&mut out, &counting(32)).unwrap();

        assert_eq!(
            indoc! {"
                0000000: 0001 0203 0405 0607 0809 0a0b 0c0d 0e0f  ................
                0000010: 1011 1213 1415 1617 1819 1a1b 1c1d 1e1f  ................
            "},
            String::from_utf8(out).unwrap(),
        );
    }
}
