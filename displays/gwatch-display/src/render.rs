//! Text rasterizer
//!
//! Text is placed on a grid of 8-pixel glyph columns. A glyph written at
//! `(line, column)` covers pixel lines `line..line + 8` of data byte
//! `column`. Anything past the last column or the last line is dropped.

use crate::font;
use crate::frame::FrameBuffer;

/// Surface that text and raw bytes can be written to
pub trait Canvas {
    /// Rasterize `text`, one glyph per byte, starting at glyph column
    /// `column` of pixel line `line`
    fn write_text(&mut self, text: &[u8], line: u8, column: u8, inverted: bool);

    /// Copy raw data bytes into one line starting at `column`
    fn write_region(&mut self, bytes: &[u8], line: u8, column: u8);
}

impl Canvas for FrameBuffer {
    fn write_text(&mut self, text: &[u8], line: u8, column: u8, inverted: bool) {
        for (i, &byte) in text.iter().enumerate() {
            let glyph = font::glyph(byte, inverted);
            let col = column as usize + i;
            for (row, &bits) in glyph.iter().enumerate() {
                self.set_byte(line as usize + row, col, bits);
            }
        }
    }

    fn write_region(&mut self, bytes: &[u8], line: u8, column: u8) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.set_byte(line as usize, column as usize + i, byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{INVERTED, NORMAL};
    use crate::frame::{LINES, LINE_DATA_LEN, RECORD_LEN};
    use proptest::prelude::*;

    #[test]
    fn test_glyph_placement() {
        let mut frame = FrameBuffer::new();
        frame.write_text(b"A", 10, 0, true);

        let a = &INVERTED[(b'A' - b' ') as usize];
        for row in 0..8 {
            assert_eq!(frame.record(10 + row).unwrap()[1], a[row]);
        }
        // Address bytes untouched
        assert_eq!(frame.record(10).unwrap()[0], 11);
    }

    #[test]
    fn test_second_glyph_column() {
        let mut frame = FrameBuffer::new();
        frame.write_text(b"AB", 0, 3, false);

        let b = &NORMAL[(b'B' - b' ') as usize];
        assert_eq!(frame.data(0).unwrap()[4], b[0]);
        assert_eq!(frame.data(7).unwrap()[4], b[7]);
    }

    #[test]
    fn test_clips_right_edge() {
        let mut frame = FrameBuffer::new();
        frame.write_text(b"0123456789ABCDEF", 0, 4, true);

        for line in 0..8 {
            let record = frame.record(line).unwrap();
            assert_eq!(record[0], line as u8 + 1);
            assert_eq!(record[RECORD_LEN - 1], 0);
        }
        assert_eq!(frame.data(0).unwrap()[LINE_DATA_LEN - 1], INVERTED[(b'7' - b' ') as usize][0]);
    }

    #[test]
    fn test_clips_bottom_edge() {
        let mut frame = FrameBuffer::new();
        frame.write_text(b"X", 92, 0, true);

        assert_eq!(frame.data(95).unwrap()[0], INVERTED[(b'X' - b' ') as usize][3]);
        assert_eq!(frame.as_bytes().len(), LINES * RECORD_LEN);
    }

    #[test]
    fn test_write_region() {
        let mut frame = FrameBuffer::new();
        frame.write_region(&[0xAA, 0x55, 0xFF], 5, 10);

        let data = frame.data(5).unwrap();
        assert_eq!(data[10], 0xAA);
        assert_eq!(data[11], 0x55);
        assert_eq!(frame.record(5).unwrap()[RECORD_LEN - 1], 0);
    }

    proptest! {
        #[test]
        fn prop_first_glyph_row(
            line in 0u8..89,
            byte in 0x20u8..0x7F,
            inverted in any::<bool>(),
        ) {
            let mut frame = FrameBuffer::new();
            frame.write_text(&[byte], line, 0, inverted);

            let table = if inverted { &INVERTED } else { &NORMAL };
            let record = frame.record(line as usize).unwrap();
            prop_assert_eq!(record[1], table[(byte - 0x20) as usize][0]);
        }

        #[test]
        fn prop_rewrite_is_idempotent(
            text in proptest::collection::vec(any::<u8>(), 0..16),
            line in any::<u8>(),
            column in 0u8..16,
            inverted in any::<bool>(),
        ) {
            let mut frame = FrameBuffer::new();
            frame.write_text(&text, line, column, inverted);
            let once = frame.clone();
            frame.write_text(&text, line, column, inverted);

            prop_assert!(frame == once);
            for l in 0..LINES {
                let record = frame.record(l).unwrap();
                prop_assert_eq!(record[0], l as u8 + 1);
                prop_assert_eq!(record[RECORD_LEN - 1], 0);
            }
        }
    }
}
