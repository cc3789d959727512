//! Frame buffer
//!
//! The buffer is kept in the panel's wire format so a run of lines can be
//! handed to the bus as one slice:
//!
//! ```text
//! ┌──────┬────────────────────────────┬─────┐
//! │ i+1  │ 12 data bytes (96 pixels)  │  0  │   line i
//! └──────┴────────────────────────────┴─────┘
//! ```
//!
//! The bus shifts LSB first, so bit 0 of each data byte is the leftmost
//! pixel of its 8-pixel column. A set bit is a white pixel.

/// Pixel lines on the panel
pub const LINES: usize = 96;

/// Data bytes per line
pub const LINE_DATA_LEN: usize = 12;

/// Line record length: address byte, data, pad byte
pub const RECORD_LEN: usize = LINE_DATA_LEN + 2;

/// Whole frame in bytes
pub const FRAME_LEN: usize = LINES * RECORD_LEN;

/// Frame buffer in panel wire format
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: [u8; FRAME_LEN],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a black frame with every line record addressed
    pub fn new() -> Self {
        let mut frame = Self {
            bytes: [0; FRAME_LEN],
        };
        frame.reset();
        frame
    }

    /// Rewrite every record: address `i + 1`, black data, zero pad
    pub fn reset(&mut self) {
        for (i, record) in self.bytes.chunks_exact_mut(RECORD_LEN).enumerate() {
            record.fill(0);
            record[0] = i as u8 + 1;
        }
    }

    /// Set every data byte to `pattern`
    ///
    /// Address and pad bytes are left untouched.
    pub fn fill(&mut self, pattern: u8) {
        for record in self.bytes.chunks_exact_mut(RECORD_LEN) {
            record[1..=LINE_DATA_LEN].fill(pattern);
        }
    }

    /// Full record of `line`
    pub fn record(&self, line: usize) -> Option<&[u8]> {
        if line >= LINES {
            return None;
        }
        let start = line * RECORD_LEN;
        Some(&self.bytes[start..start + RECORD_LEN])
    }

    /// Contiguous records of lines `start..end`
    ///
    /// `end` is clamped to the panel height; an empty range yields an empty
    /// slice.
    pub fn records(&self, start: usize, end: usize) -> &[u8] {
        let end = end.min(LINES);
        let start = start.min(end);
        &self.bytes[start * RECORD_LEN..end * RECORD_LEN]
    }

    /// Data bytes of `line`
    pub fn data(&self, line: usize) -> Option<&[u8]> {
        self.record(line).map(|record| &record[1..=LINE_DATA_LEN])
    }

    /// Set one data byte, ignoring positions off the panel
    pub fn set_byte(&mut self, line: usize, column: usize, value: u8) {
        if line < LINES && column < LINE_DATA_LEN {
            self.bytes[line * RECORD_LEN + 1 + column] = value;
        }
    }

    /// Whole frame
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "FrameBuffer[");
        for line in 0..LINES {
            if line > 0 {
                defmt::write!(f, ", ");
            }
            if let Some(data) = self.data(line) {
                defmt::write!(f, "{=[u8]:x}", data);
            }
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_framing(frame: &FrameBuffer) {
        for line in 0..LINES {
            let record = frame.record(line).unwrap();
            assert_eq!(record[0], line as u8 + 1);
            assert_eq!(record[RECORD_LEN - 1], 0);
        }
    }

    #[test]
    fn test_new_frame() {
        let frame = FrameBuffer::new();
        assert_eq!(frame.as_bytes().len(), 96 * 14);
        assert_framing(&frame);
        assert!((0..LINES).all(|l| frame.data(l).unwrap().iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_fill_preserves_framing() {
        let mut frame = FrameBuffer::new();
        frame.fill(0x0F);
        assert_framing(&frame);
        assert_eq!(frame.data(95).unwrap(), &[0x0F; LINE_DATA_LEN]);
    }

    #[test]
    fn test_set_byte_clips() {
        let mut frame = FrameBuffer::new();
        let before = frame.clone();

        frame.set_byte(96, 0, 0xFF);
        frame.set_byte(0, 12, 0xFF);
        assert!(frame == before);

        frame.set_byte(3, 11, 0xAA);
        assert_eq!(frame.record(3).unwrap()[12], 0xAA);
        assert_framing(&frame);
    }

    #[test]
    fn test_records_slice() {
        let frame = FrameBuffer::new();
        let slice = frame.records(10, 12);
        assert_eq!(slice.len(), 2 * RECORD_LEN);
        assert_eq!(slice[0], 11);
        assert_eq!(slice[RECORD_LEN], 12);

        assert_eq!(frame.records(90, 200).len(), 6 * RECORD_LEN);
        assert!(frame.records(50, 40).is_empty());
        assert!(frame.record(96).is_none());
    }

    #[test]
    fn test_reset_after_fill() {
        let mut frame = FrameBuffer::new();
        frame.fill(0xFF);
        frame.reset();
        assert!(frame == FrameBuffer::new());
    }
}
