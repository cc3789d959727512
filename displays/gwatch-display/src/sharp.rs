//! Sharp memory LCD driver
//!
//! Driver for the LS013B7DH03 96x96 memory-in-pixel panel over SPI. The
//! panel keeps its image without refresh, so only changed lines need to be
//! sent.
//!
//! Wire formats (LSB first, chip-select active for the whole command):
//!
//! ```text
//! clear:        [CLEAR, 0]
//! one line:     [WRITE_LINE, addr, d0..d11, 0, 0]
//! many lines:   [WRITE_MULTIPLE_LINES] ([addr, d0..d11, 0])*
//! ```
//!
//! Line writes go out on the non-blocking bus primitive. The driver waits
//! for the bus to go idle before it touches the frame buffer or its scratch
//! buffer again, so callers never see a half-sent frame.

use embedded_hal::delay::DelayNs;
use gwatch_core::config::DisplayConfig;
use gwatch_hal::spi::{BitOrder, Mode, SpiConfig};
use gwatch_hal::{ChipSelect, CompareTimer, EventRouter, GpioTask, SpiTransfer};

use crate::font::GLYPH_SIZE;
use crate::frame::{FrameBuffer, LINES, RECORD_LEN};
use crate::render::Canvas;
use crate::vcom::{VcomError, VcomGenerator};

/// Panel command bytes
///
/// Bit 1 (VCOM) is driven on EXTCOMIN instead and stays zero here. The
/// panel has a single write mode; one line and many lines share its byte.
pub mod cmd {
    pub const WRITE_LINE: u8 = 0x01;
    pub const WRITE_MULTIPLE_LINES: u8 = 0x01;
    pub const VCOM: u8 = 0x02;
    pub const CLEAR: u8 = 0x04;
}

/// Single-line command length
pub const LINE_COMMAND_LEN: usize = RECORD_LEN + 2;

/// Caption drawn at bring-up next to the sampling state
const SAMPLING_LABEL: &[u8] = b"SAMPLING";

/// Sharp memory LCD
///
/// A line sent with [`flush_line`](Self::flush_line) is still read from the
/// driver's scratch buffer after the call returns. Do not move the driver
/// while a line is in flight; call [`wait_idle`](Self::wait_idle) first.
/// Dropping the driver waits for the bus.
pub struct SharpDisplay<SPI: SpiTransfer> {
    spi: SPI,
    frame: FrameBuffer,
    /// Command buffer for single-line and clear transfers
    scratch: [u8; LINE_COMMAND_LEN],
    /// A non-blocking transfer may still be reading `scratch`
    in_flight: bool,
}

impl<SPI: SpiTransfer> SharpDisplay<SPI> {
    /// Create a new driver with a blank frame
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            frame: FrameBuffer::new(),
            scratch: [0; LINE_COMMAND_LEN],
            in_flight: false,
        }
    }

    /// Bring the panel up
    ///
    /// Configures the bus and the VCOM signal, clears the panel, pushes a
    /// black frame and draws the static `SAMPLING` caption into the buffer.
    pub fn init<D, C, G, R>(
        &mut self,
        config: &DisplayConfig,
        vcom: &mut VcomGenerator<C, G, R>,
        delay: &mut D,
    ) -> Result<(), VcomError>
    where
        D: DelayNs,
        C: CompareTimer,
        G: GpioTask,
        R: EventRouter,
    {
        self.wait_idle();
        self.spi.configure(&SpiConfig {
            frequency: config.spi_frequency_hz,
            mode: Mode::Mode0,
            bit_order: BitOrder::LsbFirst,
        });
        vcom.configure()?;

        self.frame.reset();
        self.clear_screen();
        delay.delay_ms(config.clear_settle_ms);
        self.flush_all();

        let label = config.layout.sampling_label;
        self.write_text(SAMPLING_LABEL, label.line, label.column, true);

        debug!("Display initialized");
        Ok(())
    }

    /// Read-only view of the frame buffer
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Block until the last non-blocking transfer has finished
    pub fn wait_idle(&mut self) {
        if self.in_flight {
            self.spi.wait_idle();
            self.in_flight = false;
        }
    }

    /// Set every pixel of the panel to white
    ///
    /// The frame buffer is not modified.
    pub fn clear_screen(&mut self) {
        self.wait_idle();
        self.scratch[0] = cmd::CLEAR;
        self.scratch[1] = 0;
        self.spi
            .transfer_async(&self.scratch[..2], None, ChipSelect::Automatic);
        self.spi.wait_idle();
        debug!("Display cleared");
    }

    /// Send one line
    ///
    /// Returns once the transfer has started. Lines off the panel are
    /// ignored.
    pub fn flush_line(&mut self, line: usize) {
        self.wait_idle();
        let Some(record) = self.frame.record(line) else {
            return;
        };

        self.scratch[0] = cmd::WRITE_LINE;
        self.scratch[1..=RECORD_LEN].copy_from_slice(record);
        self.scratch[RECORD_LEN + 1] = 0;
        self.spi
            .transfer_async(&self.scratch, None, ChipSelect::Automatic);
        self.in_flight = true;
        trace!("Flush line {}", line);
    }

    /// Send lines `start..end` in one multi-line write
    ///
    /// `end` is clamped to the panel height; an empty range sends nothing.
    pub fn flush_range(&mut self, start: usize, end: usize) {
        self.wait_idle();
        let records = self.frame.records(start, end);
        if records.is_empty() {
            return;
        }

        self.scratch[0] = cmd::WRITE_MULTIPLE_LINES;
        self.spi.select();
        self.spi
            .transfer_async(&self.scratch[..1], None, ChipSelect::Manual);
        self.spi.wait_idle();

        self.spi.transfer_async(records, None, ChipSelect::Automatic);
        self.spi.wait_idle();
        trace!("Flush lines {}..{}", start, end);
    }

    /// Send the whole frame
    pub fn flush_all(&mut self) {
        self.flush_range(0, LINES);
        debug!("Display flushed");
    }

    /// Write text and send the glyph rows it covers
    pub fn draw_text(&mut self, text: &[u8], line: u8, column: u8, inverted: bool) {
        self.write_text(text, line, column, inverted);
        let start = line as usize;
        self.flush_range(start, start + GLYPH_SIZE);
    }

    /// Fill every line's data with `pattern`
    pub fn fill(&mut self, pattern: u8) {
        self.wait_idle();
        self.frame.fill(pattern);
    }
}

impl<SPI: SpiTransfer> Drop for SharpDisplay<SPI> {
    fn drop(&mut self) {
        self.wait_idle();
    }
}

impl<SPI: SpiTransfer> Canvas for SharpDisplay<SPI> {
    fn write_text(&mut self, text: &[u8], line: u8, column: u8, inverted: bool) {
        self.wait_idle();
        self.frame.write_text(text, line, column, inverted);
    }

    fn write_region(&mut self, bytes: &[u8], line: u8, column: u8) {
        self.wait_idle();
        self.frame.write_region(bytes, line, column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::INVERTED;
    use crate::frame::LINE_DATA_LEN;
    use gwatch_core::config::VcomConfig;
    use gwatch_hal::gpio::{Level, TaskAction};
    use gwatch_hal::interconnect::{InterconnectError, Route};
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum BusEvent {
        Configure(SpiConfig),
        Select,
        Transfer(Vec<u8>, ChipSelect),
        WaitIdle,
    }

    /// Records every bus call; flags a transfer started while busy
    #[derive(Default)]
    struct RecordingBus {
        events: Vec<BusEvent>,
        busy: bool,
    }

    impl RecordingBus {
        fn transfers(&self) -> Vec<(Vec<u8>, ChipSelect)> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    BusEvent::Transfer(bytes, cs) => Some((bytes.clone(), *cs)),
                    _ => None,
                })
                .collect()
        }
    }

    impl SpiTransfer for RecordingBus {
        fn configure(&mut self, config: &SpiConfig) {
            assert!(!self.busy, "configured while busy");
            self.events.push(BusEvent::Configure(*config));
        }

        fn transfer_async(&mut self, tx: &[u8], rx: Option<&mut [u8]>, cs: ChipSelect) {
            assert!(!self.busy, "transfer started while busy");
            assert!(rx.is_none());
            self.busy = true;
            self.events.push(BusEvent::Transfer(tx.to_vec(), cs));
        }

        fn wait_idle(&mut self) {
            self.busy = false;
            self.events.push(BusEvent::WaitIdle);
        }

        fn select(&mut self) {
            self.events.push(BusEvent::Select);
        }
    }

    fn display() -> SharpDisplay<RecordingBus> {
        SharpDisplay::new(RecordingBus::default())
    }

    /// Wait for the bus and take back what it recorded
    fn finish(mut display: SharpDisplay<RecordingBus>) -> RecordingBus {
        display.wait_idle();
        std::mem::take(&mut display.spi)
    }

    #[test]
    fn test_clear_screen() {
        let mut display = display();
        display.clear_screen();

        let bus = finish(display);
        assert_eq!(
            bus.events,
            vec![
                BusEvent::Transfer(vec![cmd::CLEAR, 0], ChipSelect::Automatic),
                BusEvent::WaitIdle,
            ]
        );
    }

    #[test]
    fn test_flush_line_frame() {
        let mut display = display();
        display.write_region(&[0xA5; LINE_DATA_LEN], 7, 0);
        display.flush_line(7);

        let bus = finish(display);
        let mut expected = vec![cmd::WRITE_LINE, 8];
        expected.extend_from_slice(&[0xA5; LINE_DATA_LEN]);
        expected.extend_from_slice(&[0, 0]);
        assert_eq!(bus.transfers(), vec![(expected, ChipSelect::Automatic)]);
    }

    #[test]
    fn test_flush_line_off_panel() {
        let mut display = display();
        display.flush_line(96);
        assert!(finish(display).transfers().is_empty());
    }

    #[test]
    fn test_consecutive_flushes_wait() {
        let mut display = display();
        display.flush_line(0);
        display.flush_line(1);
        display.fill(0xFF);

        let bus = finish(display);
        // RecordingBus asserts on overlap; check the order explicitly too
        assert!(matches!(bus.events[0], BusEvent::Transfer(..)));
        assert_eq!(bus.events[1], BusEvent::WaitIdle);
        assert!(matches!(bus.events[2], BusEvent::Transfer(..)));
        assert_eq!(bus.events[3], BusEvent::WaitIdle);
    }

    #[test]
    fn test_write_waits_for_line_in_flight() {
        let mut display = display();
        display.flush_line(3);
        display.write_text(b"A", 0, 0, true);

        let bus = finish(display);
        assert_eq!(bus.events.len(), 2);
        assert_eq!(bus.events[1], BusEvent::WaitIdle);
    }

    #[test]
    fn test_flush_range_sequence() {
        let mut display = display();
        display.flush_range(10, 12);

        let bus = finish(display);
        let records = FrameBuffer::new().records(10, 12).to_vec();
        assert_eq!(
            bus.events,
            vec![
                BusEvent::Select,
                BusEvent::Transfer(vec![cmd::WRITE_MULTIPLE_LINES], ChipSelect::Manual),
                BusEvent::WaitIdle,
                BusEvent::Transfer(records, ChipSelect::Automatic),
                BusEvent::WaitIdle,
            ]
        );
    }

    #[test]
    fn test_flush_all_covers_every_line() {
        let mut display = display();
        display.flush_all();

        let transfers = finish(display).transfers();
        assert_eq!(transfers.len(), 2);
        let (records, cs) = &transfers[1];
        assert_eq!(*cs, ChipSelect::Automatic);
        assert_eq!(records.len(), 96 * RECORD_LEN);
        assert_eq!(records[95 * RECORD_LEN], 96);
    }

    #[test]
    fn test_empty_range_sends_nothing() {
        let mut display = display();
        display.flush_range(40, 40);
        display.flush_range(96, 120);
        assert!(finish(display).events.is_empty());
    }

    #[test]
    fn test_vcom_bit_never_set() {
        let mut display = display();
        display.clear_screen();
        display.flush_line(0);
        display.flush_range(0, 1);

        for (bytes, _) in finish(display).transfers() {
            if bytes.len() <= 2 || bytes.len() == LINE_COMMAND_LEN {
                assert_eq!(bytes[0] & cmd::VCOM, 0);
            }
        }
    }

    #[test]
    fn test_single_and_multi_line_share_write_mode() {
        let mut display = display();
        display.flush_line(0);
        display.flush_range(0, 1);

        let transfers = finish(display).transfers();
        assert_eq!(transfers[0].0[0], transfers[1].0[0]);
        assert_eq!(transfers[1].0, vec![cmd::WRITE_LINE]);
    }

    #[test]
    fn test_draw_text_flushes_covered_lines() {
        let mut display = display();
        display.draw_text(b"HI", 20, 1, true);

        let data = display.frame().data(20).unwrap();
        assert_eq!(data[1], INVERTED[(b'H' - b' ') as usize][0]);

        let transfers = finish(display).transfers();
        let (records, _) = &transfers[1];
        assert_eq!(records.len(), 8 * RECORD_LEN);
        assert_eq!(records[0], 21);
    }

    #[test]
    fn test_fill_pattern_flush() {
        let mut display = display();
        display.fill(0x0F);
        display.flush_line(50);

        let transfers = finish(display).transfers();
        let (bytes, _) = &transfers[0];
        assert_eq!(bytes[1], 51);
        assert!(bytes[2..=LINE_DATA_LEN + 1].iter().all(|&b| b == 0x0F));
        assert_eq!(&bytes[LINE_DATA_LEN + 2..], &[0, 0]);
    }

    /// Bus whose busy flag outlives the driver
    struct SharedBus {
        busy: Rc<Cell<bool>>,
    }

    impl SpiTransfer for SharedBus {
        fn configure(&mut self, _config: &SpiConfig) {}

        fn transfer_async(&mut self, _tx: &[u8], _rx: Option<&mut [u8]>, _cs: ChipSelect) {
            assert!(!self.busy.get(), "transfer started while busy");
            self.busy.set(true);
        }

        fn wait_idle(&mut self) {
            self.busy.set(false);
        }

        fn select(&mut self) {}
    }

    #[test]
    fn test_drop_waits_for_line_in_flight() {
        let busy = Rc::new(Cell::new(false));
        let mut display = SharpDisplay::new(SharedBus { busy: busy.clone() });
        display.flush_line(0);
        assert!(busy.get());

        drop(display);
        assert!(!busy.get());
    }

    // Peripherals for bring-up

    #[derive(Default)]
    struct NullRtc {
        compare: Option<(u8, u32)>,
    }

    impl CompareTimer for NullRtc {
        const COUNTER_BITS: u32 = 24;

        fn counter(&self) -> u32 {
            0
        }

        fn set_compare(&mut self, channel: u8, value: u32) {
            self.compare = Some((channel, value));
        }

        fn enable_compare_event(&mut self, _channel: u8) {}

        fn enable_compare_interrupt(&mut self, _channel: u8) {}
    }

    struct NullGpiote;

    impl GpioTask for NullGpiote {
        fn configure_task(&mut self, _channel: u8, _pin: u8, _action: TaskAction, _initial: Level) {}
    }

    struct Ppi {
        refuse: bool,
    }

    impl EventRouter for Ppi {
        fn assign(&mut self, _route: Route) -> Result<(), InterconnectError> {
            if self.refuse {
                Err(InterconnectError::Reserved)
            } else {
                Ok(())
            }
        }

        fn enable(&mut self, _channel: u8) -> Result<(), InterconnectError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[test]
    fn test_init_sequence() {
        let mut display = display();
        let mut vcom = VcomGenerator::new(
            NullRtc::default(),
            NullGpiote,
            Ppi { refuse: false },
            VcomConfig::default(),
        );
        let mut delay = MockDelay::default();
        let config = DisplayConfig::default();

        display.init(&config, &mut vcom, &mut delay).unwrap();

        assert_eq!(delay.total_ns, 5_000_000);
        let (rtc, _, _) = vcom.release();
        assert_eq!(rtc.compare, Some((3, 1024)));

        // Caption rendered after the first full flush
        let label = config.layout.sampling_label;
        let data = display.frame().data(label.line as usize).unwrap();
        assert_eq!(data[0], INVERTED[(b'S' - b' ') as usize][0]);

        let bus = finish(display);
        assert_eq!(
            bus.events[0],
            BusEvent::Configure(SpiConfig {
                frequency: 1_000_000,
                mode: Mode::Mode0,
                bit_order: BitOrder::LsbFirst,
            })
        );
        let transfers = bus.transfers();
        assert_eq!(transfers[0].0, vec![cmd::CLEAR, 0]);
        assert_eq!(transfers[1].0, vec![cmd::WRITE_MULTIPLE_LINES]);
        assert_eq!(transfers[2].0, FrameBuffer::new().as_bytes().to_vec());
        assert_eq!(transfers.len(), 3);
    }

    #[test]
    fn test_init_stops_on_vcom_error() {
        let mut display = display();
        let mut vcom = VcomGenerator::new(
            NullRtc::default(),
            NullGpiote,
            Ppi { refuse: true },
            VcomConfig::default(),
        );

        let result = display.init(&DisplayConfig::default(), &mut vcom, &mut MockDelay::default());
        assert_eq!(
            result,
            Err(VcomError::Interconnect(InterconnectError::Reserved))
        );
        assert!(finish(display).transfers().is_empty());
    }

    proptest! {
        #[test]
        fn prop_flush_line(line in 0usize..96, pattern in any::<u8>()) {
            let mut display = display();
            display.fill(pattern);
            display.flush_line(line);

            let transfers = finish(display).transfers();
            prop_assert_eq!(transfers.len(), 1);
            let (bytes, cs) = &transfers[0];
            prop_assert_eq!(*cs, ChipSelect::Automatic);
            prop_assert_eq!(bytes.len(), 16);
            prop_assert_eq!(bytes[0], cmd::WRITE_LINE);
            prop_assert_eq!(bytes[1] as usize, line + 1);
            prop_assert!(bytes[2..14].iter().all(|&b| b == pattern));
            prop_assert_eq!(&bytes[14..], &[0u8, 0][..]);
        }

        #[test]
        fn prop_flush_range(start in 0usize..96, len in 1usize..=96) {
            let end = (start + len).min(96);
            let mut display = display();
            display.flush_range(start, end);

            let bus = finish(display);
            prop_assert_eq!(bus.events.len(), 5);
            prop_assert_eq!(&bus.events[0], &BusEvent::Select);
            let transfers = bus.transfers();
            prop_assert_eq!(
                &transfers[0],
                &(vec![cmd::WRITE_MULTIPLE_LINES], ChipSelect::Manual)
            );
            let (records, cs) = &transfers[1];
            prop_assert_eq!(*cs, ChipSelect::Automatic);
            prop_assert_eq!(records.len(), (end - start) * RECORD_LEN);
            let blank = FrameBuffer::new();
            prop_assert_eq!(records.as_slice(), blank.records(start, end));
        }
    }
}
