//! Status overlays
//!
//! Each overlay owns one text field of the [`DisplayLayout`] and redraws
//! only that field. All text is drawn light on dark.
//!
//! ```text
//! ┌────────────┐
//! │B   GPS100% │  line 1
//! │  12:34:56  │  line 12
//! │SAMPLING  ON│  line 22
//! │LATITUDE:   │  line 34
//! │051*28.3821'│  line 42
//! │           N│  line 50
//! │LONGITUDE:  │  line 60
//! │000*07.6531'│  line 68
//! │           W│  line 76
//! └────────────┘
//! ```

use core::fmt::Write;

use gwatch_core::config::{DisplayLayout, Region};
use gwatch_core::position::Coordinate;
use gwatch_core::{ConnectionHandle, FixRecord, TimeOfDay};
use heapless::String;

use crate::render::Canvas;

/// Helper to write formatted output to a heapless String
fn write_to_string<const N: usize>(
    s: &mut String<N>,
    args: core::fmt::Arguments<'_>,
) -> core::fmt::Result {
    s.write_fmt(args)
}

/// Renderer for the status fields
#[derive(Debug, Clone)]
pub struct StatusOverlay {
    layout: DisplayLayout,
    /// Last battery percentage drawn
    battery: Option<u8>,
    /// Positioning power blink phase
    blink: u8,
}

impl StatusOverlay {
    /// Create an overlay renderer; nothing has been drawn yet
    pub const fn new(layout: DisplayLayout) -> Self {
        Self {
            layout,
            battery: None,
            blink: 0,
        }
    }

    /// Field positions
    pub fn layout(&self) -> &DisplayLayout {
        &self.layout
    }

    /// Draw the clock as `HH:MM:SS`
    pub fn draw_clock<C: Canvas>(&self, canvas: &mut C, timestamp: u32) {
        let mut text: String<8> = String::new();
        let _ = write_to_string(
            &mut text,
            format_args!("{}", TimeOfDay::from_timestamp(timestamp)),
        );
        draw(canvas, self.layout.clock, text.as_bytes());
    }

    /// Draw the battery percentage, right-justified, with a `%` suffix
    ///
    /// Values above 100 are shown as 100. Returns `false` without touching
    /// the canvas when `percent` is already on screen.
    pub fn draw_battery<C: Canvas>(&mut self, canvas: &mut C, percent: u8) -> bool {
        let percent = percent.min(100);
        if self.battery == Some(percent) {
            return false;
        }

        let mut text: String<4> = String::new();
        let _ = write_to_string(&mut text, format_args!("{:>3}%", percent));
        draw(canvas, self.layout.battery, text.as_bytes());
        self.battery = Some(percent);
        true
    }

    /// Forget the cached battery value so the next draw always renders
    pub fn invalidate_battery(&mut self) {
        self.battery = None;
    }

    /// Draw `B` while a radio connection is up
    pub fn draw_connection<C: Canvas>(&self, canvas: &mut C, handle: ConnectionHandle) {
        let marker: &[u8] = if handle.is_connected() { b"B" } else { b" " };
        draw(canvas, self.layout.connection, marker);
    }

    /// Draw `GPS` while the positioning module is powered
    ///
    /// Without a fix the marker blinks: every other call draws it blank,
    /// starting with a blank.
    pub fn draw_positioning_power<C: Canvas>(
        &mut self,
        canvas: &mut C,
        powered: bool,
        fix: &FixRecord,
    ) {
        let mut marker: &[u8] = b"   ";
        if powered {
            marker = b"GPS";
            if !fix.has_fix() {
                self.blink = self.blink.wrapping_add(1);
                if self.blink % 2 == 1 {
                    marker = b"   ";
                }
            }
        }
        draw(canvas, self.layout.positioning_power, marker);
    }

    /// Draw the static `SAMPLING` caption
    pub fn draw_sampling_label<C: Canvas>(&self, canvas: &mut C) {
        draw(canvas, self.layout.sampling_label, b"SAMPLING");
    }

    /// Draw ` ON` or `OFF` after the sampling caption
    pub fn draw_sampling_state<C: Canvas>(&self, canvas: &mut C, active: bool) {
        let state: &[u8] = if active { b" ON" } else { b"OFF" };
        draw(canvas, self.layout.sampling_state, state);
    }

    /// Draw both coordinates with their captions
    ///
    /// Placeholders are shown unless the module is powered and reports a
    /// fix.
    pub fn draw_coordinates<C: Canvas>(&self, canvas: &mut C, fix: &FixRecord, powered: bool) {
        let valid = powered && fix.has_fix();
        let layout = &self.layout;

        draw(canvas, layout.latitude_caption, b"LATITUDE:");
        draw_coordinate(
            canvas,
            valid.then_some(&fix.latitude),
            layout.latitude,
            layout.latitude_hemisphere,
        );

        draw(canvas, layout.longitude_caption, b"LONGITUDE:");
        draw_coordinate(
            canvas,
            valid.then_some(&fix.longitude),
            layout.longitude,
            layout.longitude_hemisphere,
        );
    }
}

impl Default for StatusOverlay {
    fn default() -> Self {
        Self::new(DisplayLayout::DEFAULT)
    }
}

fn draw<C: Canvas>(canvas: &mut C, region: Region, text: &[u8]) {
    canvas.write_text(text, region.line, region.column, true);
}

fn draw_coordinate<C: Canvas>(
    canvas: &mut C,
    coordinate: Option<&Coordinate>,
    field: Region,
    hemisphere: Region,
) {
    let (text, indicator) = match coordinate {
        Some(c) => (c.field(), c.hemisphere),
        None => (
            Coordinate::PLACEHOLDER_FIELD,
            Coordinate::PLACEHOLDER_HEMISPHERE,
        ),
    };
    draw(canvas, field, &text);
    draw(canvas, hemisphere, &[indicator]);
}
