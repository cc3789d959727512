//! Screen layout of the status overlays
//!
//! The panel is 96 x 96 pixels, addressed here as 96 pixel lines by 12
//! glyph columns. A region is the top-left corner of a text field: the pixel
//! line its first glyph row lands on and the glyph column it starts at.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pixel lines on the panel
pub const PANEL_LINES: u8 = 96;

/// 8-pixel glyph columns per line
pub const TEXT_COLUMNS: u8 = 12;

/// Glyph height in pixel lines
pub const GLYPH_HEIGHT: u8 = 8;

/// Width of each overlay field in glyphs
pub mod width {
    pub const CONNECTION: u8 = 1;
    pub const POSITIONING_POWER: u8 = 3;
    pub const BATTERY: u8 = 4;
    pub const CLOCK: u8 = 8;
    pub const SAMPLING_LABEL: u8 = 8;
    pub const SAMPLING_STATE: u8 = 3;
    pub const LATITUDE_CAPTION: u8 = 9;
    pub const LONGITUDE_CAPTION: u8 = 10;
    pub const COORDINATE: u8 = 12;
    pub const HEMISPHERE: u8 = 1;
}

/// Top-left corner of a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// First pixel line (0-based)
    pub line: u8,
    /// First glyph column (0-based, excludes the line address byte)
    pub column: u8,
}

impl Region {
    /// Create a region
    pub const fn new(line: u8, column: u8) -> Self {
        Self { line, column }
    }

    /// Check that a `width`-glyph field fits on the panel
    pub const fn fits(&self, width: u8) -> bool {
        self.line as u16 + GLYPH_HEIGHT as u16 <= PANEL_LINES as u16
            && self.column as u16 + width as u16 <= TEXT_COLUMNS as u16
    }
}

/// Layout validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// A field runs past the bottom or right edge of the panel
    OutOfBounds {
        /// First pixel line of the offending field
        line: u8,
        /// First glyph column of the offending field
        column: u8,
    },
}

/// Positions of every overlay field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayLayout {
    /// Radio connection marker (`B`)
    pub connection: Region,
    /// Positioning module power marker (`GPS`)
    pub positioning_power: Region,
    /// Battery percentage (`100%`)
    pub battery: Region,
    /// Clock (`HH:MM:SS`)
    pub clock: Region,
    /// Static `SAMPLING` caption
    pub sampling_label: Region,
    /// Sampling state (` ON` / `OFF`)
    pub sampling_state: Region,
    /// `LATITUDE:` caption
    pub latitude_caption: Region,
    /// Latitude field
    pub latitude: Region,
    /// Latitude hemisphere
    pub latitude_hemisphere: Region,
    /// `LONGITUDE:` caption
    pub longitude_caption: Region,
    /// Longitude field
    pub longitude: Region,
    /// Longitude hemisphere
    pub longitude_hemisphere: Region,
}

impl DisplayLayout {
    /// Shipped layout
    pub const DEFAULT: Self = Self {
        connection: Region::new(1, 0),
        positioning_power: Region::new(1, 4),
        battery: Region::new(1, 8),
        clock: Region::new(12, 2),
        sampling_label: Region::new(22, 0),
        sampling_state: Region::new(22, 9),
        latitude_caption: Region::new(34, 0),
        latitude: Region::new(42, 0),
        latitude_hemisphere: Region::new(50, 11),
        longitude_caption: Region::new(60, 0),
        longitude: Region::new(68, 0),
        longitude_hemisphere: Region::new(76, 11),
    };

    /// Check that every field fits on the panel
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            (self.connection, width::CONNECTION),
            (self.positioning_power, width::POSITIONING_POWER),
            (self.battery, width::BATTERY),
            (self.clock, width::CLOCK),
            (self.sampling_label, width::SAMPLING_LABEL),
            (self.sampling_state, width::SAMPLING_STATE),
            (self.latitude_caption, width::LATITUDE_CAPTION),
            (self.latitude, width::COORDINATE),
            (self.latitude_hemisphere, width::HEMISPHERE),
            (self.longitude_caption, width::LONGITUDE_CAPTION),
            (self.longitude, width::COORDINATE),
            (self.longitude_hemisphere, width::HEMISPHERE),
        ];

        for (region, width) in fields {
            if !region.fits(width) {
                return Err(LayoutError::OutOfBounds {
                    line: region.line,
                    column: region.column,
                });
            }
        }
        Ok(())
    }
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
