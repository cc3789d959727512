//! Positioning fix record
//!
//! Mirrors the fields of the last GGA sentence the positioning subsystem
//! parsed. Coordinate parts are kept as the ASCII digits received so the
//! display can copy them verbatim.

/// Width of a rendered coordinate field (`DDD*MM.FFFF'`)
pub const COORDINATE_FIELD_LEN: usize = 12;

/// One latitude or longitude reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coordinate {
    /// Whole degrees, ASCII digits
    pub degrees: [u8; 3],
    /// Whole minutes, ASCII digits
    pub minutes: [u8; 2],
    /// Fractional minutes, ASCII digits
    pub minutes_fraction: [u8; 4],
    /// Hemisphere indicator (`N`, `S`, `E`, `W`)
    pub hemisphere: u8,
}

impl Coordinate {
    /// Field shown when no fix is available
    pub const PLACEHOLDER_FIELD: [u8; COORDINATE_FIELD_LEN] = *b"XXX*XX.XXXX'";

    /// Hemisphere shown when no fix is available
    pub const PLACEHOLDER_HEMISPHERE: u8 = b'X';

    /// Render as `DDD*MM.FFFF'`
    pub fn field(&self) -> [u8; COORDINATE_FIELD_LEN] {
        let mut text = Self::PLACEHOLDER_FIELD;
        text[0..3].copy_from_slice(&self.degrees);
        text[4..6].copy_from_slice(&self.minutes);
        text[7..11].copy_from_slice(&self.minutes_fraction);
        text
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self {
            degrees: *b"000",
            minutes: *b"00",
            minutes_fraction: *b"0000",
            hemisphere: Self::PLACEHOLDER_HEMISPHERE,
        }
    }
}

/// Last reported fix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixRecord {
    /// GGA fix quality indicator (ASCII digit, or 0 before the first sentence)
    pub quality: u8,
    /// Latitude
    pub latitude: Coordinate,
    /// Longitude
    pub longitude: Coordinate,
}

impl FixRecord {
    /// Check whether the record carries a valid position
    pub const fn has_fix(&self) -> bool {
        self.quality != 0 && self.quality != b'0'
    }
}
