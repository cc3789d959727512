//! Time-of-day decomposition

use core::fmt;

const SECONDS_PER_DAY: u32 = 86_400;
const SECONDS_PER_HOUR: u32 = 3_600;
const SECONDS_PER_MINUTE: u32 = 60;

/// Wall-clock time within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// Hours (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
}

impl TimeOfDay {
    /// Decompose a seconds timestamp; whole days are discarded
    pub const fn from_timestamp(timestamp: u32) -> Self {
        Self {
            hours: ((timestamp % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u8,
            minutes: ((timestamp % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (timestamp % SECONDS_PER_MINUTE) as u8,
        }
    }
}

/// Formats as `HH:MM:SS`
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
