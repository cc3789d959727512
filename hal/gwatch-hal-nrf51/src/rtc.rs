//! RTC counter geometry
//!
//! RTC1 runs with prescaler 0 from LFCLK, so one tick is 1/32768 s. RTC0
//! belongs to the radio stack.

/// Counter width in bits
pub const COUNTER_BITS: u32 = 24;

/// Mask covering the counter
pub const COUNTER_MASK: u32 = (1 << COUNTER_BITS) - 1;

/// Compare channels on RTC1
pub const COMPARE_CHANNELS: u8 = 4;

/// `EVTENSET` / `INTENSET` bit for compare channel `n`
pub const fn compare_mask(channel: u8) -> u32 {
    1 << (16 + (channel as u32 & 0x3))
}

/// Add `ticks` to a counter value, wrapping at the counter width
pub const fn wrapping_add(counter: u32, ticks: u32) -> u32 {
    counter.wrapping_add(ticks) & COUNTER_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_mask() {
        assert_eq!(compare_mask(0), 1 << 16);
        assert_eq!(compare_mask(3), 1 << 19);
    }

    #[test]
    fn test_wrapping_add() {
        assert_eq!(wrapping_add(0, 1024), 1024);
        assert_eq!(wrapping_add(COUNTER_MASK, 1), 0);
        assert_eq!(wrapping_add(COUNTER_MASK - 100, 1024), 923);
    }
}
