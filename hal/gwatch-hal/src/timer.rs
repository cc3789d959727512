//! Compare timer abstractions

/// Free-running counter with compare channels
///
/// A compare match raises an event that can drive a hardware task through
/// the event interconnect, and optionally an interrupt.
pub trait CompareTimer {
    /// Width of the counter in bits (24 on the nRF51 RTC)
    const COUNTER_BITS: u32;

    /// Current counter value
    fn counter(&self) -> u32;

    /// Program a compare channel
    fn set_compare(&mut self, channel: u8, value: u32);

    /// Route compare matches on `channel` to the event system
    fn enable_compare_event(&mut self, channel: u8);

    /// Raise an interrupt on compare matches on `channel`
    fn enable_compare_interrupt(&mut self, channel: u8);

    /// Mask covering the valid counter bits
    fn counter_mask(&self) -> u32 {
        u32::MAX
            .checked_shr(32 - Self::COUNTER_BITS.min(32))
            .unwrap_or(0)
    }
}
