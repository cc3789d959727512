//! Real-time clock abstractions
//!
//! The RTC runs from the 32.768 kHz low-frequency clock. All durations at
//! this layer are expressed in RTC ticks.

/// RTC tick rate in Hz
pub const TICKS_PER_SECOND: u32 = 32_768;

/// Convert milliseconds to RTC ticks (rounded down)
pub const fn ms_to_ticks(ms: u32) -> u32 {
    ((ms as u64 * TICKS_PER_SECOND as u64) / 1000) as u32
}

/// One-shot timeout registration
///
/// Expiry is delivered through the RTC interrupt, which the firmware
/// forwards to the driver that armed the timeout.
pub trait TimeoutTimer {
    /// Arm the timeout to expire `ticks` from now
    fn arm(&mut self, ticks: u32);

    /// Cancel a pending timeout
    ///
    /// Must be idempotent: both the completion interrupt and the expiry
    /// path may cancel the same registration.
    fn cancel(&mut self);
}

impl<T: TimeoutTimer + ?Sized> TimeoutTimer for &mut T {
    fn arm(&mut self, ticks: u32) {
        (**self).arm(ticks)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}
