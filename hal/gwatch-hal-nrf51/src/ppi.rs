//! PPI channel bookkeeping
//!
//! With the S110 radio stack enabled, PPI is accessed through the stack's
//! API and channels 8-15 are reserved for the stack.

use core::ops::Range;

use gwatch_hal::interconnect::InterconnectError;

/// Channels available to the application
pub const APP_CHANNELS: Range<u8> = 0..8;

/// Channels reserved by the radio stack
pub const STACK_CHANNELS: Range<u8> = 8..16;

/// Check that `channel` may be assigned by the application
pub fn check_app_channel(channel: u8) -> Result<(), InterconnectError> {
    if APP_CHANNELS.contains(&channel) {
        Ok(())
    } else if STACK_CHANNELS.contains(&channel) {
        Err(InterconnectError::Reserved)
    } else {
        Err(InterconnectError::InvalidChannel)
    }
}

/// `CHENSET` mask enabling a single channel
pub const fn enable_mask(channel: u8) -> u32 {
    1 << (channel as u32 & 0x1F)
}
