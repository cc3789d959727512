//! nRF51-specific HAL for the gwatch drivers
//!
//! This crate translates the typed configurations of `gwatch-hal` into
//! nRF51 register words, and provides the few chip-level primitives the
//! drivers need directly:
//!
//! - ADC `CONFIG` encoding ([`adc`])
//! - SPI `CONFIG` / `FREQUENCY` encoding ([`spi`])
//! - GPIOTE `CONFIG` encoding ([`gpio`])
//! - PPI channel checks against the radio stack's reservation ([`ppi`])
//! - RTC counter geometry ([`rtc`])
//! - `wfe`-based [`power::Wfe`] event wait
//!
//! # Usage
//!
//! The firmware owns the register blocks (through the PAC or the radio
//! stack's API) and implements the `gwatch-hal` traits by writing the words
//! produced here.

#![cfg_attr(not(test), no_std)]

pub mod adc;
pub mod gpio;
pub mod power;
pub mod ppi;
pub mod rtc;
pub mod spi;

// Re-export shared types from gwatch-hal
pub use gwatch_hal::{AdcConfig, Level};

/// Configuration that cannot be expressed on this chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Input scaling not available for the selected channel
    UnsupportedScaling,
    /// Analog input, GPIO pin or channel number out of range
    InvalidChannel,
    /// Requested SPI clock below the slowest supported rate
    FrequencyTooLow,
}
