//! Peripheral configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::layout::DisplayLayout;

/// Supply-voltage sampler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Conversion budget in milliseconds
    pub timeout_ms: u32,
}

impl SamplerConfig {
    /// Shipped configuration
    pub const DEFAULT: Self = Self { timeout_ms: 100 };
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// VCOM (EXTCOMIN) signal configuration
///
/// The pin is toggled by a GPIO task driven from an RTC compare event, so
/// the panel keeps receiving its inversion signal however rarely the frame
/// content changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VcomConfig {
    /// Square-wave frequency on EXTCOMIN in Hz
    pub frequency_hz: u16,
    /// EXTCOMIN GPIO pin
    pub pin: u8,
    /// RTC compare channel generating the toggle events
    pub compare_channel: u8,
    /// GPIO task channel owning the pin
    pub gpio_task_channel: u8,
    /// Interconnect channel routing compare event to toggle task
    pub interconnect_channel: u8,
}

impl VcomConfig {
    /// Shipped configuration
    pub const DEFAULT: Self = Self {
        frequency_hz: 16,
        pin: 21,
        compare_channel: 3,
        gpio_task_channel: 0,
        interconnect_channel: 0,
    };
}

impl Default for VcomConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Memory display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// SPI clock in Hz (panel accepts up to 1 MHz)
    pub spi_frequency_hz: u32,
    /// Delay after a clear-screen command before the first write
    pub clear_settle_ms: u32,
    /// Overlay positions
    pub layout: DisplayLayout,
}

impl DisplayConfig {
    /// Shipped configuration
    pub const DEFAULT: Self = Self {
        spi_frequency_hz: 1_000_000,
        clear_settle_ms: 5,
        layout: DisplayLayout::DEFAULT,
    };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete peripheral configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchConfig {
    /// Supply sampler
    pub sampler: SamplerConfig,
    /// Display
    pub display: DisplayConfig,
    /// VCOM generator
    pub vcom: VcomConfig,
}
