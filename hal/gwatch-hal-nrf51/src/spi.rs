//! SPI master register encoding

use gwatch_hal::spi::{BitOrder, Phase, Polarity, SpiConfig};

use crate::EncodeError;

/// `CONFIG` bit positions
mod field {
    pub const ORDER_POS: u32 = 0;
    pub const CPHA_POS: u32 = 1;
    pub const CPOL_POS: u32 = 2;
}

/// Supported `FREQUENCY` register values, slowest first
const FREQUENCIES: &[(u32, u32)] = &[
    (125_000, 0x0200_0000),
    (250_000, 0x0400_0000),
    (500_000, 0x0800_0000),
    (1_000_000, 0x1000_0000),
    (2_000_000, 0x2000_0000),
    (4_000_000, 0x4000_0000),
    (8_000_000, 0x8000_0000),
];

/// Encode mode and bit order into the `CONFIG` register word
pub fn config_word(config: &SpiConfig) -> u32 {
    let (polarity, phase): (Polarity, Phase) = config.mode.into();

    let order = match config.bit_order {
        BitOrder::MsbFirst => 0,
        BitOrder::LsbFirst => 1,
    };
    let cpha = match phase {
        Phase::CaptureOnFirstTransition => 0,
        Phase::CaptureOnSecondTransition => 1,
    };
    // CPOL: ActiveHigh (idle low) = 0, ActiveLow (idle high) = 1
    let cpol = match polarity {
        Polarity::IdleLow => 0,
        Polarity::IdleHigh => 1,
    };

    (order << field::ORDER_POS) | (cpha << field::CPHA_POS) | (cpol << field::CPOL_POS)
}

/// Pick the fastest supported clock not above the requested one
pub fn frequency_word(hz: u32) -> Result<u32, EncodeError> {
    FREQUENCIES
        .iter()
        .rev()
        .find(|(rate, _)| *rate <= hz)
        .map(|(_, word)| *word)
        .ok_or(EncodeError::FrequencyTooLow)
}
