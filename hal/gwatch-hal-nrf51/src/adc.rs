//! ADC `CONFIG` register encoding
//!
//! Layout (nRF51 reference manual, ADC chapter):
//! - RES `[1:0]`
//! - INPSEL `[4:2]`
//! - REFSEL `[6:5]`
//! - PSEL `[15:8]` (one-hot analog input)
//! - EXTREFSEL `[17:16]`

use gwatch_hal::adc::{AdcConfig, Channel, InputScaling, Reference, Resolution};

use crate::EncodeError;

/// Register field positions and values
#[allow(dead_code)]
pub mod field {
    pub const RES_POS: u32 = 0;
    pub const INPSEL_POS: u32 = 2;
    pub const REFSEL_POS: u32 = 5;
    pub const PSEL_POS: u32 = 8;
    pub const EXTREFSEL_POS: u32 = 16;

    pub const RES_8BIT: u32 = 0;
    pub const RES_9BIT: u32 = 1;
    pub const RES_10BIT: u32 = 2;

    pub const INPSEL_AIN_NO_PRESCALING: u32 = 0;
    pub const INPSEL_AIN_TWO_THIRDS: u32 = 1;
    pub const INPSEL_AIN_ONE_THIRD: u32 = 2;
    pub const INPSEL_SUPPLY_TWO_THIRDS: u32 = 5;
    pub const INPSEL_SUPPLY_ONE_THIRD: u32 = 6;

    pub const REFSEL_VBG: u32 = 0;
    pub const REFSEL_EXTERNAL: u32 = 1;
    pub const REFSEL_SUPPLY_ONE_HALF: u32 = 2;
    pub const REFSEL_SUPPLY_ONE_THIRD: u32 = 3;

    pub const PSEL_DISABLED: u32 = 0;

    pub const EXTREFSEL_NONE: u32 = 0;
    pub const EXTREFSEL_AREF0: u32 = 1;
}

/// Number of external analog inputs
pub const ANALOG_INPUTS: u8 = 8;

/// Band-gap reference in millivolts
pub const VBG_MV: u32 = 1200;

/// Encode a typed configuration into the `CONFIG` register word
pub fn config_word(config: &AdcConfig) -> Result<u32, EncodeError> {
    let res = match config.resolution {
        Resolution::Bits8 => field::RES_8BIT,
        Resolution::Bits9 => field::RES_9BIT,
        Resolution::Bits10 => field::RES_10BIT,
    };

    let (inpsel, psel) = match config.channel {
        Channel::Pin(ain) => {
            if ain >= ANALOG_INPUTS {
                return Err(EncodeError::InvalidChannel);
            }
            let inpsel = match config.scaling {
                InputScaling::Unscaled => field::INPSEL_AIN_NO_PRESCALING,
                InputScaling::TwoThirds => field::INPSEL_AIN_TWO_THIRDS,
                InputScaling::OneThird => field::INPSEL_AIN_ONE_THIRD,
            };
            (inpsel, 1u32 << ain)
        }
        // VDD is internally routed; only the prescaled supply inputs exist
        Channel::SupplySense => {
            let inpsel = match config.scaling {
                InputScaling::Unscaled => return Err(EncodeError::UnsupportedScaling),
                InputScaling::TwoThirds => field::INPSEL_SUPPLY_TWO_THIRDS,
                InputScaling::OneThird => field::INPSEL_SUPPLY_ONE_THIRD,
            };
            (inpsel, field::PSEL_DISABLED)
        }
    };

    let (refsel, extrefsel) = match config.reference {
        Reference::BandGap => (field::REFSEL_VBG, field::EXTREFSEL_NONE),
        Reference::External => (field::REFSEL_EXTERNAL, field::EXTREFSEL_AREF0),
        Reference::SupplyHalf => (field::REFSEL_SUPPLY_ONE_HALF, field::EXTREFSEL_NONE),
        Reference::SupplyThird => (field::REFSEL_SUPPLY_ONE_THIRD, field::EXTREFSEL_NONE),
    };

    Ok((res << field::RES_POS)
        | (inpsel << field::INPSEL_POS)
        | (refsel << field::REFSEL_POS)
        | (psel << field::PSEL_POS)
        | (extrefsel << field::EXTREFSEL_POS))
}
