//! GPIOTE task configuration for nRF51
//!
//! A GPIOTE channel in task mode owns its pin: triggering `TASKS_OUT[n]`
//! applies the configured polarity action without CPU involvement.

use gwatch_hal::gpio::{Level, TaskAction};

use crate::EncodeError;

/// Number of GPIO pins (P0.00 - P0.31)
pub const PIN_COUNT: u8 = 32;

/// Number of GPIOTE channels
pub const GPIOTE_CHANNELS: u8 = 4;

mod field {
    pub const MODE_POS: u32 = 0;
    pub const PSEL_POS: u32 = 8;
    pub const POLARITY_POS: u32 = 16;
    pub const OUTINIT_POS: u32 = 20;

    pub const MODE_TASK: u32 = 3;

    pub const POLARITY_LO_TO_HI: u32 = 1;
    pub const POLARITY_HI_TO_LO: u32 = 2;
    pub const POLARITY_TOGGLE: u32 = 3;
}

/// Encode a task-mode `CONFIG[n]` word
pub fn task_config_word(pin: u8, action: TaskAction, initial: Level) -> Result<u32, EncodeError> {
    if pin >= PIN_COUNT {
        return Err(EncodeError::InvalidChannel);
    }

    let polarity = match action {
        TaskAction::Set => field::POLARITY_LO_TO_HI,
        TaskAction::Clear => field::POLARITY_HI_TO_LO,
        TaskAction::Toggle => field::POLARITY_TOGGLE,
    };
    let outinit = match initial {
        Level::Low => 0,
        Level::High => 1,
    };

    Ok((field::MODE_TASK << field::MODE_POS)
        | ((pin as u32) << field::PSEL_POS)
        | (polarity << field::POLARITY_POS)
        | (outinit << field::OUTINIT_POS))
}

/// Check a GPIOTE channel number
pub fn check_channel(channel: u8) -> Result<(), EncodeError> {
    if channel < GPIOTE_CHANNELS {
        Ok(())
    } else {
        Err(EncodeError::InvalidChannel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_task_starting_low() {
        let word = task_config_word(21, TaskAction::Toggle, Level::Low).unwrap();
        assert_eq!(word, 3 | (21 << 8) | (3 << 16));
    }

    #[test]
    fn test_set_task_starting_high() {
        let word = task_config_word(0, TaskAction::Set, Level::High).unwrap();
        assert_eq!(word, 3 | (1 << 16) | (1 << 20));
    }

    #[test]
    fn test_invalid_pin() {
        assert_eq!(
            task_config_word(32, TaskAction::Toggle, Level::Low),
            Err(EncodeError::InvalidChannel)
        );
    }

    #[test]
    fn test_channel_range() {
        assert!(check_channel(0).is_ok());
        assert!(check_channel(3).is_ok());
        assert!(check_channel(4).is_err());
    }
}
