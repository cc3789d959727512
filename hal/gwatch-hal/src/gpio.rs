//! GPIO abstractions
//!
//! Only task-driven outputs are needed here: pins whose level is changed
//! by the event system rather than by the CPU.

/// Logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

/// Action a GPIO task performs when triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskAction {
    /// Drive the pin high
    Set,
    /// Drive the pin low
    Clear,
    /// Invert the pin
    Toggle,
}

/// Hardware task channel bound to an output pin
pub trait GpioTask {
    /// Bind task `channel` to `pin` as an output starting at `initial`
    fn configure_task(&mut self, channel: u8, pin: u8, action: TaskAction, initial: Level);
}
