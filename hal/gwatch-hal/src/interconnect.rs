//! Event interconnect abstractions
//!
//! Connects peripheral events to peripheral tasks so that one peripheral can
//! trigger another with no CPU involvement (PPI on nRF51).

/// Event source of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventSource {
    /// Compare match on a compare-timer channel
    TimerCompare {
        /// Compare channel
        channel: u8,
    },
}

/// Task endpoint of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskTarget {
    /// Output task of a GPIO task channel
    GpioOut {
        /// GPIO task channel
        channel: u8,
    },
}

/// One event-to-task connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Route {
    /// Interconnect channel carrying the route
    pub channel: u8,
    /// Triggering event
    pub event: EventSource,
    /// Triggered task
    pub task: TaskTarget,
}

/// Interconnect channel errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterconnectError {
    /// Channel is reserved (e.g. by the radio stack)
    Reserved,
    /// Channel number out of range
    InvalidChannel,
}

/// Event-to-task routing fabric
pub trait EventRouter {
    /// Assign a route to its channel
    fn assign(&mut self, route: Route) -> Result<(), InterconnectError>;

    /// Enable a previously assigned channel
    fn enable(&mut self, channel: u8) -> Result<(), InterconnectError>;
}
