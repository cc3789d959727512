//! Radio link status as seen by the display

/// Connection handle published by the radio stack
///
/// The stack reports [`ConnectionHandle::INVALID`] while no central is
/// connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectionHandle(pub u16);

impl ConnectionHandle {
    /// Sentinel for "not connected"
    pub const INVALID: Self = Self(0xFFFF);

    /// Check whether the handle refers to a live connection
    pub const fn is_connected(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl Default for ConnectionHandle {
    fn default() -> Self {
        Self::INVALID
    }
}
