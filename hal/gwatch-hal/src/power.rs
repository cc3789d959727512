//! Low-power waiting

/// Sleep until the next event or interrupt
///
/// Returns after any interrupt has run to completion. Callers re-check
/// their own condition in a loop; a return does not mean the condition
/// they wait for has changed.
pub trait EventWait {
    /// Suspend the core until an event arrives
    fn wait_for_event(&mut self);
}
