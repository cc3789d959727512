//! Wait-for-event on Cortex-M0

use gwatch_hal::EventWait;

/// Sleeps with `wfe` until the next event
///
/// With SEVONPEND clear, only enabled interrupts wake the core, which is
/// what the sampler's wait loop relies on.
#[derive(Debug, Default, Clone, Copy)]
pub struct Wfe;

impl EventWait for Wfe {
    fn wait_for_event(&mut self) {
        cortex_m::asm::wfe();
    }
}
