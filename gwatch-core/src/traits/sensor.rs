//! Voltage sampler trait

/// Errors that can occur while sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// Conversion did not finish within its budget
    ///
    /// Not retried; the caller keeps whatever value it had before.
    Timeout,
    /// Another conversion is still in flight
    Busy,
}

/// Trait for single-shot voltage samplers
pub trait VoltageSampler {
    /// Run one conversion and return the raw 8-bit result
    ///
    /// Blocks (in a low-power state) for at most `timeout_ms`.
    fn sample(&mut self, timeout_ms: u32) -> Result<u8, SampleError>;
}
