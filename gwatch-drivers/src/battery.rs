//! Battery monitor
//!
//! Turns supply samples into a charge percentage. A failed sample leaves
//! the last good percentage in place.

use gwatch_core::battery::percent_from_sample;
use gwatch_core::config::SamplerConfig;
use gwatch_core::traits::{SampleError, VoltageSampler};

/// Battery charge tracker
pub struct BatteryMonitor<S> {
    sampler: S,
    config: SamplerConfig,
    level: Option<u8>,
}

impl<S: VoltageSampler> BatteryMonitor<S> {
    /// Create a monitor with no reading yet
    pub fn new(sampler: S, config: SamplerConfig) -> Self {
        Self {
            sampler,
            config,
            level: None,
        }
    }

    /// Take a sample and update the charge estimate
    ///
    /// Returns the new percentage. On error the previous estimate is kept.
    pub fn update(&mut self) -> Result<u8, SampleError> {
        let sample = self.sampler.sample(self.config.timeout_ms)?;
        let percent = percent_from_sample(sample);

        if self.level != Some(percent) {
            debug!("Battery {}% (sample {})", percent, sample);
        }
        self.level = Some(percent);
        Ok(percent)
    }

    /// Last good charge estimate, if any sample has succeeded
    pub fn level(&self) -> Option<u8> {
        self.level
    }

    /// Get the sampler
    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }
}
