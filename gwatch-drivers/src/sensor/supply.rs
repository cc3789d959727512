//! Supply-voltage sampler
//!
//! One conversion of the internal supply-sense input (VDD / 3 against the
//! 1.2 V band gap, 8 bits), bounded by an RTC timeout. The requester sleeps
//! with `wfe` while two interrupt handlers race to finish the conversion:
//!
//! ```text
//!            begin()               on_conversion_end()
//!   Idle ─────────────► Converting ──────────────────► Completed
//!    ▲                      │                              │
//!    │                      │ on_timeout()                 │
//!    │                      ▼                              │
//!    └──── finish() ──── TimedOut ◄────────────────────────┘
//!                                       finish()
//! ```
//!
//! The first handler to leave `Converting` wins; the loser's transition is
//! dropped. Both handlers are constant time and never block.

use portable_atomic::{AtomicU8, Ordering};

use gwatch_core::traits::{SampleError, VoltageSampler};
use gwatch_hal::rtc::ms_to_ticks;
use gwatch_hal::{Adc, AdcConfig, EventWait, TimeoutTimer};

/// Conversion lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ConversionState {
    /// No conversion requested
    Idle = 0,
    /// Conversion started, neither interrupt has fired
    Converting = 1,
    /// Completion interrupt won; result is valid
    Completed = 2,
    /// Timeout interrupt won; no result
    TimedOut = 3,
}

impl ConversionState {
    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Converting,
            2 => Self::Completed,
            3 => Self::TimedOut,
            _ => Self::Idle,
        }
    }
}

/// State shared between the requester and the two interrupt handlers
///
/// Lives in a `static` in the firmware; the ADC and RTC handlers call
/// [`on_conversion_end`](Self::on_conversion_end) and
/// [`on_timeout`](Self::on_timeout) on it.
pub struct ConversionSignal {
    state: AtomicU8,
    result: AtomicU8,
}

impl ConversionSignal {
    /// Create an idle signal
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(ConversionState::Idle as u8),
            result: AtomicU8::new(0),
        }
    }

    /// Current state
    pub fn state(&self) -> ConversionState {
        ConversionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Claim the signal for a new conversion
    fn begin(&self) -> Result<(), SampleError> {
        self.state
            .compare_exchange(
                ConversionState::Idle as u8,
                ConversionState::Converting as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(|_| ())
            .map_err(|_| SampleError::Busy)
    }

    /// ADC end-of-conversion handler
    ///
    /// Cancels the pending timeout and publishes `sample`. Returns `false`
    /// when the timeout already won, in which case nothing is published.
    pub fn on_conversion_end<T: TimeoutTimer>(&self, sample: u8, timer: &mut T) -> bool {
        if self.state() != ConversionState::Converting {
            return false;
        }

        timer.cancel();
        self.result.store(sample, Ordering::Relaxed);
        self.state
            .compare_exchange(
                ConversionState::Converting as u8,
                ConversionState::Completed as u8,
                Ordering::Release,
                Ordering::Relaxed,
            )
            .is_ok()
    }

    /// RTC timeout handler
    ///
    /// Returns `false` when the conversion had already completed.
    pub fn on_timeout(&self) -> bool {
        self.state
            .compare_exchange(
                ConversionState::Converting as u8,
                ConversionState::TimedOut as u8,
                Ordering::Release,
                Ordering::Relaxed,
            )
            .is_ok()
    }

    fn result(&self) -> u8 {
        self.result.load(Ordering::Relaxed)
    }

    fn finish(&self) {
        self.state
            .store(ConversionState::Idle as u8, Ordering::Release);
    }
}

impl Default for ConversionSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Battery supply sampler
///
/// # Type Parameters
/// - `A`: ADC peripheral
/// - `T`: timeout registration on the RTC
/// - `W`: low-power wait primitive
pub struct SupplySampler<'s, A, T, W> {
    adc: A,
    timer: T,
    wait: W,
    signal: &'s ConversionSignal,
    adc_config: AdcConfig,
}

impl<'s, A, T, W> SupplySampler<'s, A, T, W>
where
    A: Adc,
    T: TimeoutTimer,
    W: EventWait,
{
    /// Create a sampler using the supply-sense configuration
    pub fn new(adc: A, timer: T, wait: W, signal: &'s ConversionSignal) -> Self {
        Self {
            adc,
            timer,
            wait,
            signal,
            adc_config: AdcConfig::SUPPLY_VOLTAGE,
        }
    }

    /// Get the ADC
    pub fn adc(&self) -> &A {
        &self.adc
    }

    /// Release the peripherals
    pub fn release(self) -> (A, T, W) {
        (self.adc, self.timer, self.wait)
    }
}

impl<A, T, W> VoltageSampler for SupplySampler<'_, A, T, W>
where
    A: Adc,
    T: TimeoutTimer,
    W: EventWait,
{
    fn sample(&mut self, timeout_ms: u32) -> Result<u8, SampleError> {
        self.signal.begin()?;

        self.adc.configure(&self.adc_config);
        self.adc.enable_end_interrupt();
        self.adc.set_enabled(true);
        self.timer.arm(ms_to_ticks(timeout_ms));
        self.adc.start();

        let outcome = loop {
            match self.signal.state() {
                ConversionState::Converting => self.wait.wait_for_event(),
                ConversionState::Completed => break Ok(self.signal.result()),
                ConversionState::TimedOut | ConversionState::Idle => {
                    self.timer.cancel();
                    break Err(SampleError::Timeout);
                }
            }
        };

        self.signal.finish();
        self.adc.set_enabled(false);

        if outcome.is_err() {
            warn!("Supply sample timed out after {} ms", timeout_ms);
        }
        outcome
    }
}
