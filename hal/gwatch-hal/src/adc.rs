//! ADC abstractions
//!
//! The ADC is configured from a typed [`AdcConfig`] instead of sequential
//! bitfield writes, so the configuration can be checked on the host and
//! encoded into registers by the chip crate.

/// Conversion resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 8-bit result (0-255)
    Bits8,
    /// 9-bit result (0-511)
    Bits9,
    /// 10-bit result (0-1023)
    Bits10,
}

/// Input scaling applied before the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputScaling {
    /// Input fed through unscaled
    Unscaled,
    /// Input scaled to 2/3
    TwoThirds,
    /// Input scaled to 1/3
    OneThird,
}

/// Conversion reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reference {
    /// Internal band-gap reference (1.2 V on nRF51)
    BandGap,
    /// External reference pin
    External,
    /// Supply rail divided by two
    SupplyHalf,
    /// Supply rail divided by three
    SupplyThird,
}

/// Analog input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// External analog pin AINx (0-7)
    Pin(u8),
    /// Internal supply-sense input, no external pin used
    SupplySense,
}

/// Complete ADC configuration, applied once per conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcConfig {
    /// Result width
    pub resolution: Resolution,
    /// Input prescaler
    pub scaling: InputScaling,
    /// Reference source
    pub reference: Reference,
    /// Selected input
    pub channel: Channel,
}

impl AdcConfig {
    /// Supply-voltage measurement: 8 bits, VDD/3 against the band gap.
    ///
    /// The converter accepts at most 1.2 V after prescaling, so the rail has
    /// to be divided by three. No external reference or pin is needed.
    pub const SUPPLY_VOLTAGE: Self = Self {
        resolution: Resolution::Bits8,
        scaling: InputScaling::OneThird,
        reference: Reference::BandGap,
        channel: Channel::SupplySense,
    };
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self::SUPPLY_VOLTAGE
    }
}

/// Single-shot ADC peripheral
///
/// The conversion-end interrupt is serviced outside this trait: the
/// interrupt handler reads the result register and reports it to the
/// waiting driver.
pub trait Adc {
    /// Apply a configuration (peripheral should be disabled)
    fn configure(&mut self, config: &AdcConfig);

    /// Enable the conversion-end interrupt
    fn enable_end_interrupt(&mut self);

    /// Power the peripheral up or down
    fn set_enabled(&mut self, enabled: bool);

    /// Trigger a conversion
    fn start(&mut self);
}
