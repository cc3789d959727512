//! gwatch Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the display and
//! sampler drivers are written against. Chip-specific crates (currently
//! `gwatch-hal-nrf51`) encode the typed configurations into registers, and
//! the firmware image provides the trait implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  gwatch-display, gwatch-drivers         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  gwatch-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  gwatch-hal-nrf51 (register encodings)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`adc::Adc`] - Single-shot analog conversion
//! - [`spi::SpiTransfer`] - Non-blocking SPI transfer with chip-select modes
//! - [`rtc::TimeoutTimer`] - Cancellable timeout
//! - [`power::EventWait`] - Low-power wait for the next interrupt
//! - [`timer::CompareTimer`] - Free-running counter with compare channels
//! - [`gpio::GpioTask`] - Pin toggled by a hardware task
//! - [`interconnect::EventRouter`] - Event-to-task routing fabric

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod interconnect;
pub mod power;
pub mod rtc;
pub mod spi;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use adc::{Adc, AdcConfig};
pub use gpio::{GpioTask, Level};
pub use interconnect::{EventRouter, Route};
pub use power::EventWait;
pub use rtc::TimeoutTimer;
pub use spi::{ChipSelect, SpiTransfer};
pub use timer::CompareTimer;
