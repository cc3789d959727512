//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in gwatch-core on top of the gwatch-hal peripheral traits:
//!
//! - Supply-voltage sampler (single-shot ADC conversion with timeout)
//! - Battery monitor (charge estimate that survives failed samples)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod battery;
pub mod sensor;

pub use battery::BatteryMonitor;
pub use sensor::{ConversionSignal, ConversionState, SupplySampler};
