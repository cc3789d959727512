//! Voltage sensors

pub mod supply;

pub use supply::{ConversionSignal, ConversionState, SupplySampler};
