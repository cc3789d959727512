//! Driver abstraction traits
//!
//! These traits define the interface between application logic and the
//! driver implementations in `gwatch-drivers`.

pub mod sensor;

pub use sensor::{SampleError, VoltageSampler};
