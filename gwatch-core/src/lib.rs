//! Board-agnostic core types for the gwatch drivers
//!
//! This crate contains everything the drivers need that does not depend on
//! the hardware:
//!
//! - Collaborator records consumed by the display (positioning fix,
//!   connection handle)
//! - Time-of-day decomposition for the clock overlay
//! - Battery charge estimation from supply-voltage samples
//! - Configuration type definitions
//! - Sampler trait implemented by `gwatch-drivers`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod battery;
pub mod config;
pub mod link;
pub mod position;
pub mod time;
pub mod traits;

pub use link::ConnectionHandle;
pub use position::{Coordinate, FixRecord};
pub use time::TimeOfDay;
