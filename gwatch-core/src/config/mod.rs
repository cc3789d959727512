//! Configuration types
//!
//! Board-agnostic configuration structures. Everything is `Copy` and has a
//! `const` default matching the shipped hardware, so the firmware can build
//! its configuration in a `static` without parsing anything.

pub mod layout;
pub mod types;

pub use layout::*;
pub use types::*;
