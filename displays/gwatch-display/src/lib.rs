//! Sharp memory display support for the gwatch
//!
//! This crate provides:
//! - [`FrameBuffer`] kept in the panel's line-record wire format
//! - 8x8 font tables in both polarities and a text rasterizer ([`Canvas`])
//! - [`StatusOverlay`] for the clock, battery, connection, positioning and
//!   sampling fields
//! - [`SharpDisplay`], the transfer protocol over a non-blocking SPI bus
//! - [`VcomGenerator`], the hardware-timed EXTCOMIN toggle
//!
//! # Architecture
//!
//! Text is rendered into the frame buffer first and pushed to the panel
//! with an explicit flush. The VCOM signal runs without the CPU once
//! configured:
//!
//! ```text
//!  StatusOverlay ──► Canvas ──► FrameBuffer ──► SharpDisplay ──► SPI
//!
//!  RTC compare ──► interconnect ──► GPIO toggle ──► EXTCOMIN
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod font;
pub mod frame;
pub mod overlay;
pub mod render;
pub mod sharp;
pub mod vcom;

// Re-export key types
pub use frame::{FrameBuffer, LINES, LINE_DATA_LEN, RECORD_LEN};
pub use overlay::StatusOverlay;
pub use render::Canvas;
pub use sharp::SharpDisplay;
pub use vcom::{VcomError, VcomGenerator};
