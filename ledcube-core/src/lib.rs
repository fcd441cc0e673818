//! Board-agnostic core logic for the LED cube firmware
//!
//! This crate contains all cube logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware abstraction traits (frame sink, meteo sensor, report sink)
//! - Display pattern tables and the per-chip image encoding
//! - The two compiled-in animation programs and the program selector
//! - The sensor poll state machine

#![no_std]
#![deny(unsafe_code)]

pub mod animation;
pub mod pattern;
pub mod sensor;
pub mod traits;
