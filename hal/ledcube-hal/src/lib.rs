//! LED Cube Hardware Abstraction Layer
//!
//! Digital I/O and delays come straight from `embedded-hal`; this
//! crate defines the one bus abstraction that has no `embedded-hal`
//! equivalent: raw two-wire master primitives with an explicit
//! start/stop surface. The drivers implement [`twi::TwiBus`] for real
//! pins; host tests implement it with scripted mocks.

#![no_std]
#![deny(unsafe_code)]

pub mod twi;

// Re-export key items at crate root for convenience
pub use twi::{Ack, TwiBus, TwiError};
