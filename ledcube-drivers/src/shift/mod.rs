//! Shift register output drivers

pub mod hc595;

pub use hc595::{Hc595Chain, SETTLE_US};
