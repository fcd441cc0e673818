//! Two-wire bus masters

pub mod bitbang;

pub use bitbang::{BitbangTwi, HALF_PERIOD_US};
