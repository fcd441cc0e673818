//! Display state encoding
//!
//! One visual state of the cube is three packed bytes, one per 74HC595
//! in the chain. The bit-to-wire mapping of each byte is fixed by the
//! chip's position in the chain (its "role") and never changes at
//! runtime; see [`table`] for the per-role pattern tables.

pub mod table;

pub use table::{index, lookup, GREEN_PATTERNS, LAYER_PATTERNS, RED_PATTERNS};

/// One packed shift-register output byte
pub type PatternByte = u8;

/// Number of chained shift registers
pub const CHIP_COUNT: usize = 3;

/// Fixed physical meaning of one chip's 8 output bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipRole {
    /// Chip 1: red anodes R1..R8, active high
    RedAnodes,
    /// Chip 2: green anodes G1..G7 plus the spare red column R9,
    /// active high
    GreenAnodes,
    /// Chip 3: ground layer selects GND1..GND3 (active low) plus the
    /// spare green columns G8/G9 (active high)
    LayerSelect,
}

/// Errors from pattern table lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// Index beyond the defined entries for the chip role
    ///
    /// This can only arise from a defective compiled-in animation
    /// program, never from runtime input.
    IndexOutOfRange,
}

/// One complete, atomic visual state of the cube
///
/// Holds the pattern byte for every chip in the chain. The image only
/// ever reaches the LEDs as a whole: the frame transmitter shifts all
/// three bytes out and latches them together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipImage {
    /// Chip 1 byte (red anodes)
    pub red: PatternByte,
    /// Chip 2 byte (green anodes + R9)
    pub green: PatternByte,
    /// Chip 3 byte (layer selects + G8/G9)
    pub layer: PatternByte,
}

impl ChipImage {
    /// Create an image from per-chip bytes
    pub const fn new(red: PatternByte, green: PatternByte, layer: PatternByte) -> Self {
        Self { red, green, layer }
    }

    /// Image with every LED off and every layer disconnected
    pub const fn blank() -> Self {
        Self::new(
            RED_PATTERNS[index::ALL_OFF as usize],
            GREEN_PATTERNS[index::ALL_OFF as usize],
            LAYER_PATTERNS[index::LAYERS_OFF as usize],
        )
    }

    /// Bytes in physical load order
    ///
    /// Serial shifting pushes earlier bytes further down the chain, so
    /// the chip farthest from the data input is loaded first: layer
    /// chip, then green, then red.
    pub const fn chain_order(&self) -> [PatternByte; CHIP_COUNT] {
        [self.layer, self.green, self.red]
    }
}
