//! Animation steps, programs and the temperature-based selector
//!
//! An animation is a fixed ordered list of steps; each step names one
//! pattern index per chip plus a hold duration. Programs are constant
//! data, played front to back exactly once per run; callers loop
//! externally for repetition.

pub mod programs;
pub mod selector;

pub use programs::{program, ProgramId, LAYER_SWEEP, SIDE_SWEEP};
pub use selector::{select_program, WARM_THRESHOLD_C};

use crate::pattern::{lookup, ChipImage, ChipRole, PatternError};

/// One animation step: per-chip pattern indices plus a hold duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationStep {
    /// Pattern index into the red anode table
    pub red: u8,
    /// Pattern index into the green anode table
    pub green: u8,
    /// Pattern index into the layer select table
    pub layer: u8,
    /// Time the frame stays displayed before the next step
    pub hold_ms: u16,
}

impl AnimationStep {
    /// Create a step
    pub const fn new(red: u8, green: u8, layer: u8, hold_ms: u16) -> Self {
        Self {
            red,
            green,
            layer,
            hold_ms,
        }
    }

    /// Resolve the step's indices through the pattern tables
    pub fn resolve(&self) -> Result<ChipImage, PatternError> {
        Ok(ChipImage::new(
            lookup(ChipRole::RedAnodes, self.red)?,
            lookup(ChipRole::GreenAnodes, self.green)?,
            lookup(ChipRole::LayerSelect, self.layer)?,
        ))
    }
}

/// Ordered, finite, repeatable sequence of animation steps
///
/// Constant data; playback always starts at step 0 and is not
/// restartable mid-step.
#[derive(Debug, Clone, Copy)]
pub struct AnimationProgram {
    /// Human-readable name, used only for diagnostics
    pub label: &'static str,
    /// Steps in playback order
    pub steps: &'static [AnimationStep],
}

impl AnimationProgram {
    /// Steps in playback order
    pub fn steps(&self) -> &'static [AnimationStep] {
        self.steps
    }

    /// Total playback time for one run
    pub fn total_hold_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.hold_ms as u32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::index;

    #[test]
    fn step_resolves_through_all_three_tables() {
        let step = AnimationStep::new(index::ALL_ON, index::ALL_ON, index::LAYER_2, 200);
        let image = step.resolve().unwrap();
        assert_eq!(image, ChipImage::new(0xff, 0xff, 0xbc));
    }

    #[test]
    fn step_with_defective_index_fails() {
        let step = AnimationStep::new(99, index::ALL_ON, index::LAYER_1, 200);
        assert_eq!(step.resolve(), Err(PatternError::IndexOutOfRange));
    }
}
