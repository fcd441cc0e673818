//! The two compiled-in animation programs
//!
//! Hold durations are aesthetic tuning values carried over from the
//! reference cube, not derived from anything.

use super::{AnimationProgram, AnimationStep};
use crate::pattern::index;

/// Hold duration per layer-sweep step
pub const LAYER_SWEEP_HOLD_MS: u16 = 200;

/// Hold duration per side-sweep step
pub const SIDE_SWEEP_HOLD_MS: u16 = 400;

/// Identifier for one of the compiled-in programs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgramId {
    /// Full-brightness layers walking bottom to top
    LayerSweep,
    /// Checkerboard columns walking bottom to top
    SideSweep,
}

/// Program A: every anode on, ground layers enabled bottom to top
pub static LAYER_SWEEP: AnimationProgram = AnimationProgram {
    label: "layer-sweep",
    steps: &[
        AnimationStep::new(
            index::ALL_ON,
            index::ALL_ON,
            index::LAYER_1,
            LAYER_SWEEP_HOLD_MS,
        ),
        AnimationStep::new(
            index::ALL_ON,
            index::ALL_ON,
            index::LAYER_2,
            LAYER_SWEEP_HOLD_MS,
        ),
        AnimationStep::new(
            index::ALL_ON,
            index::ALL_ON,
            index::LAYER_3,
            LAYER_SWEEP_HOLD_MS,
        ),
    ],
};

/// Program B: alternating columns with the spare center columns
/// filled in, walking bottom to top at a slower cadence
pub static SIDE_SWEEP: AnimationProgram = AnimationProgram {
    label: "side-sweep",
    steps: &[
        AnimationStep::new(
            index::CHECKER,
            index::CHECKER,
            index::LAYER_1_CENTER,
            SIDE_SWEEP_HOLD_MS,
        ),
        AnimationStep::new(
            index::CHECKER,
            index::CHECKER,
            index::LAYER_2_CENTER,
            SIDE_SWEEP_HOLD_MS,
        ),
        AnimationStep::new(
            index::CHECKER,
            index::CHECKER,
            index::LAYER_3_CENTER,
            SIDE_SWEEP_HOLD_MS,
        ),
    ],
};

/// Get the program for an identifier
pub fn program(id: ProgramId) -> &'static AnimationProgram {
    match id {
        ProgramId::LayerSweep => &LAYER_SWEEP,
        ProgramId::SideSweep => &SIDE_SWEEP,
    }
}
