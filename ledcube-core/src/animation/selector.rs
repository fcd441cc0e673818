//! Temperature-based program selection
//!
//! Re-evaluated once per super-loop iteration, after each sensor
//! poller step. Holds no state of its own.

use super::programs::ProgramId;
use crate::sensor::Reading;

/// Threshold between the two programs, degrees Celsius inclusive
///
/// At or below this temperature the cube plays the layer sweep; above
/// it, the side sweep. Carried over from the reference cube's tuning.
pub const WARM_THRESHOLD_C: u8 = 28;

/// Pick the program for the current temperature
///
/// Only the integer part of the reading participates in the decision;
/// the boundary is inclusive on the cool side.
pub fn select_program(temperature: Reading) -> ProgramId {
    if temperature.integer <= WARM_THRESHOLD_C {
        ProgramId::LayerSweep
    } else {
        ProgramId::SideSweep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive_on_the_cool_side() {
        assert_eq!(
            select_program(Reading::new(28, 0)),
            ProgramId::LayerSweep
        );
        assert_eq!(select_program(Reading::new(29, 0)), ProgramId::SideSweep);
    }

    #[test]
    fn fraction_does_not_participate() {
        // 28.9°C still selects the cool program
        assert_eq!(
            select_program(Reading::new(28, 9)),
            ProgramId::LayerSweep
        );
    }

    #[test]
    fn cold_and_hot_extremes() {
        assert_eq!(select_program(Reading::new(0, 0)), ProgramId::LayerSweep);
        assert_eq!(select_program(Reading::new(40, 5)), ProgramId::SideSweep);
    }
}
