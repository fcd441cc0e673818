//! Per-chip pattern tables
//!
//! Compiled-in constants mapping a small pattern index to one packed
//! output byte per chip role. The tables encode the cube's wiring and
//! are never mutated; animation programs refer to entries by the
//! symbolic indices in [`index`].

use super::{ChipRole, PatternByte, PatternError};

/// Red anode chip patterns (R8..R1 on bit7..bit0, active high)
///
/// - `[0]`: all off
/// - `[1]`: all on
/// - `[2]`: alternating columns (checkerboard)
pub const RED_PATTERNS: &[PatternByte] = &[0x00, 0xff, 0x55];

/// Green anode chip patterns (G7..G1 on bit7..bit1, R9 on bit0,
/// active high)
///
/// - `[0]`: all off
/// - `[1]`: all on
/// - `[2]`: alternating columns (checkerboard), R9 on
pub const GREEN_PATTERNS: &[PatternByte] = &[0x00, 0xff, 0x55];

/// Layer select chip patterns
///
/// Bit layout: GND3/GND2/GND1 on bit7..bit5 (active low: a cleared
/// bit connects that layer to ground), bit4..bit2 unused (held high),
/// G9/G8 on bit1..bit0 (active high).
///
/// - `[0]`: all layers disconnected, G8/G9 off
/// - `[1]`..`[3]`: layer 1..3 connected, G8/G9 off
/// - `[4]`..`[6]`: layer 1 connected, plus G8 / G9 / both
/// - `[7]`..`[9]`: layer 2 connected, plus G8 / G9 / both
/// - `[10]`..`[12]`: layer 3 connected, plus G8 / G9 / both
pub const LAYER_PATTERNS: &[PatternByte] = &[
    0xfc, 0xdc, 0xbc, 0x7c, 0xdd, 0xde, 0xdf, 0xbd, 0xbe, 0xbf, 0x7d, 0x7e, 0x7f,
];

/// Symbolic pattern indices, so animation programs read as intent
/// rather than raw table positions
pub mod index {
    /// Anode chips: everything off
    pub const ALL_OFF: u8 = 0;
    /// Anode chips: everything on
    pub const ALL_ON: u8 = 1;
    /// Anode chips: alternating columns
    pub const CHECKER: u8 = 2;

    /// Layer chip: all layers disconnected
    pub const LAYERS_OFF: u8 = 0;
    /// Layer chip: bottom layer connected
    pub const LAYER_1: u8 = 1;
    /// Layer chip: middle layer connected
    pub const LAYER_2: u8 = 2;
    /// Layer chip: top layer connected
    pub const LAYER_3: u8 = 3;
    /// Layer chip: layer connected with both spare center columns on
    pub const LAYER_1_CENTER: u8 = 6;
    pub const LAYER_2_CENTER: u8 = 9;
    pub const LAYER_3_CENTER: u8 = 12;
}

/// Look up the pattern byte for a chip role
///
/// Fails with [`PatternError::IndexOutOfRange`] if `index` exceeds the
/// role's table. Since indices come from compiled-in programs, an
/// out-of-range index is a programming defect, not a runtime
/// condition; callers treat the error as fatal.
pub fn lookup(role: ChipRole, index: u8) -> Result<PatternByte, PatternError> {
    let table = match role {
        ChipRole::RedAnodes => RED_PATTERNS,
        ChipRole::GreenAnodes => GREEN_PATTERNS,
        ChipRole::LayerSelect => LAYER_PATTERNS,
    };
    table
        .get(index as usize)
        .copied()
        .ok_or(PatternError::IndexOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn in_range_lookups_return_documented_constants() {
        assert_eq!(lookup(ChipRole::RedAnodes, index::ALL_OFF), Ok(0x00));
        assert_eq!(lookup(ChipRole::RedAnodes, index::ALL_ON), Ok(0xff));
        assert_eq!(lookup(ChipRole::RedAnodes, index::CHECKER), Ok(0x55));
        assert_eq!(lookup(ChipRole::GreenAnodes, index::ALL_ON), Ok(0xff));
        assert_eq!(lookup(ChipRole::LayerSelect, index::LAYERS_OFF), Ok(0xfc));
        assert_eq!(lookup(ChipRole::LayerSelect, index::LAYER_1), Ok(0xdc));
        assert_eq!(lookup(ChipRole::LayerSelect, index::LAYER_3), Ok(0x7c));
        assert_eq!(lookup(ChipRole::LayerSelect, 12), Ok(0x7f));
    }

    #[test]
    fn out_of_range_fails() {
        assert_eq!(
            lookup(ChipRole::RedAnodes, 3),
            Err(PatternError::IndexOutOfRange)
        );
        assert_eq!(
            lookup(ChipRole::GreenAnodes, 3),
            Err(PatternError::IndexOutOfRange)
        );
        assert_eq!(
            lookup(ChipRole::LayerSelect, 13),
            Err(PatternError::IndexOutOfRange)
        );
    }

    #[test]
    fn table_sizes_match_reference_wiring() {
        assert_eq!(RED_PATTERNS.len(), 3);
        assert_eq!(GREEN_PATTERNS.len(), 3);
        assert_eq!(LAYER_PATTERNS.len(), 13);
    }

    #[test]
    fn layer_patterns_connect_exactly_one_layer() {
        // Indices 1..=12 clear exactly one of the three active-low
        // layer bits (bit7..bit5)
        for &byte in &LAYER_PATTERNS[1..] {
            let cleared = (!byte >> 5) & 0x07;
            assert_eq!(cleared.count_ones(), 1, "byte {byte:#04x}");
        }
    }

    proptest! {
        #[test]
        fn lookup_errors_iff_out_of_range(idx in 0u8..=255) {
            for role in [ChipRole::RedAnodes, ChipRole::GreenAnodes, ChipRole::LayerSelect] {
                let len = match role {
                    ChipRole::RedAnodes => RED_PATTERNS.len(),
                    ChipRole::GreenAnodes => GREEN_PATTERNS.len(),
                    ChipRole::LayerSelect => LAYER_PATTERNS.len(),
                };
                let result = lookup(role, idx);
                prop_assert_eq!(result.is_ok(), (idx as usize) < len);
            }
        }
    }
}
