//! Comparison of two fields by their Δ values.

use crate::calculator::round3;
use crate::model::{ComparisonResult, Direction, DispersionResult};

/// Compare two dispersion results.
///
/// Works on the reported (rounded) Δ values. The first field is
/// [`Direction::MoreConcentrated`] only if its Δ is strictly greater,
/// so equal values read as [`Direction::MoreDispersed`].
pub fn compare(first: &DispersionResult, second: &DispersionResult) -> ComparisonResult {
    let (first_delta, second_delta) = (first.delta, second.delta);
    let difference = round3((first_delta - second_delta).abs());

    let direction = if first_delta > second_delta {
        Direction::MoreConcentrated
    } else {
        Direction::MoreDispersed
    };

    let max_delta = first_delta.max(second_delta);
    let effect_size = if max_delta > 0.0 {
        difference / max_delta
    } else {
        0.0
    };

    ComparisonResult {
        first_delta,
        second_delta,
        difference,
        direction,
        comparison: format!("Field 1 is {} than Field 2", direction.as_str()),
        effect_size,
    }
}

impl DispersionResult {
    /// Compare this result against another. See [`compare`].
    pub fn compare(&self, other: &DispersionResult) -> ComparisonResult {
        compare(self, other)
    }
}
