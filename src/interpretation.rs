//! Qualitative tiers of Δ.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Warning shown instead of the tier text when Δ falls outside `[0, 1]`.
pub const OUT_OF_RANGE_WARNING: &str = "WARNING: Δ outside [0,1] range, check calculation";

/// Interpretation tier, from most concentrated to most dispersed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpretation {
    VeryHighConcentration,
    HighConcentration,
    ModerateDispersion,
    HighDispersion,
    VeryHighDispersion,
}

impl Interpretation {
    /// Lower bounds of the tiers, checked in order.
    const THRESHOLDS: [(f64, Interpretation); 4] = [
        (0.8, Interpretation::VeryHighConcentration),
        (0.6, Interpretation::HighConcentration),
        (0.4, Interpretation::ModerateDispersion),
        (0.2, Interpretation::HighDispersion),
    ];

    /// Classify a Δ value, clamping it to `[0, 1]` first.
    pub fn from_delta(delta: f64) -> Self {
        let delta = clamp_unit(delta);
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| delta >= *min)
            .map(|&(_, tier)| tier)
            .unwrap_or(Interpretation::VeryHighDispersion)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Interpretation::VeryHighConcentration => {
                "Very high thematic concentration (highly specialized field)"
            }
            Interpretation::HighConcentration => {
                "High thematic concentration (specialized with clear paradigms)"
            }
            Interpretation::ModerateDispersion => "Moderate thematic dispersion (balanced field)",
            Interpretation::HighDispersion => "High thematic dispersion (interdisciplinary field)",
            Interpretation::VeryHighDispersion => {
                "Very high thematic dispersion (highly interdisciplinary/diverse)"
            }
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a Δ value. See [`Interpretation::from_delta`].
pub fn interpret(delta: f64) -> Interpretation {
    Interpretation::from_delta(delta)
}

/// Check whether a raw Δ lies within `[0, 1]`.
pub fn in_unit_range(delta: f64) -> bool {
    (0.0..=1.0).contains(&delta)
}

// NaN maps to 0.
fn clamp_unit(val: f64) -> f64 {
    if val.is_nan() { 0.0 } else { val.clamp(0.0, 1.0) }
}
