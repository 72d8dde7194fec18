//! Input and result types.

use crate::interpretation::{Interpretation, OUT_OF_RANGE_WARNING};
use serde::{Deserialize, Serialize};

/// Category label with its publication frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFrequency {
    pub category: String,
    pub frequency: f64,
}

impl CategoryFrequency {
    pub fn new<S: Into<String>>(category: S, frequency: f64) -> Self {
        Self {
            category: category.into(),
            frequency,
        }
    }
}

/// Row of the calculation table.
///
/// Rows are stored in percentage-descending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Category label.
    pub category: String,
    /// Raw frequency.
    pub frequency: f64,
    /// Share of the total frequency, in percent.
    pub percentage: f64,
    /// Ascending rank (1 = highest percentage).
    pub rank: usize,
    /// Descending rank weight (T = highest percentage).
    pub desc_rank: usize,
    /// `frequency * desc_rank`.
    pub weighted: f64,
}

/// Result of a Brookes' Δ calculation.
///
/// `delta` and `m` are rounded to 3 decimals for reporting;
/// `raw_delta` and `raw_m` keep full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispersionResult {
    /// Δ rounded to 3 decimals.
    pub delta: f64,
    /// Rank-weighted mean rounded to 3 decimals.
    pub m: f64,
    /// Unrounded, unclamped Δ.
    pub raw_delta: f64,
    /// Unrounded rank-weighted mean.
    pub raw_m: f64,
    /// Number of categories (T).
    pub category_count: usize,
    /// Sum of all frequencies.
    pub total_frequency: f64,
    /// Interpretation tier of the clamped Δ.
    pub interpretation: Interpretation,
    /// Raw Δ fell outside `[0, 1]`.
    pub out_of_range: bool,
    /// Calculation table in percentage-descending order.
    pub table: Vec<TableRow>,
}

impl DispersionResult {
    /// Interpretation text, or a warning if the raw Δ is outside `[0, 1]`.
    pub fn summary(&self) -> &'static str {
        if self.out_of_range {
            OUT_OF_RANGE_WARNING
        } else {
            self.interpretation.as_str()
        }
    }
}

/// Direction of a two-field comparison, read from the first field's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    MoreConcentrated,
    MoreDispersed,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::MoreConcentrated => "more concentrated",
            Direction::MoreDispersed => "more dispersed",
        }
    }
}

/// Comparison of two dispersion results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Δ of the first field.
    pub first_delta: f64,
    /// Δ of the second field.
    pub second_delta: f64,
    /// Absolute difference of both Δ values.
    pub difference: f64,
    /// Whether the first field is more concentrated than the second.
    pub direction: Direction,
    /// Comparison statement with generic field labels.
    pub comparison: String,
    /// `difference / max(first_delta, second_delta)`, or 0 if that maximum is not positive.
    pub effect_size: f64,
}

impl ComparisonResult {
    /// Render the comparison statement with custom field labels.
    pub fn statement(&self, first: &str, second: &str) -> String {
        format!("{first} is {} than {second}", self.direction.as_str())
    }
}
