//! Error types of the calculator.

use thiserror::Error;

/// Invalid calculator input, reported at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("categories and frequencies must have same length, but have {n_cat} and {n_freq}")]
    LengthMismatch { n_cat: usize, n_freq: usize },

    #[error("at least one category is required")]
    Empty,

    #[error("frequency of category {category:?} must be non-negative, but is {frequency}")]
    NegativeFrequency { category: String, frequency: f64 },

    #[error("frequency of category {category:?} must be finite, but is {frequency}")]
    NonFiniteFrequency { category: String, frequency: f64 },

    #[error("category {0:?} occurs more than once")]
    DuplicateCategory(String),
}

/// Total frequency is zero, so percentages are undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("total frequency is zero, percentages are undefined")]
pub struct DivisionError;
