//! Brookes' measure of categorical dispersion (Δ).
//!
//! Given subject categories and their publication frequencies, [`DeltaCalculator`]
//! ranks the categories by share, computes the rank-weighted mean `m` and
//! normalizes it to Δ = (m - 1) / (T - 1). Δ is 1 when all activity falls in a
//! single category and decreases as activity spreads out, reaching 0.5 for an
//! even spread; with more than one category it stays within `[0.5, 1]`.
//! A single category has Δ = 0 by convention.
//!
//! ```
//! use brookes::DeltaCalculator;
//!
//! let calc = DeltaCalculator::new(vec!["A", "B", "C", "D"], vec![100.0, 0.0, 0.0, 0.0])?;
//! let res = calc.calculate()?;
//! assert_eq!(res.delta, 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod calculator;
pub mod comparison;
pub mod error;
pub mod interpretation;
pub mod model;

pub use calculator::DeltaCalculator;
pub use comparison::compare;
pub use error::{DivisionError, ValidationError};
pub use interpretation::{Interpretation, interpret};
pub use model::{CategoryFrequency, ComparisonResult, Direction, DispersionResult, TableRow};
