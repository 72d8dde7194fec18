//! Brookes' Δ calculator.

use crate::error::{DivisionError, ValidationError};
use crate::interpretation::{Interpretation, in_unit_range};
use crate::model::{CategoryFrequency, DispersionResult, TableRow};
use std::collections::HashSet;

/// Calculator of Brookes' measure of categorical dispersion.
///
/// Holds a validated, immutable set of categories and their frequencies.
/// See [`DeltaCalculator::calculate`] for the computation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaCalculator {
    entries: Vec<CategoryFrequency>,
}

impl DeltaCalculator {
    /// Create a calculator from parallel sequences of labels and frequencies.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if the sequences differ in length, are empty,
    /// contain a negative or non-finite frequency, or repeat a label.
    /// A zero total is accepted here and rejected by [`DeltaCalculator::calculate`].
    pub fn new<C, F, S>(categories: C, frequencies: F) -> Result<Self, ValidationError>
    where
        C: IntoIterator<Item = S>,
        F: IntoIterator<Item = f64>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let frequencies: Vec<f64> = frequencies.into_iter().collect();

        let (n_cat, n_freq) = (categories.len(), frequencies.len());
        if n_cat != n_freq {
            return Err(ValidationError::LengthMismatch { n_cat, n_freq });
        }

        let entries = categories
            .into_iter()
            .zip(frequencies)
            .map(|(category, frequency)| CategoryFrequency { category, frequency })
            .collect();

        Self::from_pairs(entries)
    }

    /// Create a calculator from category-frequency pairs.
    ///
    /// # Errors
    /// Same as [`DeltaCalculator::new`], except for the length check.
    pub fn from_pairs(entries: Vec<CategoryFrequency>) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !entry.frequency.is_finite() {
                return Err(ValidationError::NonFiniteFrequency {
                    category: entry.category.clone(),
                    frequency: entry.frequency,
                });
            }
            if entry.frequency < 0.0 {
                return Err(ValidationError::NegativeFrequency {
                    category: entry.category.clone(),
                    frequency: entry.frequency,
                });
            }
            if !seen.insert(entry.category.as_str()) {
                return Err(ValidationError::DuplicateCategory(entry.category.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Categories and frequencies in input order.
    pub fn entries(&self) -> &[CategoryFrequency] {
        &self.entries
    }

    /// Number of categories (T).
    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all frequencies.
    pub fn total_frequency(&self) -> f64 {
        self.entries.iter().map(|entry| entry.frequency).sum()
    }

    /// Compute Brookes' Δ.
    ///
    /// Categories are sorted by percentage, highest first, keeping input order
    /// among equal percentages. The sorted categories get ascending ranks `1..=T`
    /// and descending weights `T..=1`, and
    ///
    /// ```text
    /// m = Σ(f / Σf × w)
    /// Δ = (m - 1) / (T - 1)
    /// ```
    ///
    /// A single category has Δ = 0 by convention.
    ///
    /// # Errors
    /// Returns [`DivisionError`] if the total frequency is zero.
    pub fn calculate(&self) -> Result<DispersionResult, DivisionError> {
        let total = self.total_frequency();
        if total <= 0.0 {
            return Err(DivisionError);
        }

        let percentages: Vec<f64> = self
            .entries
            .iter()
            .map(|entry| entry.frequency / total * 100.0)
            .collect();

        // Stable sort, so ties keep their input order.
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| percentages[b].total_cmp(&percentages[a]));

        let n_cat = order.len();
        let table: Vec<TableRow> = order
            .iter()
            .enumerate()
            .map(|(pos, &idx)| {
                let entry = &self.entries[idx];
                let desc_rank = n_cat - pos;
                TableRow {
                    category: entry.category.clone(),
                    frequency: entry.frequency,
                    percentage: percentages[idx],
                    rank: pos + 1,
                    desc_rank,
                    weighted: entry.frequency * desc_rank as f64,
                }
            })
            .collect();

        // Built from shares, since Σ(f × w) can overflow for finite frequencies.
        let raw_m: f64 = table
            .iter()
            .map(|row| row.frequency / total * row.desc_rank as f64)
            .sum();
        let raw_delta = if n_cat > 1 {
            (raw_m - 1.0) / (n_cat - 1) as f64
        } else {
            0.0
        };

        let out_of_range = !in_unit_range(raw_delta);
        if out_of_range {
            log::warn!("delta {raw_delta} is outside [0, 1]");
        }
        log::debug!("computed delta {raw_delta:.6} (m = {raw_m:.6}, T = {n_cat})");

        Ok(DispersionResult {
            delta: round3(raw_delta),
            m: round3(raw_m),
            raw_delta,
            raw_m,
            category_count: n_cat,
            total_frequency: total,
            interpretation: Interpretation::from_delta(raw_delta),
            out_of_range,
            table,
        })
    }
}

/// Round to 3 decimal places, half away from zero.
pub(crate) fn round3(val: f64) -> f64 {
    (val * 1000.0).round() / 1000.0
}
