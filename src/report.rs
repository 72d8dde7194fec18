use brookes::{ComparisonResult, DispersionResult};
use std::fmt;

/// Text report of a dispersion result.
pub struct Report<'a> {
    res: &'a DispersionResult,
    show_table: bool,
}

impl<'a> Report<'a> {
    pub fn new(res: &'a DispersionResult, show_table: bool) -> Self {
        Self { res, show_table }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let res = self.res;
        writeln!(f, "Total publications: {}", res.total_frequency)?;
        writeln!(f, "Number of categories (T): {}", res.category_count)?;
        writeln!(f, "Mean frequency-rank (m): {:.3}", res.m)?;
        writeln!(f, "Brookes' Δ: {:.3}", res.delta)?;
        writeln!(f, "Interpretation: {}", res.summary())?;

        if !self.show_table {
            return Ok(());
        }

        let cat_width = res
            .table
            .iter()
            .map(|row| row.category.chars().count())
            .chain(std::iter::once("Category".len()))
            .max()
            .unwrap_or_default();

        writeln!(f)?;
        writeln!(
            f,
            "{:<cat_width$} {:>10} {:>10} {:>5} {:>9} {:>12}",
            "Category", "Frequency", "Percentage", "Rank", "Desc_Rank", "f x DescRank"
        )?;
        for row in &res.table {
            writeln!(
                f,
                "{:<cat_width$} {:>10} {:>10.2} {:>5} {:>9} {:>12}",
                row.category, row.frequency, row.percentage, row.rank, row.desc_rank, row.weighted
            )?;
        }
        Ok(())
    }
}

/// Text report of a comparison between two labeled fields.
pub struct ComparisonReport<'a> {
    cmp: &'a ComparisonResult,
    first: &'a str,
    second: &'a str,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(cmp: &'a ComparisonResult, first: &'a str, second: &'a str) -> Self {
        Self { cmp, first, second }
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cmp = self.cmp;
        writeln!(f, "{}: Δ = {:.3}", self.first, cmp.first_delta)?;
        writeln!(f, "{}: Δ = {:.3}", self.second, cmp.second_delta)?;
        writeln!(f, "Comparison: {}", cmp.statement(self.first, self.second))?;
        writeln!(f, "Δ difference: {:.3}", cmp.difference)?;
        writeln!(f, "Effect size: {:.3}", cmp.effect_size)
    }
}
