use crate::config::InputConfig;
use anyhow::{Context, Result, bail};
use brookes::DeltaCalculator;
use csv::{ReaderBuilder, Trim};
use std::{fs::File, io::Read, path::Path};

/// Categories and frequencies read from a CSV file, in file order.
#[derive(Debug, PartialEq)]
pub struct Dataset {
    pub categories: Vec<String>,
    pub frequencies: Vec<f64>,
}

impl Dataset {
    /// Build a validated calculator from the dataset.
    pub fn into_calculator(self) -> Result<DeltaCalculator> {
        let calc = DeltaCalculator::new(self.categories, self.frequencies)
            .context("failed to validate dataset")?;
        Ok(calc)
    }
}

/// Load a [`Dataset`] from a headered CSV file.
pub fn load_frequencies<P: AsRef<Path>>(file: P, cfg: &InputConfig) -> Result<Dataset> {
    let file = file.as_ref();
    let reader = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
    read_frequencies(reader, cfg).with_context(|| format!("failed to read {file:?}"))
}

fn read_frequencies<R: Read>(reader: R, cfg: &InputConfig) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .delimiter(cfg.delimiter_byte())
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers().context("failed to read header")?.clone();
    let i_cat = find_column(&headers, &cfg.category_column)?;
    let i_freq = find_column(&headers, &cfg.frequency_column)?;

    let mut dataset = Dataset {
        categories: Vec::new(),
        frequencies: Vec::new(),
    };

    for record in reader.records() {
        let record = record.context("failed to read record")?;
        let line = record.position().map_or(0, |pos| pos.line());

        let category = record.get(i_cat).unwrap_or_default();
        if category.is_empty() {
            log::warn!("skipping line {line}: empty category");
            continue;
        }

        let field = record.get(i_freq).unwrap_or_default();
        let frequency: f64 = field
            .parse()
            .with_context(|| format!("invalid frequency {field:?} on line {line}"))?;

        dataset.categories.push(category.to_string());
        dataset.frequencies.push(frequency);
    }

    Ok(dataset)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    match headers.iter().position(|header| header == name) {
        Some(idx) => Ok(idx),
        None => bail!("column {name:?} not found in header {headers:?}"),
    }
}
