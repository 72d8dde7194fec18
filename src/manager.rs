use crate::config::Config;
use crate::data::load_frequencies;
use crate::report::{ComparisonReport, Report};
use anyhow::{Context, Result, bail};
use brookes::{DispersionResult, compare};
use glob::{Pattern, glob};
use rmp_serde::encode;
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub struct Manager {
    data_dir: PathBuf,
    cfg: Config,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        if !data_dir.is_dir() {
            bail!("{data_dir:?} is not a directory");
        }

        let cfg = Config::from_file_or_default(data_dir.join("config.toml"))
            .context("failed to construct cfg")?;
        log::info!("{cfg:#?}");

        Ok(Self { data_dir, cfg })
    }

    pub fn analyze_data(&self) -> Result<()> {
        let data_files = self.data_files().context("failed to list data files")?;
        if data_files.is_empty() {
            bail!("no CSV files found in {:?}", self.data_dir);
        }

        for data_file in data_files {
            let stem = file_stem(&data_file)?;
            let res = self
                .compute_delta(&data_file)
                .with_context(|| format!("failed to analyze {data_file:?}"))?;

            println!("== {stem}");
            println!("{}", Report::new(&res, self.cfg.output.show_table));

            let results_file = self.results_file(stem);
            save_msgpack(&res, &results_file)
                .with_context(|| format!("failed to save {results_file:?}"))?;
            log::info!("saved {results_file:?}");
        }

        Ok(())
    }

    pub fn compare_fields<P: AsRef<Path>>(&self, first: P, second: P) -> Result<()> {
        let first = self.data_dir.join(first);
        let second = self.data_dir.join(second);

        let first_res = self
            .compute_delta(&first)
            .with_context(|| format!("failed to analyze {first:?}"))?;
        let second_res = self
            .compute_delta(&second)
            .with_context(|| format!("failed to analyze {second:?}"))?;

        let cmp = compare(&first_res, &second_res);

        let (first_stem, second_stem) = (file_stem(&first)?, file_stem(&second)?);
        println!("{}", ComparisonReport::new(&cmp, first_stem, second_stem));

        let comparison_file = self.comparison_file(first_stem, second_stem);
        save_msgpack(&cmp, &comparison_file)
            .with_context(|| format!("failed to save {comparison_file:?}"))?;
        log::info!("saved {comparison_file:?}");

        Ok(())
    }

    pub fn clean_data(&self) -> Result<()> {
        for pattern in ["*-results.msgpack", "*-comparison.msgpack"] {
            for file in self.glob_files(pattern)? {
                fs::remove_file(&file).with_context(|| format!("failed to remove {file:?}"))?;
                log::info!("removed {file:?}");
            }
        }
        Ok(())
    }

    fn compute_delta(&self, file: &Path) -> Result<DispersionResult> {
        let dataset = load_frequencies(file, &self.cfg.input).context("failed to load dataset")?;
        let calc = dataset.into_calculator()?;
        let res = calc.calculate().context("failed to calculate delta")?;
        log::info!("{file:?}: delta = {:.3} (T = {})", res.delta, res.category_count);
        Ok(res)
    }

    fn data_files(&self) -> Result<Vec<PathBuf>> {
        self.glob_files("*.csv")
    }

    fn glob_files(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let pattern = glob_pattern(&self.data_dir, pattern)?;
        let files = glob(&pattern)
            .with_context(|| format!("failed to glob {pattern:?}"))?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        Ok(files)
    }

    fn results_file(&self, stem: &str) -> PathBuf {
        self.data_dir.join(format!("{stem}-results.msgpack"))
    }

    fn comparison_file(&self, first_stem: &str, second_stem: &str) -> PathBuf {
        self.data_dir
            .join(format!("{first_stem}-vs-{second_stem}-comparison.msgpack"))
    }
}

fn glob_pattern(dir: &Path, pattern: &str) -> Result<String> {
    let dir = dir.to_str().context("directory is not valid UTF-8")?;
    let dir = Path::new(&Pattern::escape(dir)).join(pattern);
    let pattern = dir.to_str().context("pattern is not valid UTF-8")?;
    Ok(pattern.to_string())
}

fn file_stem(file: &Path) -> Result<&str> {
    file.file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("invalid file name {file:?}"))
}

fn save_msgpack<T: Serialize, P: AsRef<Path>>(value: &T, file: P) -> Result<()> {
    let file = file.as_ref();
    let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
    let mut writer = BufWriter::new(file);
    encode::write(&mut writer, value).context("failed to serialize value")?;
    writer.flush().context("failed to flush writer stream")?;
    Ok(())
}
