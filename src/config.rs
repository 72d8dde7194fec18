use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Input file parameters.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Name of the column holding category labels.
    pub category_column: String,
    /// Name of the column holding frequencies.
    pub frequency_column: String,
    /// Field delimiter.
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            category_column: "Category".to_string(),
            frequency_column: "Frequency".to_string(),
            delimiter: ',',
        }
    }
}

impl InputConfig {
    /// Delimiter as a single byte, as the CSV reader expects it.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    fn validate(&self) -> Result<()> {
        check_column(&self.category_column).context("invalid category column")?;
        check_column(&self.frequency_column).context("invalid frequency column")?;
        if self.category_column == self.frequency_column {
            bail!("category and frequency columns must differ");
        }
        let delimiter = self.delimiter;
        let control = delimiter.is_ascii_control() && delimiter != '\t';
        if !delimiter.is_ascii() || control || delimiter == '"' {
            bail!("delimiter must be a tab or printable ASCII other than '\"', but is {delimiter:?}");
        }
        Ok(())
    }
}

/// Output parameters.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Print the calculation table along with the summary.
    pub show_table: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { show_table: true }
    }
}

/// Analysis configuration.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// Missing sections and fields take their default values.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml(&contents)
    }

    /// Load a [`Config`] from a file if it exists, otherwise use the defaults.
    pub fn from_file_or_default<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        if file.is_file() {
            Self::from_file(file)
        } else {
            log::info!("{file:?} not found, using default config");
            Ok(Self::default())
        }
    }

    fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.input.validate().context("invalid input section")?;
        Ok(())
    }
}

fn check_column(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("column name must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").expect("empty config is valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.input.category_column, "Category");
        assert_eq!(config.input.delimiter_byte(), b',');
        assert!(config.output.show_table);
    }

    #[test]
    fn partial_config() {
        let config = Config::from_toml(
            "[input]\n\
             frequency_column = \"Count\"\n\
             delimiter = \";\"\n\
             \n\
             [output]\n\
             show_table = false\n",
        )
        .expect("valid config");
        assert_eq!(config.input.category_column, "Category");
        assert_eq!(config.input.frequency_column, "Count");
        assert_eq!(config.input.delimiter_byte(), b';');
        assert!(!config.output.show_table);
    }

    #[test]
    fn invalid_config() {
        assert!(Config::from_toml("[input]\ncategory_column = \" \"\n").is_err());
        assert!(Config::from_toml("[input]\nfrequency_column = \"Category\"\n").is_err());
        assert!(Config::from_toml("[input]\ndelimiter = \"é\"\n").is_err());
        assert!(Config::from_toml("[input]\ndelimiter = \"\\n\"\n").is_err());
        assert!(Config::from_toml("[input]\ndelimiter = \"\\r\"\n").is_err());
        assert!(Config::from_toml("[input]\ndelimiter = \"\\u0000\"\n").is_err());
        assert!(Config::from_toml("[output]\nshow_tabel = true\n").is_err());
    }

    #[test]
    fn tab_delimiter() {
        let config = Config::from_toml("[input]\ndelimiter = \"\\t\"\n").expect("valid config");
        assert_eq!(config.input.delimiter_byte(), b'\t');
    }
}
