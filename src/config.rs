//! Converter Configuration
//!
//! Paths and CSV options for one run. The CLI maps its arguments into
//! [`ConverterConfig`]; defaults match the usual ETS export location.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input file
pub const DEFAULT_INPUT_PATH: &str = "files/GA_240714.csv";

/// Default output file
pub const DEFAULT_OUTPUT_PATH: &str = "files/knx.yaml";

// =============================================================================
// CSV Options
// =============================================================================

/// How the description and address columns are located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnLayout {
    /// Look up `description` and `address` in the header row
    #[default]
    Named,
    /// Description in the first column, address in the second
    Positional,
}

impl ColumnLayout {
    /// Column index of the description in positional layout
    pub const DESCRIPTION_INDEX: usize = 0;
    /// Column index of the address in positional layout
    pub const ADDRESS_INDEX: usize = 1;
}

/// Options for reading the ETS export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Column lookup strategy
    pub layout: ColumnLayout,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            layout: ColumnLayout::Named,
        }
    }
}

impl CsvOptions {
    /// Parse a delimiter given on the command line
    ///
    /// Accepts a single ASCII character or the escape `\t`.
    pub fn parse_delimiter(value: &str) -> Result<u8> {
        match value {
            "\\t" | "\t" => Ok(b'\t'),
            _ => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() => Ok(c as u8),
                    _ => Err(Error::Configuration(format!(
                        "Delimiter must be a single ASCII character, got {:?}",
                        value
                    ))),
                }
            }
        }
    }
}

// =============================================================================
// Converter Configuration
// =============================================================================

/// Configuration for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// ETS CSV export to read
    pub input_path: PathBuf,
    /// YAML document to write
    pub output_path: PathBuf,
    /// CSV reading options
    pub csv: CsvOptions,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            csv: CsvOptions::default(),
        }
    }
}

impl ConverterConfig {
    /// Reject settings that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::Configuration("Input path is empty".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::Configuration("Output path is empty".to_string()));
        }
        if self.input_path == self.output_path {
            return Err(Error::Configuration(format!(
                "Input and output both point to {}",
                self.input_path.display()
            )));
        }
        if !self.csv.delimiter.is_ascii() {
            return Err(Error::Configuration(
                "Delimiter must be an ASCII character".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.input_path, PathBuf::from("files/GA_240714.csv"));
        assert_eq!(config.output_path, PathBuf::from("files/knx.yaml"));
        assert_eq!(config.csv.delimiter, b',');
        assert_eq!(config.csv.layout, ColumnLayout::Named);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_paths() {
        let config = ConverterConfig {
            input_path: PathBuf::new(),
            ..Default::default()
        };
        assert_matches!(config.validate(), Err(Error::Configuration(_)));

        let config = ConverterConfig {
            output_path: PathBuf::from("files/GA_240714.csv"),
            ..Default::default()
        };
        assert_matches!(config.validate(), Err(Error::Configuration(_)));
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(CsvOptions::parse_delimiter(";").unwrap(), b';');
        assert_eq!(CsvOptions::parse_delimiter("\\t").unwrap(), b'\t');
        assert_matches!(
            CsvOptions::parse_delimiter(";;"),
            Err(Error::Configuration(_))
        );
        assert_matches!(CsvOptions::parse_delimiter("ä"), Err(Error::Configuration(_)));
        assert_matches!(CsvOptions::parse_delimiter(""), Err(Error::Configuration(_)));
    }
}
