//! Error types for the KNX group address converter
//!
//! Every failure aborts the run. Variants are grouped by the side of the
//! pipeline they come from so the CLI can pick an exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the converter
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Cannot read input file {}: {source}", path.display())]
    InputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Required column '{column}' not found in header of {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Line {line}: missing '{column}' field")]
    MissingField { line: u64, column: String },

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("Cannot write output file {}: {source}", path.display())]
    OutputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Which side of the pipeline an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad CLI arguments or environment
    Configuration,
    /// Source file missing, unreadable or structurally invalid
    Input,
    /// Destination unwritable or document not serializable
    Output,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) => ErrorKind::Configuration,

            Error::InputIo { .. }
            | Error::Csv { .. }
            | Error::MissingColumn { .. }
            | Error::MissingField { .. } => ErrorKind::Input,

            Error::OutputIo { .. } | Error::Yaml(_) => ErrorKind::Output,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Configuration => 2,
            ErrorKind::Input | ErrorKind::Output => 1,
        }
    }
}

/// Result type alias for the converter
pub type Result<T> = std::result::Result<T, Error>;
