//! KNX Group Address Converter
//!
//! Converts an ETS group address export (CSV) into a YAML configuration
//! that groups the addresses by device: lights, fans, switches and
//! climate controllers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   rows   ┌──────────────────────────────┐  KnxConfig  ┌──────────────────┐
//! │ CsvRowSource │ ───────► │         RowAggregator        │ ──────────► │ YamlDocumentSink │
//! └──────────────┘          │  rules → accumulators →      │             └──────────────────┘
//!                           │  CategoryClassifier          │
//!                           └──────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`conversion`]: Row rules, accumulation, classification and the output document
//! - [`adapters`]: CSV source and YAML sink
//! - [`domain`]: Row type and port traits
//! - [`config`]: Run configuration
//! - [`error`]: Error types and handling

pub mod adapters;
pub mod config;
pub mod conversion;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use adapters::{CsvRowSource, YamlDocumentSink};

pub use config::{ColumnLayout, ConverterConfig, CsvOptions};

pub use conversion::{
    AddressField, CategoryClassifier, ClimateDevice, Conversion, ConversionReport, Converter,
    DeviceAccumulator, DeviceCategory, KnxConfig, RowAggregator, SwitchableDevice, Verdict,
};

pub use domain::ports::{DocumentSink, GroupAddressRow, RowSource};

pub use error::{Error, ErrorKind, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
