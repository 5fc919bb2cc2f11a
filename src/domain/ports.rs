//! Domain Ports - Core trait definitions for the converter
//!
//! These traits define the boundaries between the conversion logic and the
//! files it reads from and writes to. Adapters implement these traits to
//! provide concrete functionality.

use crate::conversion::KnxConfig;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// =============================================================================
// Group Address Row
// =============================================================================

/// One group address entry from an ETS export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAddressRow {
    /// 1-based line in the source file (0 when built in memory)
    #[serde(default)]
    pub line: u64,
    /// Human readable description, e.g. "Wohnzimmer licht sch"
    pub description: String,
    /// Group address, e.g. "1/1/1"
    pub address: String,
}

impl GroupAddressRow {
    /// Create a row without source position
    pub fn new(description: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            line: 0,
            description: description.into(),
            address: address.into(),
        }
    }

    /// Attach the source line number
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }
}

// =============================================================================
// Row Source Port
// =============================================================================

/// Port for loading group address rows
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Load every row in source order
    async fn load(&self) -> Result<Vec<GroupAddressRow>>;

    /// Human readable origin, used in log lines
    fn describe(&self) -> String;
}

// =============================================================================
// Document Sink Port
// =============================================================================

/// Port for persisting the generated configuration document
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Store the complete document; must not leave partial output behind
    async fn store(&self, document: &KnxConfig) -> Result<()>;

    /// Human readable destination, used in log lines
    fn describe(&self) -> String;
}
