//! YAML Document Sink
//!
//! Writes the generated configuration as YAML. The document goes to a
//! temporary sibling file first and is renamed over the destination, so
//! the destination never holds a partial document.

use crate::conversion::KnxConfig;
use crate::domain::ports::DocumentSink;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Document sink backed by a YAML file
#[derive(Debug, Clone)]
pub struct YamlDocumentSink {
    path: PathBuf,
}

impl YamlDocumentSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary file written before the rename
    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.as_os_str().to_owned();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    async fn write_staged(&self, staging: &Path, yaml: &str) -> std::io::Result<()> {
        let mut file = fs::File::create(staging).await?;
        file.write_all(yaml.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(staging, &self.path).await
    }
}

#[async_trait]
impl DocumentSink for YamlDocumentSink {
    async fn store(&self, document: &KnxConfig) -> Result<()> {
        let yaml = document.to_yaml()?;
        let staging = self.staging_path();

        if let Err(e) = self.write_staged(&staging, &yaml).await {
            if let Err(cleanup) = fs::remove_file(&staging).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %staging.display(), error = %cleanup, "Failed to remove staging file");
                }
            }
            return Err(Error::OutputIo {
                path: self.path.clone(),
                source: e,
            });
        }

        debug!(path = %self.path.display(), bytes = yaml.len(), "Wrote YAML document");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
