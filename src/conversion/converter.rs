//! Converter
//!
//! Runs one conversion from a row source to a document sink. The document
//! is built completely before the sink is touched.

use crate::conversion::aggregator::{ConversionReport, RowAggregator};
use crate::domain::ports::{DocumentSink, RowSource};
use crate::error::Result;
use std::sync::Arc;
use tracing::info;

/// Reads rows, converts them and stores the resulting document
pub struct Converter {
    source: Arc<dyn RowSource>,
    sink: Arc<dyn DocumentSink>,
    aggregator: RowAggregator,
}

impl Converter {
    pub fn new(source: Arc<dyn RowSource>, sink: Arc<dyn DocumentSink>) -> Self {
        Self {
            source,
            sink,
            aggregator: RowAggregator::new(),
        }
    }

    /// Execute the conversion
    pub async fn run(&self) -> Result<ConversionReport> {
        info!(source = %self.source.describe(), "Loading group addresses");
        let rows = self.source.load().await?;
        info!(rows = rows.len(), "Group addresses loaded");

        let conversion = self.aggregator.convert(&rows);

        info!(sink = %self.sink.describe(), "Writing configuration");
        self.sink.store(&conversion.config).await?;

        Ok(conversion.report)
    }
}
