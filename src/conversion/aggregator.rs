//! Row Aggregator
//!
//! Folds ETS rows into per-device accumulators keyed by base key, then
//! filters and classifies them into the output document. The fold is a
//! single left-to-right pass; accumulators keep the order in which their
//! base key was first seen.

use crate::conversion::accumulator::DeviceAccumulator;
use crate::conversion::classifier::{CategoryClassifier, DeviceCategory, Verdict};
use crate::conversion::document::KnxConfig;
use crate::conversion::rules;
use crate::domain::ports::GroupAddressRow;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// =============================================================================
// Conversion Report
// =============================================================================

/// Counters describing what happened to the input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Rows handed to the aggregator
    pub rows_read: usize,
    /// Rows skipped by the ignore filter
    pub rows_ignored: usize,
    /// Rows whose role was not recognized
    pub rows_unassigned: usize,
    /// Distinct base keys
    pub devices_seen: usize,
    /// Devices without address or temperature address
    pub devices_incomplete: usize,
    /// Devices named as both light and socket
    pub devices_excluded: usize,
    /// Complete devices no category rule matched
    pub devices_unmatched: usize,
    pub lights: usize,
    pub fans: usize,
    pub switches: usize,
    pub climate: usize,
}

impl ConversionReport {
    /// Devices written to the document
    pub fn devices_emitted(&self) -> usize {
        self.lights + self.fans + self.switches + self.climate
    }

    fn count(&mut self, category: DeviceCategory) {
        match category {
            DeviceCategory::Light => self.lights += 1,
            DeviceCategory::Fan => self.fans += 1,
            DeviceCategory::Switch => self.switches += 1,
            DeviceCategory::Climate => self.climate += 1,
        }
    }
}

impl std::fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Rows: {} read, {} ignored, {} without recognized role",
            self.rows_read, self.rows_ignored, self.rows_unassigned
        )?;
        writeln!(
            f,
            "Devices: {} seen, {} incomplete, {} excluded, {} unmatched",
            self.devices_seen, self.devices_incomplete, self.devices_excluded, self.devices_unmatched
        )?;
        write!(
            f,
            "Output: {} light, {} fan, {} switch, {} climate",
            self.lights, self.fans, self.switches, self.climate
        )
    }
}

/// Result of one conversion
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub config: KnxConfig,
    pub report: ConversionReport,
}

// =============================================================================
// Row Aggregator
// =============================================================================

/// Converts ETS rows into a KNX configuration document
#[derive(Debug, Default, Clone)]
pub struct RowAggregator {
    classifier: CategoryClassifier,
}

impl RowAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the full conversion over rows in source order
    pub fn convert(&self, rows: &[GroupAddressRow]) -> Conversion {
        let mut report = ConversionReport {
            rows_read: rows.len(),
            ..Default::default()
        };

        let devices = self.accumulate(rows, &mut report);
        report.devices_seen = devices.len();

        let config = self.classify(devices, &mut report);

        info!(
            rows = report.rows_read,
            devices = report.devices_emitted(),
            "Conversion finished"
        );

        Conversion { config, report }
    }

    /// Group rows by base key and fill their address fields
    pub fn accumulate(
        &self,
        rows: &[GroupAddressRow],
        report: &mut ConversionReport,
    ) -> IndexMap<String, DeviceAccumulator> {
        let mut devices: IndexMap<String, DeviceAccumulator> = IndexMap::new();

        for row in rows {
            if rules::is_ignored(&row.description) {
                debug!(line = row.line, description = %row.description, "Ignoring row");
                report.rows_ignored += 1;
                continue;
            }

            let key = rules::base_key(&row.description);
            let device = devices
                .entry(key)
                .or_insert_with_key(|key| DeviceAccumulator::new(key.clone()));

            match rules::detect_field(&row.description, &row.address) {
                Some(field) => {
                    if let Some(previous) = device.assign(field, row.address.clone()) {
                        debug!(
                            device = %device.name,
                            %field,
                            %previous,
                            address = %row.address,
                            "Address replaced by later row"
                        );
                    }
                }
                None => {
                    debug!(line = row.line, description = %row.description, "No role recognized");
                    report.rows_unassigned += 1;
                }
            }
        }

        devices
    }

    /// Drop incomplete devices and sort the rest into categories
    fn classify(
        &self,
        devices: IndexMap<String, DeviceAccumulator>,
        report: &mut ConversionReport,
    ) -> KnxConfig {
        let mut config = KnxConfig::default();

        for device in devices.into_values() {
            if !device.is_complete() {
                debug!(device = %device.name, "Skipping device without address");
                report.devices_incomplete += 1;
                continue;
            }

            match self.classifier.classify(&device) {
                Verdict::Assign(category) => {
                    report.count(category);
                    match category {
                        DeviceCategory::Light => config.light.push(device.into()),
                        DeviceCategory::Fan => config.fan.push(device.into()),
                        DeviceCategory::Switch => config.switch.push(device.into()),
                        DeviceCategory::Climate => config.climate.push(device.into()),
                    }
                }
                Verdict::ExcludedSocket => {
                    debug!(device = %device.name, "Dropping light that is also a socket");
                    report.devices_excluded += 1;
                }
                Verdict::Unmatched => {
                    debug!(device = %device.name, "No category matched");
                    report.devices_unmatched += 1;
                }
            }
        }

        config
    }
}
