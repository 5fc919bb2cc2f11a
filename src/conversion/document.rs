//! Output Document
//!
//! Device records as they appear in the generated YAML. Unset addresses are
//! left out of the output rather than written as null.

use crate::conversion::accumulator::DeviceAccumulator;
use serde::{Deserialize, Serialize};

/// Light, fan or switch entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchableDevice {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness_state_address: Option<String>,
}

impl From<DeviceAccumulator> for SwitchableDevice {
    fn from(acc: DeviceAccumulator) -> Self {
        Self {
            name: acc.name,
            address: acc.address,
            state_address: acc.state_address,
            brightness_address: acc.brightness_address,
            brightness_state_address: acc.brightness_state_address,
        }
    }
}

/// Climate controller entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimateDevice {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_temperature_state_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setpoint_shift_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setpoint_shift_state_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_mode_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_mode_state_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_mode_frost_protection_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_mode_night_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_mode_comfort_address: Option<String>,
}

impl From<DeviceAccumulator> for ClimateDevice {
    fn from(acc: DeviceAccumulator) -> Self {
        Self {
            name: acc.name,
            temperature_address: acc.temperature_address,
            target_temperature_state_address: acc.target_temperature_state_address,
            setpoint_shift_address: acc.setpoint_shift_address,
            setpoint_shift_state_address: acc.setpoint_shift_state_address,
            operation_mode_address: acc.operation_mode_address,
            operation_mode_state_address: acc.operation_mode_state_address,
            operation_mode_frost_protection_address: acc.operation_mode_frost_protection_address,
            operation_mode_night_address: acc.operation_mode_night_address,
            operation_mode_comfort_address: acc.operation_mode_comfort_address,
        }
    }
}

/// The generated KNX configuration, one list per device domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnxConfig {
    #[serde(default)]
    pub light: Vec<SwitchableDevice>,
    #[serde(default)]
    pub fan: Vec<SwitchableDevice>,
    #[serde(default)]
    pub switch: Vec<SwitchableDevice>,
    #[serde(default)]
    pub climate: Vec<ClimateDevice>,
}

impl KnxConfig {
    /// Total number of device records
    pub fn device_count(&self) -> usize {
        self.light.len() + self.fan.len() + self.switch.len() + self.climate.len()
    }

    /// No device in any category
    pub fn is_empty(&self) -> bool {
        self.device_count() == 0
    }

    /// Render as a YAML document
    pub fn to_yaml(&self) -> crate::error::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
