//! Device Accumulator
//!
//! Collects the addresses of one device while rows sharing its base key
//! are folded in.

use crate::conversion::rules::{AddressField, CLIMATE_PREFIX};

/// In-progress record for one device
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceAccumulator {
    pub name: String,
    pub address: Option<String>,
    pub state_address: Option<String>,
    pub brightness_address: Option<String>,
    pub brightness_state_address: Option<String>,
    pub temperature_address: Option<String>,
    pub target_temperature_state_address: Option<String>,
    pub setpoint_shift_address: Option<String>,
    pub setpoint_shift_state_address: Option<String>,
    pub operation_mode_address: Option<String>,
    pub operation_mode_state_address: Option<String>,
    pub operation_mode_frost_protection_address: Option<String>,
    pub operation_mode_night_address: Option<String>,
    pub operation_mode_comfort_address: Option<String>,
}

impl DeviceAccumulator {
    /// Create an empty accumulator named after its base key
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn slot_mut(&mut self, field: AddressField) -> &mut Option<String> {
        match field {
            AddressField::Address => &mut self.address,
            AddressField::StateAddress => &mut self.state_address,
            AddressField::BrightnessAddress => &mut self.brightness_address,
            AddressField::BrightnessStateAddress => &mut self.brightness_state_address,
            AddressField::TemperatureAddress => &mut self.temperature_address,
            AddressField::TargetTemperatureStateAddress => {
                &mut self.target_temperature_state_address
            }
            AddressField::SetpointShiftAddress => &mut self.setpoint_shift_address,
            AddressField::SetpointShiftStateAddress => &mut self.setpoint_shift_state_address,
            AddressField::OperationModeAddress => &mut self.operation_mode_address,
            AddressField::OperationModeStateAddress => &mut self.operation_mode_state_address,
            AddressField::OperationModeFrostProtectionAddress => {
                &mut self.operation_mode_frost_protection_address
            }
            AddressField::OperationModeNightAddress => &mut self.operation_mode_night_address,
            AddressField::OperationModeComfortAddress => &mut self.operation_mode_comfort_address,
        }
    }

    /// Set a field, replacing any earlier value
    ///
    /// Returns the replaced address, if there was one.
    pub fn assign(&mut self, field: AddressField, address: impl Into<String>) -> Option<String> {
        self.slot_mut(field).replace(address.into())
    }

    /// Has a control or sensor channel and can be classified
    pub fn is_complete(&self) -> bool {
        self.address.is_some() || self.temperature_address.is_some()
    }

    /// Temperature address lies in the climate main group
    pub fn has_climate_sensor(&self) -> bool {
        self.temperature_address
            .as_deref()
            .map(|address| address.starts_with(CLIMATE_PREFIX))
            .unwrap_or(false)
    }
}
