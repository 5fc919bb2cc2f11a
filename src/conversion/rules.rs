//! Row Rules
//!
//! Fixed rules applied to a single ETS row: the ignore filter, base key
//! derivation and role detection. ETS descriptions carry the role of an
//! address as a German abbreviation appended to the device name, e.g.
//! "Wohnzimmer licht sch" (switch) and "Wohnzimmer licht RMsch" (status).

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// Constants
// =============================================================================

/// Description suffixes marking rows that are not imported
pub const IGNORED_SUFFIXES: [&str; 3] = ["dim", "---", "-"];

/// Main group used for climate addresses
pub const CLIMATE_PREFIX: &str = "5/";

/// Status suffix of a switch role
pub const SWITCH_STATUS_SUFFIX: &str = "RMsch";

/// Status suffix of a value role
pub const VALUE_STATUS_SUFFIX: &str = "RMwert";

/// Role suffix and everything after it
static ROLE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" sch.*$| RMsch.*$| wert.*$| RMwert.*$").unwrap());

/// " - " separator and everything after it
static DASH_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r" - .*$").unwrap());

// Token followed by an ASCII word boundary, so "Tisch" and "RMsch" count too.
static SWITCH_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sch(?:[^A-Za-z0-9_]|$)").unwrap());

static VALUE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)wert(?:[^A-Za-z0-9_]|$)").unwrap());

// =============================================================================
// Address Fields
// =============================================================================

/// Every address slot a device accumulator can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Address,
    StateAddress,
    BrightnessAddress,
    BrightnessStateAddress,
    TemperatureAddress,
    TargetTemperatureStateAddress,
    SetpointShiftAddress,
    SetpointShiftStateAddress,
    OperationModeAddress,
    OperationModeStateAddress,
    OperationModeFrostProtectionAddress,
    OperationModeNightAddress,
    OperationModeComfortAddress,
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AddressField::Address => "address",
            AddressField::StateAddress => "state_address",
            AddressField::BrightnessAddress => "brightness_address",
            AddressField::BrightnessStateAddress => "brightness_state_address",
            AddressField::TemperatureAddress => "temperature_address",
            AddressField::TargetTemperatureStateAddress => "target_temperature_state_address",
            AddressField::SetpointShiftAddress => "setpoint_shift_address",
            AddressField::SetpointShiftStateAddress => "setpoint_shift_state_address",
            AddressField::OperationModeAddress => "operation_mode_address",
            AddressField::OperationModeStateAddress => "operation_mode_state_address",
            AddressField::OperationModeFrostProtectionAddress => {
                "operation_mode_frost_protection_address"
            }
            AddressField::OperationModeNightAddress => "operation_mode_night_address",
            AddressField::OperationModeComfortAddress => "operation_mode_comfort_address",
        };
        write!(f, "{}", name)
    }
}

/// Climate description endings, checked in order
pub const CLIMATE_PHRASES: [(&str, AddressField); 8] = [
    ("Temperaturwert empfangen", AddressField::TemperatureAddress),
    ("Sollwert vorgeben", AddressField::SetpointShiftAddress),
    ("Status Sollwertverschiebung", AddressField::SetpointShiftStateAddress),
    ("Aktueller Sollwert senden", AddressField::TargetTemperatureStateAddress),
    ("Betriebsartvorwahl", AddressField::OperationModeStateAddress),
    (
        "Betriebsart Frostschutz schalten",
        AddressField::OperationModeFrostProtectionAddress,
    ),
    ("Betriebsart Nacht schalten", AddressField::OperationModeNightAddress),
    ("Betriebsart Komfort schalten", AddressField::OperationModeComfortAddress),
];

// =============================================================================
// Rules
// =============================================================================

/// Check whether a row should be skipped entirely
pub fn is_ignored(description: &str) -> bool {
    IGNORED_SUFFIXES
        .iter()
        .any(|suffix| description.ends_with(suffix))
}

/// Derive the grouping key shared by all rows of one device
pub fn base_key(description: &str) -> String {
    let without_role = ROLE_SUFFIX.replace(description, "");
    let without_dash = DASH_SUFFIX.replace(&without_role, "");
    without_dash.trim().to_string()
}

/// Determine which field a row fills, if any
///
/// Climate addresses are matched on their exact German phrase; everything
/// else is recognized by its switch or value token.
pub fn detect_field(description: &str, address: &str) -> Option<AddressField> {
    if address.starts_with(CLIMATE_PREFIX) {
        return CLIMATE_PHRASES
            .iter()
            .find(|(phrase, _)| description.ends_with(phrase))
            .map(|(_, field)| *field);
    }

    if SWITCH_WORD.is_match(description) {
        return Some(if description.ends_with(SWITCH_STATUS_SUFFIX) {
            AddressField::StateAddress
        } else {
            AddressField::Address
        });
    }

    if VALUE_WORD.is_match(description) {
        return Some(if description.ends_with(VALUE_STATUS_SUFFIX) {
            AddressField::BrightnessStateAddress
        } else {
            AddressField::BrightnessAddress
        });
    }

    None
}
