//! Category Classifier
//!
//! Assigns each completed device to exactly one output category based on
//! its name. Rules are evaluated top to bottom and the first match wins,
//! so a light that is also a socket is dropped instead of falling through
//! to the switch rule.

use crate::conversion::accumulator::DeviceAccumulator;
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Categories
// =============================================================================

/// Output category of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Light,
    Fan,
    Switch,
    Climate,
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceCategory::Light => write!(f, "light"),
            DeviceCategory::Fan => write!(f, "fan"),
            DeviceCategory::Switch => write!(f, "switch"),
            DeviceCategory::Climate => write!(f, "climate"),
        }
    }
}

/// Outcome of classifying one device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Emit the device under this category
    Assign(DeviceCategory),
    /// Light name that also names a socket
    ExcludedSocket,
    /// No rule matched
    Unmatched,
}

// =============================================================================
// Rules
// =============================================================================

/// Name tokens, compared case-insensitively
const LIGHT_TOKENS: [&str; 2] = ["beleuchtung", "licht"];
const FAN_TOKEN: &str = "luefter";
const SOCKET_TOKEN: &str = "steckdose";

/// View of a device handed to rule predicates
struct Candidate<'a> {
    name_lower: String,
    device: &'a DeviceAccumulator,
}

impl Candidate<'_> {
    fn name_contains(&self, token: &str) -> bool {
        self.name_lower.contains(token)
    }

    fn is_light(&self) -> bool {
        LIGHT_TOKENS.iter().any(|token| self.name_contains(token))
    }
}

/// A single classification rule
struct CategoryRule {
    name: &'static str,
    matches: fn(&Candidate<'_>) -> bool,
    verdict: Verdict,
}

fn is_light_socket(c: &Candidate<'_>) -> bool {
    c.is_light() && c.name_contains(SOCKET_TOKEN)
}

fn is_light(c: &Candidate<'_>) -> bool {
    c.is_light()
}

fn is_fan(c: &Candidate<'_>) -> bool {
    c.name_contains(FAN_TOKEN)
}

fn is_socket(c: &Candidate<'_>) -> bool {
    c.name_contains(SOCKET_TOKEN)
}

fn is_climate(c: &Candidate<'_>) -> bool {
    c.device.has_climate_sensor()
}

const RULES: [CategoryRule; 5] = [
    CategoryRule {
        name: "light-socket-exclusion",
        matches: is_light_socket,
        verdict: Verdict::ExcludedSocket,
    },
    CategoryRule {
        name: "light",
        matches: is_light,
        verdict: Verdict::Assign(DeviceCategory::Light),
    },
    CategoryRule {
        name: "fan",
        matches: is_fan,
        verdict: Verdict::Assign(DeviceCategory::Fan),
    },
    CategoryRule {
        name: "switch",
        matches: is_socket,
        verdict: Verdict::Assign(DeviceCategory::Switch),
    },
    CategoryRule {
        name: "climate",
        matches: is_climate,
        verdict: Verdict::Assign(DeviceCategory::Climate),
    },
];

// =============================================================================
// Category Classifier
// =============================================================================

/// Classifies completed devices into output categories
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a device by its name and climate sensor
    pub fn classify(&self, device: &DeviceAccumulator) -> Verdict {
        let candidate = Candidate {
            name_lower: device.name.to_lowercase(),
            device,
        };

        for rule in &RULES {
            if (rule.matches)(&candidate) {
                debug!(device = %device.name, rule = rule.name, "Classification rule matched");
                return rule.verdict;
            }
        }

        Verdict::Unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::rules::AddressField;

    fn device(name: &str) -> DeviceAccumulator {
        let mut acc = DeviceAccumulator::new(name);
        acc.assign(AddressField::Address, "1/0/1");
        acc
    }

    #[test]
    fn test_light_tokens() {
        let classifier = CategoryClassifier::new();

        assert_eq!(
            classifier.classify(&device("Wohnzimmer licht")),
            Verdict::Assign(DeviceCategory::Light)
        );
        assert_eq!(
            classifier.classify(&device("Kueche Beleuchtung")),
            Verdict::Assign(DeviceCategory::Light)
        );
        assert_eq!(
            classifier.classify(&device("Flur LICHT")),
            Verdict::Assign(DeviceCategory::Light)
        );
        // substring, not word
        assert_eq!(
            classifier.classify(&device("Treppenlicht")),
            Verdict::Assign(DeviceCategory::Light)
        );
    }

    #[test]
    fn test_light_socket_is_dropped() {
        let classifier = CategoryClassifier::new();

        assert_eq!(
            classifier.classify(&device("Buero licht Steckdose")),
            Verdict::ExcludedSocket
        );
    }

    #[test]
    fn test_fan_and_switch() {
        let classifier = CategoryClassifier::new();

        assert_eq!(
            classifier.classify(&device("Bad Luefter")),
            Verdict::Assign(DeviceCategory::Fan)
        );
        assert_eq!(
            classifier.classify(&device("Kueche Steckdose")),
            Verdict::Assign(DeviceCategory::Switch)
        );
        // fan rule comes before the switch rule
        assert_eq!(
            classifier.classify(&device("Luefter Steckdose")),
            Verdict::Assign(DeviceCategory::Fan)
        );
    }

    #[test]
    fn test_climate_needs_climate_sensor() {
        let classifier = CategoryClassifier::new();

        let mut heating = DeviceAccumulator::new("Heizung Temperaturwert empfangen");
        heating.assign(AddressField::TemperatureAddress, "5/1/1");
        assert_eq!(
            classifier.classify(&heating),
            Verdict::Assign(DeviceCategory::Climate)
        );

        let mut other = DeviceAccumulator::new("Heizung");
        other.assign(AddressField::TemperatureAddress, "4/1/1");
        assert_eq!(classifier.classify(&other), Verdict::Unmatched);
    }

    #[test]
    fn test_name_rules_take_priority_over_climate() {
        let classifier = CategoryClassifier::new();

        let mut acc = DeviceAccumulator::new("Bad licht");
        acc.assign(AddressField::TemperatureAddress, "5/1/1");
        assert_eq!(
            classifier.classify(&acc),
            Verdict::Assign(DeviceCategory::Light)
        );
    }

    #[test]
    fn test_unmatched() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.classify(&device("Jalousie")), Verdict::Unmatched);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(DeviceCategory::Switch.to_string(), "switch");
        assert_eq!(DeviceCategory::Climate.to_string(), "climate");
    }
}
