//! Configuration profiles
//!
//! A Configuration is a saved profile containing every generator and filter
//! setting, so a particular view of the signal can be restored later.

use serde::{Deserialize, Serialize};

use super::types::{FilterSettings, GeneratorParams};

/// A saved configuration profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Profile name (e.g., "Default", "Heavy noise")
    pub name: String,
    /// Waveform and noise parameters
    #[serde(default)]
    pub generator: GeneratorParams,
    /// Selected filter plus the parameters of every filter
    #[serde(default)]
    pub filter: FilterSettings,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            generator: GeneratorParams::default(),
            filter: FilterSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterKind;

    #[test]
    fn default_configuration_has_sensible_values() {
        let config = Configuration::default();
        assert_eq!(config.name, "Default");
        assert_eq!(config.generator.amplitude, 1.0);
        assert_eq!(config.generator.noise_dispersion, 0.1);
        assert!(config.generator.include_noise);
        assert_eq!(config.filter.kind, FilterKind::None);
        assert_eq!(config.filter.gaussian_window, 5);
        assert_eq!(config.filter.alpha, 0.6);
    }

    #[test]
    fn configuration_serializes_to_json() {
        let config = Configuration::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"name\":\"Default\""));
        assert!(json.contains("\"kind\":\"none\""));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let json = r#"{"name":"Sparse","filter":{"kind":"gaussian"}}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(config.generator, GeneratorParams::default());
        assert_eq!(config.filter.kind, FilterKind::Gaussian);
        assert_eq!(config.filter.gaussian_sigma, 2.0);
    }
}
