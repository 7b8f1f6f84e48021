//! Configuration system

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Runtime options for the light engine.
///
/// The trace flags route diagnostic output through the `log` facade; with
/// both off (the default) the engine emits nothing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LightsConfig {
    /// Log the per-light enablement table whenever the context changes
    pub trace_states: bool,
    /// Log each light's keyframe transition table at construction
    pub trace_transitions: bool,
}

impl Config for LightsConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lights_config_defaults_to_silent() {
        let config = LightsConfig::default();
        assert!(!config.trace_states);
        assert!(!config.trace_transitions);
    }

    #[test]
    fn lights_config_parses_partial_toml() {
        let config: LightsConfig = toml::from_str("trace_states = true").unwrap();
        assert!(config.trace_states);
        assert!(!config.trace_transitions);
    }

    #[test]
    fn lights_config_round_trips_through_files() {
        let dir = std::env::temp_dir();
        let path = dir.join("rail_lights_config_test.toml");
        let path = path.to_str().unwrap();

        let config = LightsConfig {
            trace_states: true,
            trace_transitions: false,
        };
        config.save_to_file(path).unwrap();
        let loaded = LightsConfig::load_from_file(path).unwrap();
        assert!(loaded.trace_states);
        assert!(!loaded.trace_transitions);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(matches!(
            LightsConfig::load_from_file("lights.yaml"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
