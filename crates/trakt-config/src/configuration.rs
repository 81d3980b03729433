//! Sensor configuration
//!
//! Parses the `sensors:` section of the integration's configuration. Each
//! sensor category maps kind identifiers to their settings; a sensor entity
//! exists for a (category, identifier) combination iff that identifier is
//! present in the category's map.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Items shown by an upcoming sensor when no maximum is configured
pub const DEFAULT_MAX_MEDIAS: usize = 3;

fn default_max_medias() -> usize {
    DEFAULT_MAX_MEDIAS
}

/// Settings for one upcoming sensor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingConfig {
    /// Maximum number of items shown by the sensor
    #[serde(default = "default_max_medias")]
    pub max_medias: usize,
}

impl Default for UpcomingConfig {
    fn default() -> Self {
        Self {
            max_medias: DEFAULT_MAX_MEDIAS,
        }
    }
}

/// Settings for one recommendation sensor
///
/// Recommendation data is never truncated; presence of the identifier in the
/// `recommendation:` map is the enablement switch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_medias: Option<usize>,
}

/// Per-category sensor enablement and settings, keyed by kind identifier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorsConfig {
    #[serde(default)]
    pub upcoming: IndexMap<String, UpcomingConfig>,
    #[serde(default)]
    pub all_upcoming: IndexMap<String, UpcomingConfig>,
    #[serde(default)]
    pub recommendation: IndexMap<String, RecommendationConfig>,
}

/// Read-only view over the integration's persisted configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub sensors: SensorsConfig,
}

impl Configuration {
    /// Parse a configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::ParseYaml { source })
    }

    /// Load a configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading Trakt configuration from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    fn upcoming_section(&self, all_medias: bool) -> &IndexMap<String, UpcomingConfig> {
        if all_medias {
            &self.sensors.all_upcoming
        } else {
            &self.sensors.upcoming
        }
    }

    /// Whether an upcoming sensor is enabled for this identifier and variant
    pub fn upcoming_identifier_exists(&self, identifier: &str, all_medias: bool) -> bool {
        self.upcoming_section(all_medias).contains_key(identifier)
    }

    /// Whether a recommendation sensor is enabled for this identifier
    pub fn recommendation_identifier_exists(&self, identifier: &str) -> bool {
        self.sensors.recommendation.contains_key(identifier)
    }

    /// Configured maximum for an upcoming sensor, if the identifier is enabled
    pub fn upcoming_max_medias(&self, identifier: &str, all_medias: bool) -> Option<usize> {
        self.upcoming_section(all_medias)
            .get(identifier)
            .map(|config| config.max_medias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
sensors:
  upcoming:
    movie:
      max_medias: 3
    show:
      max_medias: 5
  all_upcoming:
    show:
      max_medias: 2
  recommendation:
    movie: {}
"#;

    #[test]
    fn test_membership() {
        let config = Configuration::from_yaml_str(YAML).unwrap();

        assert!(config.upcoming_identifier_exists("movie", false));
        assert!(config.upcoming_identifier_exists("show", false));
        assert!(!config.upcoming_identifier_exists("movie", true));
        assert!(config.upcoming_identifier_exists("show", true));

        assert!(config.recommendation_identifier_exists("movie"));
        assert!(!config.recommendation_identifier_exists("show"));
    }

    #[test]
    fn test_max_medias() {
        let config = Configuration::from_yaml_str(YAML).unwrap();

        assert_eq!(config.upcoming_max_medias("movie", false), Some(3));
        assert_eq!(config.upcoming_max_medias("show", false), Some(5));
        assert_eq!(config.upcoming_max_medias("show", true), Some(2));
        assert_eq!(config.upcoming_max_medias("movie", true), None);
        assert_eq!(config.upcoming_max_medias("premiere", false), None);
    }

    #[test]
    fn test_max_medias_default() {
        let config = Configuration::from_yaml_str(
            "sensors:\n  upcoming:\n    movie: {}\n",
        )
        .unwrap();
        assert_eq!(
            config.upcoming_max_medias("movie", false),
            Some(DEFAULT_MAX_MEDIAS)
        );
    }

    #[test]
    fn test_empty_configuration() {
        let config = Configuration::from_yaml_str("{}").unwrap();
        assert!(!config.upcoming_identifier_exists("movie", false));
        assert!(!config.recommendation_identifier_exists("movie"));
        assert_eq!(config.upcoming_max_medias("movie", false), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let config = Configuration::load(file.path()).unwrap();
        assert!(config.upcoming_identifier_exists("movie", false));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Configuration::load("/nonexistent/trakt.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = Configuration::from_yaml_str("sensors: [not, a, mapping]").unwrap_err();
        assert!(matches!(err, ConfigError::ParseYaml { .. }));
    }
}
