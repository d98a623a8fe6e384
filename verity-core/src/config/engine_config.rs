//! Engine configuration loaded from TOML.
//!
//! Only operational toggles live here. The heuristic probability constants
//! (clamp bounds, blend weight, decay factors) are fixed in
//! [`crate::constants`] and intentionally not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SOURCES_PER_FINDING;
use crate::errors::ConfigError;

/// Configuration for the Verity evidence engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum sources considered per finding. Default: 5.
    pub max_sources: Option<usize>,
    /// Enable quantitative contradiction checks. Default: true.
    pub detect_quantitative: Option<bool>,
    /// Enable temporal contradiction checks. Default: true.
    pub detect_temporal: Option<bool>,
    /// Enable interpretive (sentiment) contradiction checks. Default: true.
    pub detect_interpretive: Option<bool>,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Validate loaded values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(0) = self.max_sources {
            return Err(ConfigError::InvalidValue {
                field: "max_sources".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the effective source cap, defaulting to 5.
    pub fn effective_max_sources(&self) -> usize {
        self.max_sources.unwrap_or(MAX_SOURCES_PER_FINDING)
    }

    /// Returns whether quantitative checks run, defaulting to true.
    pub fn effective_detect_quantitative(&self) -> bool {
        self.detect_quantitative.unwrap_or(true)
    }

    /// Returns whether temporal checks run, defaulting to true.
    pub fn effective_detect_temporal(&self) -> bool {
        self.detect_temporal.unwrap_or(true)
    }

    /// Returns whether interpretive checks run, defaulting to true.
    pub fn effective_detect_interpretive(&self) -> bool {
        self.detect_interpretive.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.effective_max_sources(), 5);
        assert!(config.effective_detect_quantitative());
        assert!(config.effective_detect_temporal());
        assert!(config.effective_detect_interpretive());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: EngineConfig =
            toml::from_str("max_sources = 3\ndetect_temporal = false").unwrap();
        assert_eq!(config.effective_max_sources(), 3);
        assert!(!config.effective_detect_temporal());
        assert!(config.effective_detect_interpretive());
    }

    #[test]
    fn test_zero_max_sources_rejected() {
        let config = EngineConfig {
            max_sources: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/verity.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verity.toml");
        std::fs::write(&path, "max_sources = 4").unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.effective_max_sources(), 4);
    }
}
