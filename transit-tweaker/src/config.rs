//! Mod configuration loaded from `config/config.json5`.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::tables::GridSize;

/// Location of the configuration file relative to the mod directory.
pub const CONFIG_RELATIVE_PATH: &str = "config/config.json5";

/// Errors raised while reading or validating the mod configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] json5::Error),
    #[error("{field} must be a finite number greater than zero (got {value})")]
    NonPositiveMultiplier { field: &'static str, value: f64 },
    #[error("{field} must be at least 1 (got {value})")]
    EmptyGridDimension { field: &'static str, value: u32 },
}

/// Stash size configured for transit containers. `z` is accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredGridSize {
    pub x: u32,
    pub y: u32,
    #[serde(default, skip_serializing)]
    pub z: u32,
}

impl ConfiguredGridSize {
    /// Fresh host grid value for a single fence level, with `z` forced to 0.
    #[must_use]
    pub const fn to_grid(self) -> GridSize {
        GridSize {
            x: self.x,
            y: self.y,
            z: 0,
        }
    }
}

/// Multipliers and switches read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweakerConfig {
    #[serde(default)]
    pub debug: bool,
    pub transit_cost_multiplier: f64,
    pub transit_grid_size: ConfiguredGridSize,
    pub transit_time_multiplier: f64,
}

impl Default for TweakerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            transit_cost_multiplier: 1.0,
            transit_grid_size: ConfiguredGridSize { x: 3, y: 3, z: 0 },
            transit_time_multiplier: 1.0,
        }
    }
}

impl TweakerConfig {
    /// Parse and validate a JSON5 document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, misses a required field,
    /// or carries an out-of-range value.
    pub fn from_json5(source: &str) -> Result<Self, ConfigError> {
        let config: Self = json5::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Self::from_json5`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json5(&source)
    }

    /// Reject values that would corrupt host tables.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("transitCostMultiplier", self.transit_cost_multiplier),
            ("transitTimeMultiplier", self.transit_time_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveMultiplier { field, value });
            }
        }
        for (field, value) in [
            ("transitGridSize.x", self.transit_grid_size.x),
            ("transitGridSize.y", self.transit_grid_size.y),
        ] {
            if value == 0 {
                return Err(ConfigError::EmptyGridDimension { field, value });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Reads the configuration from `config/config.json5` under a mod directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    /// Loader for an explicit configuration file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loader for the configuration shipped beside the mod.
    pub fn beside(mod_dir: impl AsRef<Path>) -> Self {
        Self::new(mod_dir.as_ref().join(CONFIG_RELATIVE_PATH))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl crate::ConfigLoader for FileConfigLoader {
    type Error = ConfigError;

    fn load_config(&self) -> Result<TweakerConfig, Self::Error> {
        TweakerConfig::load(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commented_config_and_ignores_unknown_fields() {
        let source = r#"{
            // chatty
            debug: true,
            transitCostMultiplier: 2.5,
            transitGridSize: { x: 4, y: 6, z: 9 },
            transitTimeMultiplier: 0.5,
            somethingElse: "ignored",
        }"#;
        let config = TweakerConfig::from_json5(source).unwrap();
        assert!(config.debug);
        assert!((config.transit_cost_multiplier - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.transit_grid_size.x, 4);
        assert_eq!(config.transit_grid_size.y, 6);
        assert_eq!(config.transit_grid_size.to_grid().z, 0);
    }

    #[test]
    fn debug_defaults_to_off() {
        let source = r#"{
            "transitCostMultiplier": 1,
            "transitGridSize": { "x": 2, "y": 2 },
            "transitTimeMultiplier": 1
        }"#;
        let config = TweakerConfig::from_json5(source).unwrap();
        assert!(!config.debug);
    }

    #[test]
    fn missing_multiplier_is_a_parse_error() {
        let source = r"{ transitGridSize: { x: 2, y: 2 }, transitTimeMultiplier: 1 }";
        let err = TweakerConfig::from_json5(source).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("transitCostMultiplier"));
    }

    #[test]
    fn non_positive_multipliers_are_rejected() {
        let source = r"{
            transitCostMultiplier: 0,
            transitGridSize: { x: 2, y: 2 },
            transitTimeMultiplier: 1,
        }";
        let err = TweakerConfig::from_json5(source).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositiveMultiplier {
                field: "transitCostMultiplier",
                ..
            }
        ));

        let config = TweakerConfig {
            transit_time_multiplier: f64::NAN,
            ..TweakerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveMultiplier {
                field: "transitTimeMultiplier",
                ..
            })
        ));
    }

    #[test]
    fn zero_grid_dimension_is_rejected() {
        let config = TweakerConfig {
            transit_grid_size: ConfiguredGridSize { x: 3, y: 0, z: 0 },
            ..TweakerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "transitGridSize.y must be at least 1 (got 0)");
    }

    #[test]
    fn negative_grid_dimension_fails_to_parse() {
        let source = r"{
            transitCostMultiplier: 1,
            transitGridSize: { x: -1, y: 2 },
            transitTimeMultiplier: 1,
        }";
        assert!(matches!(
            TweakerConfig::from_json5(source),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("transit-tweaker-missing/config.json5");
        let err = TweakerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("transit-tweaker-missing"));
    }

    #[test]
    fn beside_resolves_shipped_location() {
        let loader = FileConfigLoader::beside("/srv/mods/transit-tweaker");
        assert_eq!(
            loader.path(),
            Path::new("/srv/mods/transit-tweaker/config/config.json5")
        );
    }

    #[test]
    fn default_config_is_valid() {
        assert!(TweakerConfig::default().validate().is_ok());
        assert!(TweakerConfig::default().with_debug(true).debug);
    }
}
