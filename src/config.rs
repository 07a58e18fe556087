//! Layered settings for the gauss-sum binary.
//!
//! Sources, lowest to highest precedence:
//! - Default values
//! - TOML file passed with `--config`
//! - Environment variables
//!
//! Settings only shape ambient behavior (logging). Nothing here changes the
//! bound that is read or the sum that is printed.
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `GAUSS_SUM_` and use double
//! underscores to separate nested levels:
//! - `GAUSS_SUM_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `GAUSS_SUM_LOGGING__MODULES__GAUSS_SUM=trace` sets `logging.modules.gauss_sum`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "GAUSS_SUM_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level applied to every target without an explicit entry
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target level overrides, e.g. `gauss_sum = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load defaults layered with environment overrides.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::figment(None).extract().map_err(Box::new)
    }

    /// Load defaults, then `path`, then environment overrides.
    ///
    /// A missing file is an error here; figment would otherwise skip it
    /// silently and the user would never learn the flag had no effect.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }
        Self::figment(Some(path)).extract().map_err(Box::new)
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        // Double underscore separates nesting levels; single underscores
        // stay inside field names.
        figment.merge(
            Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().replace("__", ".").into()),
        )
    }

    /// Render as pretty TOML, as logged at debug level on startup.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.logging.default, "warn");
        assert!(settings.logging.modules.is_empty());
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        let toml_content = r#"
version = 2

[logging]
default = "info"

[logging.modules]
gauss_sum = "trace"
"#;

        fs::write(&config_path, toml_content).unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.version, 2);
        assert_eq!(settings.logging.default, "info");
        assert_eq!(settings.logging.modules["gauss_sum"], "trace");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        fs::write(&config_path, "[logging.modules]\ngauss_sum = \"debug\"\n").unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.logging.default, "warn");
        assert_eq!(settings.logging.modules.len(), 1);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Settings::load_from(temp_dir.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[logging\ndefault = ").unwrap();

        assert!(Settings::load_from(&config_path).is_err());
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.logging.default = "error".to_string();
        fs::write(&config_path, settings.to_toml().unwrap()).unwrap();

        let loaded = Settings::load_from(&config_path).unwrap();
        assert_eq!(loaded.logging.default, "error");
    }
}
