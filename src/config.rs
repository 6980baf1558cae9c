//! Application configuration.
//!
//! Presentation preferences only; the datasets are never configurable.

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Paint the black page background instead of the terminal default.
    pub with_background_color: bool,
    /// Terminal width (columns) at which the Risk Wall grows to three columns.
    pub small_breakpoint: u16,
    /// Terminal width (columns) at which the panel grid switches to two columns.
    pub wide_breakpoint: u16,
    /// Duration of the scenario panel fade-in, in milliseconds.
    pub fade_in_ms: u64,
    /// Redraw interval of the interactive session, in milliseconds.
    pub tick_rate_ms: u64,
    /// Log file for interactive sessions. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            with_background_color: true,
            small_breakpoint: 80,
            wide_breakpoint: 120,
            fade_in_ms: 600,
            tick_rate_ms: 100,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns [`DashboardError::ConfigRead`] if the file cannot be read and
    /// [`DashboardError::ConfigParse`] if its JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path).map_err(|source| DashboardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_slice(&buf).map_err(|source| DashboardError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present, and built-in defaults otherwise. The result is validated.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, DashboardError> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match get_config_path() {
                Some(path) if path.exists() => Self::load_from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that breakpoints are ordered and timings are positive.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.small_breakpoint >= self.wide_breakpoint {
            return Err(DashboardError::InvalidConfig(format!(
                "small_breakpoint ({}) must be below wide_breakpoint ({})",
                self.small_breakpoint, self.wide_breakpoint
            )));
        }
        if self.tick_rate_ms == 0 {
            return Err(DashboardError::InvalidConfig(
                "tick_rate_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Default config location: `~/.risk-wall/config.json`.
pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".risk-wall").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Missing fields fall back to their defaults.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "wide_breakpoint": 140 }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.wide_breakpoint, 140);
        assert_eq!(config.small_breakpoint, 80);
        assert!(config.with_background_color);
        assert_eq!(config.log_file, None);
    }

    #[test]
    // An explicit path is loaded and validated.
    fn test_resolve_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let written = Config {
            with_background_color: false,
            fade_in_ms: 0,
            ..Config::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&written).unwrap()).unwrap();

        let config = Config::resolve(Some(&path)).unwrap();
        assert_eq!(config, written);
        assert_eq!(config.fade_in(), Duration::ZERO);
    }

    #[test]
    // An explicit path that does not exist is an error, not a silent default.
    fn test_resolve_missing_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let result = Config::resolve(Some(&path));
        assert!(matches!(result, Err(DashboardError::ConfigRead { .. })));
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(DashboardError::ConfigParse { .. })));
    }

    #[test]
    fn test_validate_rejects_unordered_breakpoints() {
        let config = Config {
            small_breakpoint: 120,
            wide_breakpoint: 100,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DashboardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_tick_rate() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}
