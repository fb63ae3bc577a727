use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FarmError, Result};
use crate::model::Tab;

/// Environment variable naming a config file when no path is passed
pub const CONFIG_ENV: &str = "FARMKEEPER_CONFIG";

/// Settings for the farmkeeper screen, read from `~/.farmkeeper/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    pub initial_tab: Tab,
    /// Show type hints under data form fields
    pub show_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            initial_tab: Tab::Dashboard,
            show_hints: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    pub level: String,
    /// Log destination. Logs are discarded when unset, since stdout belongs to the TUI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl FarmConfig {
    /// Default config path: ~/.farmkeeper/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".farmkeeper/config.toml")
    }

    /// Load config.
    ///
    /// An explicit path (argument, then `FARMKEEPER_CONFIG`) must exist.
    /// The default path is optional and falls back to defaults when missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(FarmError::ConfigNotFound { path });
                }
                Self::from_file(&path)
            }
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|err| FarmError::config_parse(path, err))
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FarmConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.initial_tab, Tab::Dashboard);
        assert!(config.ui.show_hints);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FarmConfig::from_toml(
            r#"
            [ui]
            initial_tab = "alerts"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.initial_tab, Tab::Alerts);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = FarmConfig::from_toml(
            r#"
            [ui]
            tick_rate_ms = 250
            initial_tab = "reports"
            show_hints = false

            [logging]
            level = "debug"
            file = "/tmp/farmkeeper.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.ui.initial_tab, Tab::Reports);
        assert!(!config.ui.show_hints);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/farmkeeper.log")));
    }

    #[test]
    fn test_unknown_tab_rejected() {
        assert!(FarmConfig::from_toml("[ui]\ninitial_tab = \"settings\"\n").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ninitial_tab = \"data\"").unwrap();

        let config = FarmConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.ui.initial_tab, Tab::Data);
    }

    #[test]
    fn test_load_explicit_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = FarmConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, FarmError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui\ntick_rate_ms = ").unwrap();

        let err = FarmConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, FarmError::ConfigParse { .. }));
    }
}
