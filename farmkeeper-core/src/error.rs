//! Structured error types for farmkeeper-core.
//!
//! The state operations themselves are total and never fail. Errors only come
//! from the edges: reading configuration and parsing user-supplied names.
//! The binary crate wraps these in `anyhow` for context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for farmkeeper-core operations
#[derive(Error, Debug)]
pub enum FarmError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file exists but is not valid TOML for our schema
    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config file was requested explicitly but is missing
    #[error("Config not found at {path:?}")]
    ConfigNotFound { path: PathBuf },

    /// Unknown tab name (CLI flag or config value)
    #[error("Unknown tab '{name}' (expected dashboard, data, reports or alerts)")]
    InvalidTab { name: String },
}

/// Result type alias for farmkeeper-core operations
pub type Result<T> = std::result::Result<T, FarmError>;

impl FarmError {
    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid tab error
    pub fn invalid_tab(name: impl Into<String>) -> Self {
        Self::InvalidTab { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FarmError::invalid_tab("settings");
        assert_eq!(
            err.to_string(),
            "Unknown tab 'settings' (expected dashboard, data, reports or alerts)"
        );

        let err = FarmError::ConfigNotFound {
            path: PathBuf::from("/tmp/missing.toml"),
        };
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_io_from() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: FarmError = io_err.into();
        assert!(matches!(err, FarmError::Io { .. }));
    }
}
