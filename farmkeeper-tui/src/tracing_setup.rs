//! Tracing setup for the farmkeeper TUI
//!
//! The terminal is owned by the UI, so log output never goes to stdout.
//! It is written to a log file when one is configured and dropped otherwise.
//!
//! Usage:
//!   farmkeeper --debug --log-file /tmp/farmkeeper.log
//!   RUST_LOG=farmkeeper_core=debug farmkeeper --log-file ...
//!
//! Environment variables:
//!   RUST_LOG                          # Log filter (default: config level, else info)

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Enable debug logging (sets debug level unless RUST_LOG is set)
    pub debug: bool,
    /// Filter used when RUST_LOG is unset
    pub level: String,
    /// Where to append log lines
    pub file: Option<PathBuf>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        let fallback = if self.debug { "debug" } else { self.level.as_str() };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

/// Initialize tracing based on configuration
pub fn init(config: &TracingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug)
        .with_ansi(false)
        .compact();

    match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .context(format!("Failed to create log directory: {:?}", parent))?;
                }
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .context(format!("Failed to open log file: {:?}", path))?;

            builder
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| anyhow!(err))
        }
        None => builder
            .with_writer(std::io::sink)
            .try_init()
            .map_err(|err| anyhow!(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert!(!config.debug);
        assert_eq!(config.level, "info");
        assert!(config.file.is_none());
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("farmkeeper.log");
        let config = TracingConfig {
            debug: true,
            level: "info".to_string(),
            file: Some(path.clone()),
        };

        // A global subscriber may already be set by another test; the file is
        // opened before that matters.
        let _ = init(&config);
        assert!(path.exists());
    }
}
