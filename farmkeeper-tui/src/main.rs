use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use farmkeeper_core::{FarmConfig, Tab};
use farmkeeper_tui::tracing_setup::{self, TracingConfig};
use farmkeeper_tui::App;

/// FarmKeeper: poultry farm dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "farmkeeper", version)]
struct Cli {
    /// Tab to open on start (dashboard, data, reports, alerts)
    #[arg(long, short)]
    tab: Option<Tab>,

    /// Path to config file (default: ~/.farmkeeper/config.toml)
    #[arg(long, env = "FARMKEEPER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Append logs to this file (overrides config)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = FarmConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(tab) = cli.tab {
        config.ui.initial_tab = tab;
    }

    let tracing_config = TracingConfig {
        debug: cli.debug,
        level: config.logging.level.clone(),
        file: cli.log_file.or_else(|| config.logging.file.clone()),
    };
    tracing_setup::init(&tracing_config).context("Failed to initialize logging")?;

    let mut app = App::from_config(&config);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));

    if let Err(err) = farmkeeper_tui::run(&mut app, tick_rate) {
        tracing::error!(error = %err, "farmkeeper exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}
