//! stocks-ledger - records a stock trade into a local SQLite database
//!
//! Creates the `stocks` table, inserts one trade and commits.

mod app;
mod config;
mod storage;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;

/// stocks-ledger - record a trade in a SQLite ledger
#[derive(Parser, Debug)]
#[command(name = "stocks-ledger")]
#[command(about = "Create the stocks table and record one trade")]
struct Args {
    /// Database file (default: example.db in the working directory)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Configuration file to load instead of the per-user one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Write the effective configuration to this file and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => load_default_config()?,
    }
    .with_overrides(args.database, args.verbose);

    if let Some(path) = &args.write_config {
        config::save_config(&config, path)?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    app::run(&config)?;

    info!("stocks-ledger done");
    Ok(())
}

/// Load the per-user configuration file if present, otherwise defaults.
///
/// Only a missing file or an undeterminable config directory falls back to
/// the defaults; a broken file is reported.
fn load_default_config() -> Result<AppConfig> {
    match storage::get_config_dir() {
        Ok(config_dir) => config::load_default(&config_dir),
        Err(_) => Ok(AppConfig::default()),
    }
}
