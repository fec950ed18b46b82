//! Storage Layer
//!
//! Persists the trade ledger to a SQLite file.

pub mod database;
pub mod error;
pub mod stocks;

use anyhow::Result;
use std::path::PathBuf;

/// Get the configuration directory. The directory is not created.
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "stocksledger", "StocksLedger")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(proj_dirs.config_dir().to_path_buf())
}
