//! Application Configuration
//!
//! Settings stored in TOML format. Every section is optional; missing
//! values fall back to the defaults that reproduce the plain run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database settings
    pub database: DatabaseConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Database location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative paths resolve against the working directory
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("example.db"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `stocks_ledger=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Apply command line overrides on top of the loaded configuration
    pub fn with_overrides(mut self, database: Option<PathBuf>, verbose: bool) -> Self {
        if let Some(path) = database {
            self.database.path = path;
        }
        if verbose {
            self.logging.level = "debug".to_string();
        }
        self
    }
}

/// File name of the per-user configuration inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load `config.toml` from the per-user config directory.
///
/// A missing file yields the defaults; a file that exists but cannot be
/// read or parsed is an error.
pub fn load_default(config_dir: &Path) -> Result<AppConfig> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(AppConfig::default());
    }
    load_config(&config_path)
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {:?}", path))?;
    let config: AppConfig =
        toml::from_str(&content).with_context(|| format!("parsing config file {:?}", path))?;
    Ok(config)
}

/// Save configuration to file, creating its parent directory if needed
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
