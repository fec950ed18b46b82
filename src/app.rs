//! Ledger run
//!
//! Opens the database, records the trade, commits and closes.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::AppConfig;
use crate::storage::database::Database;
use crate::storage::stocks::Trade;

/// Record the RHAT purchase into the configured database.
///
/// Not idempotent: the second run against the same file fails because the
/// `stocks` table already exists, and leaves the file untouched.
pub fn run(config: &AppConfig) -> Result<()> {
    let path = &config.database.path;
    info!("Writing trade ledger to {:?}", path);

    let mut db = Database::open(path)?;
    db.record_trade(&Trade::rhat_purchase())
        .with_context(|| format!("recording trade in {:?}", path))?;
    db.close()?;

    info!("Ledger written");
    Ok(())
}
