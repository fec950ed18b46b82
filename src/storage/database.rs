//! SQLite database for the trade ledger

use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

use super::error::{Result, StorageError};
use super::stocks::{self, Trade};

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened database at {:?}", path);
        Ok(Self { conn })
    }

    /// Create the `stocks` table and insert `trade` in a single transaction.
    ///
    /// Nothing is persisted unless every step succeeds; on error the
    /// transaction is rolled back when dropped.
    pub fn record_trade(&mut self, trade: &Trade) -> Result<()> {
        let tx = self.conn.transaction().map_err(StorageError::Transaction)?;

        stocks::create_table(&tx).map_err(StorageError::CreateTable)?;
        debug!("Created stocks table");

        stocks::insert_trade(&tx, trade).map_err(StorageError::Insert)?;
        debug!(symbol = %trade.symbol, trans = %trade.trans, "Inserted trade");

        tx.commit().map_err(StorageError::Transaction)?;
        info!("Committed {} {} of {}", trade.trans, trade.qty, trade.symbol);

        Ok(())
    }

    /// Close the connection, reporting any failure to do so
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_conn, e)| StorageError::Close(e))
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
