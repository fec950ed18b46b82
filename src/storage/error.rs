//! Storage-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the ledger database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database file could not be opened or created.
    #[error("failed to open database at {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The `stocks` table could not be created (usually: it already exists).
    #[error("failed to create stocks table")]
    CreateTable(#[source] rusqlite::Error),

    /// The trade row could not be inserted.
    #[error("failed to insert trade")]
    Insert(#[source] rusqlite::Error),

    /// Beginning or committing the transaction failed.
    #[error("transaction failed")]
    Transaction(#[source] rusqlite::Error),

    /// The connection reported an error while closing.
    #[error("failed to close database")]
    Close(#[source] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
