//! Error types for the customer store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while touching the SQLite store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The parent directory for the database file could not be created.
    #[error("failed to create database directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The customers table could not be created.
    #[error("failed to create customers table: {source}")]
    Schema {
        #[source]
        source: rusqlite::Error,
    },

    /// The insert statement failed.
    #[error("failed to insert customer record: {source}")]
    Insert {
        #[source]
        source: rusqlite::Error,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the submit path.
///
/// The form recognizes exactly two failure kinds: a missing name, recovered
/// by the user correcting the field, and a store failure, recovered by
/// retrying with the entered values intact. Every store-layer failure
/// collapses into [`SubmitError::Store`].
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The name field is empty after trimming whitespace.
    #[error("the 'Name' field is required")]
    EmptyName,

    /// The store rejected the write or could not be reached.
    #[error(transparent)]
    Store(#[from] StoreError),
}
