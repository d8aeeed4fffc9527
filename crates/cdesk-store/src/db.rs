//! Schema initialization and the single-table write path.
//!
//! Both operations acquire their own connection and release it on return,
//! error paths included. `rusqlite::Connection` closes on drop, so the scope
//! of each function is the scope of its connection.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::error::{Result, StoreError};
use crate::record::CustomerInput;

const CREATE_CUSTOMERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS customers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    birthday TEXT,
    email TEXT,
    phone TEXT,
    address TEXT,
    contact_method TEXT
)";

const INSERT_CUSTOMER: &str = "\
INSERT INTO customers (name, birthday, email, phone, address, contact_method)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

/// Ensures the customers table exists in the store at `db_path`.
///
/// Safe to call on every process start: `CREATE TABLE IF NOT EXISTS` leaves
/// an existing table and its rows untouched. The parent directory is created
/// first when the store lives under a data directory that does not exist yet.
pub fn initialize(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let conn = open(db_path)?;
    conn.execute(CREATE_CUSTOMERS_TABLE, [])
        .map_err(|source| StoreError::Schema { source })?;

    tracing::info!("customers table ready at {}", db_path.display());
    Ok(())
}

/// Appends one customer record and returns the store-assigned id.
///
/// A single parameter-bound statement; field values are stored exactly as
/// given, empty strings included.
pub fn insert_customer(db_path: &Path, input: &CustomerInput) -> Result<i64> {
    let conn = open(db_path)?;
    conn.execute(
        INSERT_CUSTOMER,
        params![
            input.name,
            input.birthday,
            input.email,
            input.phone,
            input.address,
            input.contact_method.as_str(),
        ],
    )
    .map_err(|source| StoreError::Insert { source })?;

    Ok(conn.last_insert_rowid())
}

fn open(db_path: &Path) -> Result<Connection> {
    Connection::open(db_path).map_err(|source| StoreError::Open {
        path: db_path.to_path_buf(),
        source,
    })
}
