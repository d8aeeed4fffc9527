//! Customer record model and SQLite store for Customer Desk.
//!
//! This crate holds everything the GUI does not: the customer record types,
//! the schema initializer, and the validation+persistence `submit` path.
//! Keeping this logic free of UI-toolkit types makes the whole write path
//! testable against a throwaway database file.
//!
//! Connections are scoped: every operation opens its own connection, runs a
//! single statement, and releases the connection on return. There is no
//! pooling and no shared handle, because there is no concurrent writer.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cdesk_store::{initialize, submit, ContactMethod, CustomerInput};
//!
//! let db = Path::new("customers.db");
//! initialize(db)?;
//!
//! let input = CustomerInput {
//!     name: "Jane Doe".to_string(),
//!     contact_method: ContactMethod::Phone,
//!     ..CustomerInput::default()
//! };
//! let id = submit(db, &input)?;
//! ```

mod db;
mod error;
mod record;
mod submit;

// === Error Types ===
pub use error::{Result, StoreError, SubmitError};

// === Record Model ===
pub use record::{ContactMethod, CustomerInput, CustomerRecord};

// === Store Operations ===
pub use db::{initialize, insert_customer};

// === Submit Path ===
pub use submit::submit;
