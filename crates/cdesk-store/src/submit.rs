//! The submit operation: validate, then persist.

use std::path::Path;

use crate::db::insert_customer;
use crate::error::SubmitError;
use crate::record::CustomerInput;

/// Validates the entered fields and appends one record to the store.
///
/// The only validation rule: `name` must be non-empty after trimming
/// surrounding whitespace. Every other field is accepted unconditionally,
/// empty strings included. On success returns the store-assigned id, strictly
/// greater than any previously assigned id.
///
/// No row is written on either failure path, so the caller may keep the
/// entered values and retry.
pub fn submit(db_path: &Path, input: &CustomerInput) -> Result<i64, SubmitError> {
    if input.name.trim().is_empty() {
        return Err(SubmitError::EmptyName);
    }

    let id = insert_customer(db_path, input)?;
    tracing::info!(id, "added customer '{}'", input.name);
    Ok(id)
}
