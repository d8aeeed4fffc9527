//! Tests for the validation+persistence submit path.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

use cdesk_store::{ContactMethod, CustomerInput, SubmitError, initialize, submit};

fn temp_db() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("customers.db");
    initialize(&path).expect("initialize");
    (dir, path)
}

/// One stored row, read back with a raw connection. The application itself
/// has no read path, so tests verify the store independently.
type StoredRow = (i64, String, String, String, String, String, String);

fn read_all(path: &Path) -> Vec<StoredRow> {
    let conn = Connection::open(path).expect("open");
    let mut stmt = conn
        .prepare(
            "SELECT id, name, birthday, email, phone, address, contact_method
             FROM customers ORDER BY id",
        )
        .expect("prepare");
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
            ))
        })
        .expect("query");
    rows.collect::<Result<Vec<_>, _>>().expect("rows")
}

fn jane() -> CustomerInput {
    CustomerInput {
        name: "Jane Doe".to_string(),
        birthday: "1990-05-01".to_string(),
        email: "jane@x.com".to_string(),
        phone: "555-1234".to_string(),
        address: "1 Main St".to_string(),
        contact_method: ContactMethod::Phone,
    }
}

#[test]
fn full_submit_appends_one_row() {
    let (_dir, db) = temp_db();

    let id = submit(&db, &jane()).expect("submit");

    let rows = read_all(&db);
    assert_eq!(rows.len(), 1);
    let (row_id, name, birthday, email, phone, address, method) = &rows[0];
    assert_eq!(*row_id, id);
    assert_eq!(name, "Jane Doe");
    assert_eq!(birthday, "1990-05-01");
    assert_eq!(email, "jane@x.com");
    assert_eq!(phone, "555-1234");
    assert_eq!(address, "1 Main St");
    assert_eq!(method, "Phone");
}

#[test]
fn empty_name_is_rejected_without_a_write() {
    let (_dir, db) = temp_db();

    let input = CustomerInput::default();
    let err = submit(&db, &input).expect_err("should fail");

    assert!(matches!(err, SubmitError::EmptyName));
    assert!(read_all(&db).is_empty());
}

#[test]
fn whitespace_only_name_is_rejected() {
    let (_dir, db) = temp_db();

    let input = CustomerInput {
        name: "  \t  ".to_string(),
        ..CustomerInput::default()
    };
    let err = submit(&db, &input).expect_err("should fail");

    assert!(matches!(err, SubmitError::EmptyName));
    assert!(read_all(&db).is_empty());
}

#[test]
fn unopenable_store_surfaces_persistence_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    // The directory itself is not an openable database file.
    let input = CustomerInput {
        name: "Bob".to_string(),
        ..CustomerInput::default()
    };
    let err = submit(dir.path(), &input).expect_err("should fail");

    assert!(matches!(err, SubmitError::Store(_)));
    assert!(err.to_string().contains("failed to open database"));
}

#[test]
fn sequential_submits_assign_increasing_ids() {
    let (_dir, db) = temp_db();

    let first = submit(&db, &jane()).expect("first submit");
    let second = CustomerInput {
        name: "John Roe".to_string(),
        contact_method: ContactMethod::Mail,
        ..CustomerInput::default()
    };
    let second_id = submit(&db, &second).expect("second submit");

    assert_eq!(second_id, first + 1);

    let rows = read_all(&db);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].1, "Jane Doe");
    assert_eq!(rows[1].1, "John Roe");
    assert_eq!(rows[1].6, "Mail");
}

#[test]
fn name_is_stored_untrimmed() {
    let (_dir, db) = temp_db();

    let input = CustomerInput {
        name: "  Jane Doe  ".to_string(),
        ..CustomerInput::default()
    };
    submit(&db, &input).expect("submit");

    let rows = read_all(&db);
    assert_eq!(rows[0].1, "  Jane Doe  ");
}

#[test]
fn empty_optional_fields_are_stored_as_empty_strings() {
    let (_dir, db) = temp_db();

    let input = CustomerInput {
        name: "Jane".to_string(),
        ..CustomerInput::default()
    };
    submit(&db, &input).expect("submit");

    let rows = read_all(&db);
    let (_, _, birthday, email, phone, address, method) = &rows[0];
    assert_eq!(birthday, "");
    assert_eq!(email, "");
    assert_eq!(phone, "");
    assert_eq!(address, "");
    assert_eq!(method, "Email");

    assert_eq!(ContactMethod::parse(method), Some(ContactMethod::Email));
}
