use departments_core::{open_db, open_db_in_memory, StorageContext};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_enables_foreign_keys() {
    let ctx = open_db_in_memory().unwrap();

    assert_eq!(foreign_keys(ctx.connection()), 1);
    assert_eq!(ctx.cached_departments(), 0);
}

#[test]
fn open_db_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("company.db");
    assert!(!path.exists());

    let ctx = open_db(&path).unwrap();
    assert_eq!(foreign_keys(ctx.connection()), 1);
    drop(ctx);
    assert!(path.exists());
}

#[test]
fn open_db_reports_unopenable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("company.db");

    assert!(open_db(&path).is_err());
}

#[test]
fn context_round_trips_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let ctx = StorageContext::from_connection(conn);
    assert!(ctx.departments().is_empty());

    let conn = ctx.into_connection();
    let one: i64 = conn.query_row("SELECT 1;", [], |row| row.get(0)).unwrap();
    assert_eq!(one, 1);
}

fn foreign_keys(conn: &Connection) -> i64 {
    conn.query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap()
}
