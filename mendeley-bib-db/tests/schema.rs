use mendeley_bib_db::schema::{create_schema, REQUIRED_TABLES};
use mendeley_bib_db::{open_memory, open_read_only, verify_schema, SchemaError};
use rusqlite::Connection;
use tempfile::TempDir;

#[test]
fn fixture_schema_has_required_tables() {
    let conn = open_memory().unwrap();
    for table in REQUIRED_TABLES {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [*table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
    verify_schema(&conn).unwrap();
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn missing_table_is_reported() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE Documents (id INTEGER PRIMARY KEY);")
        .unwrap();
    match verify_schema(&conn) {
        Err(SchemaError::MissingTable(name)) => assert_eq!(name, "DocumentContributors"),
        other => panic!("expected MissingTable, got {:?}", other),
    }
}

#[test]
fn open_read_only_rejects_writes() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.sqlite");
    {
        let conn = Connection::open(&path).unwrap();
        create_schema(&conn).unwrap();
    }

    let conn = open_read_only(&path).unwrap();
    let result = conn.execute(
        "INSERT INTO Documents (citationKey, confirmed) VALUES ('x', 'true')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn open_read_only_does_not_create_files() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.sqlite");
    assert!(open_read_only(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn open_read_only_rejects_foreign_databases() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("other.sqlite");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE notes (body TEXT);").unwrap();
    }
    assert!(matches!(
        open_read_only(&path),
        Err(SchemaError::MissingTable(_))
    ));
}
