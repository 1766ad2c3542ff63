//! Opening a library and checking its schema.
//!
//! Mendeley owns the schema, so nothing here migrates or writes. The
//! fixture DDL in [`create_schema`] mirrors the subset of columns the
//! conversion reads and exists to build test libraries.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Not a Mendeley library: table '{0}' is missing")]
    MissingTable(String),
}

/// Tables the document and contributor queries read from.
pub const REQUIRED_TABLES: &[&str] = &[
    "Documents",
    "DocumentContributors",
    "DocumentFiles",
    "Files",
];

/// Open a library file read-only and check that it looks like Mendeley's.
///
/// The file must already exist; SQLite will not create it in read-only mode.
pub fn open_read_only(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    verify_schema(&conn)?;
    log::debug!("Opened {} read-only", path.display());
    Ok(conn)
}

/// Fail with [`SchemaError::MissingTable`] for the first required table not present.
pub fn verify_schema(conn: &Connection) -> Result<(), SchemaError> {
    for table in REQUIRED_TABLES {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
            [*table],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(SchemaError::MissingTable(table.to_string()));
        }
    }
    Ok(())
}

/// Create the Mendeley tables this tool reads, if they don't exist.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open an in-memory library with the fixture schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    confirmed BOOLEAN,
    deletionPending BOOLEAN,
    citationKey VARCHAR,
    title VARCHAR,
    type VARCHAR,
    doi VARCHAR,
    publisher VARCHAR,
    publication VARCHAR,
    volume VARCHAR,
    issue VARCHAR,
    month INT,
    year INT,
    pages VARCHAR
);

CREATE TABLE IF NOT EXISTS DocumentContributors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    documentId INTEGER NOT NULL,
    contribution VARCHAR NOT NULL DEFAULT 'DocumentAuthor',
    firstNames VARCHAR,
    lastName VARCHAR NOT NULL
);
CREATE INDEX IF NOT EXISTS DocumentContributors_documentIdIndex ON DocumentContributors(documentId);

CREATE TABLE IF NOT EXISTS Files (
    hash CHAR[40] PRIMARY KEY,
    localUrl VARCHAR NOT NULL
);

CREATE TABLE IF NOT EXISTS DocumentFiles (
    documentId INTEGER NOT NULL,
    hash CHAR[40] NOT NULL,
    unlinked BOOLEAN NOT NULL DEFAULT 'false',
    UNIQUE(documentId, hash)
);
"#;
