//! Read-only SQLite access to a Mendeley Desktop library.
//!
//! Opens the library file without write access, checks the tables this tool
//! reads, and turns query rows into store-agnostic `FieldMap`s and
//! `Document`s (via rusqlite with bundled feature).

pub mod queries;
pub mod schema;

pub use queries::{contributors_for_document, row_to_fields, DocumentQuery, QueryError};
pub use schema::{open_memory, open_read_only, verify_schema, SchemaError};
