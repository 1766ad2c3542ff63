//! Document and contributor queries.
//!
//! Rows are mapped through [`row_to_fields`] into a `FieldMap` before they
//! become `Document`s, so everything past this module is free of rusqlite.

use mendeley_bib_core::{Contributor, Document, FieldMap};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row, Statement};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

// ── Documents ───────────────────────────────────────────────────────────────

/// One row per citation key, confirmed documents only, left-joined to their
/// attached files so documents without a file still show up.
///
/// `MIN(D.id)` makes SQLite take the bare columns from the lowest document
/// id when several rows share a citation key.
const DOCUMENTS_SQL: &str = "
    SELECT
        MIN(D.id) AS id,
        D.citationKey AS citationKey,
        D.title AS title,
        D.type AS type,
        D.doi AS doi,
        D.publisher AS publisher,
        D.publication AS publication,
        D.volume AS volume,
        D.issue AS issue,
        D.month AS month,
        D.year AS year,
        D.pages AS pages,
        F.localUrl AS localUrl
    FROM Documents D
    LEFT JOIN DocumentFiles DF
        ON D.id = DF.documentId
    LEFT JOIN Files F
        ON F.hash = DF.hash
    WHERE D.confirmed IN ('true', 1)
    GROUP BY D.citationKey
    ORDER BY D.citationKey";

const CONTRIBUTORS_SQL: &str = "
    SELECT lastName, firstNames
    FROM DocumentContributors
    WHERE documentId = ?1
    ORDER BY id";

/// A prepared document query that can be iterated lazily.
///
/// ```no_run
/// # fn run(conn: &rusqlite::Connection) -> Result<(), mendeley_bib_db::QueryError> {
/// let mut query = mendeley_bib_db::DocumentQuery::prepare(conn)?;
/// for doc in query.iter()? {
///     println!("{}", doc?.citation_key);
/// }
/// # Ok(())
/// # }
/// ```
pub struct DocumentQuery<'conn> {
    stmt: Statement<'conn>,
    columns: Vec<String>,
}

impl<'conn> DocumentQuery<'conn> {
    pub fn prepare(conn: &'conn Connection) -> Result<Self, QueryError> {
        let stmt = conn.prepare(DOCUMENTS_SQL)?;
        let columns = stmt.column_names().into_iter().map(String::from).collect();
        Ok(Self { stmt, columns })
    }

    /// Step through the documents in citation key order.
    ///
    /// Rows are fetched one at a time as the iterator advances.
    pub fn iter(
        &mut self,
    ) -> Result<impl Iterator<Item = Result<Document, QueryError>> + '_, QueryError> {
        let columns = &self.columns;
        let rows = self
            .stmt
            .query_map([], move |row| row_to_fields(row, columns))?;
        Ok(rows.map(|fields| {
            fields
                .map(|fields| Document::from_fields(&fields))
                .map_err(QueryError::from)
        }))
    }
}

// ── Contributors ────────────────────────────────────────────────────────────

/// Contributors of a document, in the order Mendeley recorded them.
pub fn contributors_for_document(
    conn: &Connection,
    document_id: &str,
) -> Result<Vec<Contributor>, QueryError> {
    let mut stmt = conn.prepare_cached(CONTRIBUTORS_SQL)?;
    let rows = stmt.query_map(params![document_id], |row| {
        Ok(Contributor {
            last_name: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            first_names: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping ─────────────────────────────────────────────────────────────

/// Map a row into a `FieldMap` keyed by the given column names.
///
/// Every column gets an entry. `NULL`, empty text and numeric zero all
/// become `""`; other numbers become their decimal text.
pub fn row_to_fields(row: &Row<'_>, columns: &[String]) -> rusqlite::Result<FieldMap> {
    let mut fields = FieldMap::new();
    for (idx, name) in columns.iter().enumerate() {
        fields.insert(name.clone(), value_to_string(row.get_ref(idx)?));
    }
    Ok(fields)
}

fn value_to_string(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(0) => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) if f == 0.0 => String::new(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
