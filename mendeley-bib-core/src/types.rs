//! Data model types for documents read out of a Mendeley library.
//!
//! Every text field is a plain `String`. Missing values are normalized to
//! the empty string at the mapping layer so templates never see a hole.

use std::collections::BTreeMap;

// ── Field Map ───────────────────────────────────────────────────────────────

/// A single query row, keyed by column name.
///
/// Values are already coerced to strings; a `NULL` column is stored as `""`
/// rather than dropped, so every selected column has an entry.
pub type FieldMap = BTreeMap<String, String>;

/// Column names shared between the document query and [`Document::from_fields`].
pub mod columns {
    pub const ID: &str = "id";
    pub const CITATION_KEY: &str = "citationKey";
    pub const TITLE: &str = "title";
    pub const TYPE: &str = "type";
    pub const DOI: &str = "doi";
    pub const PUBLISHER: &str = "publisher";
    pub const PUBLICATION: &str = "publication";
    pub const VOLUME: &str = "volume";
    pub const ISSUE: &str = "issue";
    pub const MONTH: &str = "month";
    pub const YEAR: &str = "year";
    pub const PAGES: &str = "pages";
    pub const LOCAL_URL: &str = "localUrl";
}

// ── Document ────────────────────────────────────────────────────────────────

/// One bibliographic entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Internal Mendeley document id, used to look up contributors.
    pub id: String,
    /// Unique label used as the BibTeX entry key.
    pub citation_key: String,
    pub title: String,
    /// Mendeley type tag (e.g. `JournalArticle`, `Book`).
    pub entry_type: String,
    pub doi: String,
    pub publisher: String,
    /// Journal or proceedings name.
    pub publication: String,
    pub volume: String,
    pub issue: String,
    pub month: String,
    pub year: String,
    pub pages: String,
    /// Location of the attached file, if any (a `file://` URL in practice).
    pub local_file: String,
    /// Derived `"Last, First and Last, First"` string, filled after loading.
    pub authors: String,
}

impl Document {
    /// Build a document from a mapped row.
    ///
    /// Keys absent from the map become empty strings. `authors` is left
    /// empty; contributors are resolved separately.
    pub fn from_fields(fields: &FieldMap) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        Self {
            id: get(columns::ID),
            citation_key: get(columns::CITATION_KEY),
            title: get(columns::TITLE),
            entry_type: get(columns::TYPE),
            doi: get(columns::DOI),
            publisher: get(columns::PUBLISHER),
            publication: get(columns::PUBLICATION),
            volume: get(columns::VOLUME),
            issue: get(columns::ISSUE),
            month: get(columns::MONTH),
            year: get(columns::YEAR),
            pages: get(columns::PAGES),
            local_file: get(columns::LOCAL_URL),
            authors: String::new(),
        }
    }
}

// ── Contributor ─────────────────────────────────────────────────────────────

/// A person credited on a document, in the order Mendeley recorded them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contributor {
    pub last_name: String,
    pub first_names: String,
}

impl Contributor {
    pub fn new(last_name: impl Into<String>, first_names: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_names: first_names.into(),
        }
    }
}
