//! Store-agnostic data model and BibTeX rendering for Mendeley documents.
//!
//! This crate knows nothing about SQLite. Rows arrive as [`FieldMap`]s,
//! become [`Document`]s, get normalized, and leave as rendered BibTeX text.
//! `mendeley-bib-db` produces the field maps; `mendeley-bib-lib` drives the
//! whole conversion.

pub mod authors;
pub mod normalize;
pub mod render;
pub mod title;
pub mod types;

pub use authors::{format_contributor, join_authors};
pub use normalize::{CoreError, SubstitutionTable, DEFAULT_SUBSTITUTIONS};
pub use render::{render_entry, BibField, EntryKind};
pub use title::capitalize_title;
pub use types::*;
