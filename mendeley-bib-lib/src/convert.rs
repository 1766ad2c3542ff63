//! The conversion pass: documents in, BibTeX entries out.

use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use mendeley_bib_core::{
    capitalize_title, join_authors, render_entry, Document, EntryKind, SubstitutionTable,
};
use mendeley_bib_db::{contributors_for_document, open_read_only, DocumentQuery};
use rusqlite::Connection;

use crate::error::ConvertError;
use crate::output::{open_output, BibWriter, OutputTarget};

/// Options for a conversion run. Built once, never mutated during the run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Substitutions applied to title, publisher and publication.
    pub substitutions: SubstitutionTable,
    /// Put titles in title case after substitution.
    pub capitalize_titles: bool,
    /// Do not warn about documents with unhandled types.
    pub quiet: bool,
}

/// A document left out because its type has no template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub citation_key: String,
    pub entry_type: String,
}

/// Summary of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    pub written: usize,
    pub skipped: Vec<SkippedEntry>,
    /// The run stopped early because `cancel` was set.
    pub interrupted: bool,
}

/// Convert every confirmed document in `conn` and write it to `out`.
///
/// `cancel` is checked before each document; once set, the run stops after
/// the last fully written entry and reports `interrupted`.
pub fn convert<W: Write>(
    conn: &Connection,
    out: &mut BibWriter<W>,
    options: &ConvertOptions,
    cancel: &AtomicBool,
) -> Result<ConvertReport, ConvertError> {
    let mut report = ConvertReport::default();
    let mut query = DocumentQuery::prepare(conn)?;

    for doc in query.iter()? {
        if cancel.load(Ordering::Relaxed) {
            report.interrupted = true;
            break;
        }

        let doc = doc?;
        let Some(kind) = EntryKind::from_tag(&doc.entry_type) else {
            if !options.quiet {
                log::warn!(
                    "Unhandled entry type '{}' ({}), please add your own template",
                    doc.entry_type,
                    doc.citation_key
                );
            }
            report.skipped.push(SkippedEntry {
                citation_key: doc.citation_key,
                entry_type: doc.entry_type,
            });
            continue;
        };

        let doc = prepare_document(conn, doc, options)?;
        out.write_entry(&render_entry(kind, &doc))?;
        report.written += 1;
        log::debug!("Wrote @{}{{{}}}", kind.bibtex_type(), doc.citation_key);
    }

    Ok(report)
}

/// Resolve authors and normalize the text fields of a loaded document.
fn prepare_document(
    conn: &Connection,
    mut doc: Document,
    options: &ConvertOptions,
) -> Result<Document, ConvertError> {
    let contributors = contributors_for_document(conn, &doc.id)?;
    doc.authors = join_authors(&contributors);
    options.substitutions.normalize_document(&mut doc);
    if options.capitalize_titles {
        doc.title = capitalize_title(&doc.title);
    }
    Ok(doc)
}

/// Open `library` read-only, convert it into `target`, and flush.
///
/// Nothing is created at `target` if the library can't be opened.
pub fn convert_library(
    library: &Path,
    target: &OutputTarget,
    options: &ConvertOptions,
    cancel: &AtomicBool,
) -> Result<ConvertReport, ConvertError> {
    let conn = open_read_only(library)?;
    let mut out = open_output(target)?;
    let report = convert(&conn, &mut out, options, cancel)?;
    out.finish()?;
    Ok(report)
}
