//! Character substitution for the free-text fields of a document.
//!
//! Mendeley stores titles and journal names as raw Unicode. BibTeX with
//! `inputenc` chokes on a handful of them, and `&` is a LaTeX special
//! character. The substitution table rewrites those into LaTeX-safe text.

use thiserror::Error;

use crate::types::Document;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Substitution pattern must not be empty (replacement was '{replacement}')")]
    EmptyPattern { replacement: String },
}

/// Default `(match, replacement)` pairs, applied in this order.
pub const DEFAULT_SUBSTITUTIONS: &[(&str, &str)] = &[
    // LaTeX special character
    ("&", "\\&"),
    // Dashes not understood by inputenc
    ("\u{2013}", "--"),
    ("\u{2014}", "--"),
    // Division slash
    ("\u{2215}", "/"),
    // Greek kappa
    ("\u{03BA}", "k"),
    // Multiplication sign
    ("\u{00D7}", "x"),
];

/// An ordered list of literal substitutions.
///
/// Applying a table is idempotent: when a replacement ends with its own
/// pattern (`&` → `\&`), an occurrence already preceded by the rest of the
/// replacement is left as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    pairs: Vec<(String, String)>,
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_SUBSTITUTIONS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl SubstitutionTable {
    /// A table with no substitutions at all.
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a substitution after the existing ones.
    pub fn push(
        &mut self,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<(), CoreError> {
        let pattern = pattern.into();
        let replacement = replacement.into();
        if pattern.is_empty() {
            return Err(CoreError::EmptyPattern { replacement });
        }
        self.pairs.push((pattern, replacement));
        Ok(())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Apply every substitution to `text`, in table order.
    pub fn apply(&self, text: &str) -> String {
        self.pairs
            .iter()
            .fold(text.to_string(), |acc, (from, to)| replace_guarded(&acc, from, to))
    }

    /// Normalize the free-text fields of a document in place.
    ///
    /// Only `title`, `publisher` and `publication` are rewritten.
    pub fn normalize_document(&self, doc: &mut Document) {
        doc.publisher = self.apply(&doc.publisher);
        doc.publication = self.apply(&doc.publication);
        doc.title = self.apply(&doc.title);
    }
}

/// Replace every `from` in `input` with `to`, skipping occurrences that are
/// already the tail of a previous replacement.
fn replace_guarded(input: &str, from: &str, to: &str) -> String {
    if from.is_empty() || !input.contains(from) {
        return input.to_string();
    }

    let guard = to.strip_suffix(from).filter(|prefix| !prefix.is_empty());

    let mut out = String::with_capacity(input.len() + to.len());
    let mut rest = input;
    while let Some(pos) = rest.find(from) {
        out.push_str(&rest[..pos]);
        if guard.is_some_and(|prefix| out.ends_with(prefix)) {
            out.push_str(from);
        } else {
            out.push_str(to);
        }
        rest = &rest[pos + from.len()..];
    }
    out.push_str(rest);
    out
}
