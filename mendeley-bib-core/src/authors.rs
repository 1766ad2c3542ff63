//! Joining contributor names into a BibTeX author string.

use crate::types::Contributor;

/// Format one contributor as `"Last, First"`.
///
/// The comma is only written when both halves are present, so a
/// single-name author comes out as `"Plato"` rather than `"Plato, "`.
pub fn format_contributor(contributor: &Contributor) -> String {
    let last = contributor.last_name.trim();
    let first = contributor.first_names.trim();
    match (last.is_empty(), first.is_empty()) {
        (false, false) => format!("{last}, {first}"),
        (false, true) => last.to_string(),
        (true, false) => first.to_string(),
        (true, true) => String::new(),
    }
}

/// Join contributors in recorded order with `" and "`.
///
/// Contributors with no name at all are dropped. An empty slice yields an
/// empty string.
///
/// ```
/// use mendeley_bib_core::{join_authors, Contributor};
///
/// let authors = [Contributor::new("Smith", "Jane"), Contributor::new("Doe", "John")];
/// assert_eq!(join_authors(&authors), "Smith, Jane and Doe, John");
/// ```
pub fn join_authors(contributors: &[Contributor]) -> String {
    contributors
        .iter()
        .map(format_contributor)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(" and ")
}
