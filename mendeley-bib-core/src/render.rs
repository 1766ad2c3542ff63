//! BibTeX templates, one per supported Mendeley document type.
//!
//! Mendeley type tags map onto a closed set of [`EntryKind`]s. Each kind owns
//! the ordered list of fields it writes, so adding a new BibTeX type is a
//! new variant plus a field list:
//!
//! ```text
//! @article{abc2012,
//!     author    = "Smith, Jane and Doe, John",
//!     title     = "A \& B",
//!     ...
//!     localfile = ""
//! }
//! ```
//!
//! Values are written verbatim. A `"` inside a value is not escaped and
//! will produce a broken entry.

use crate::types::Document;

/// Width of the label column, the length of the longest label (`localfile`).
const LABEL_WIDTH: usize = 9;

/// A BibTeX entry type this tool knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Article,
    Proceedings,
    Book,
}

/// A field written into a BibTeX entry, and where its value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BibField {
    Author,
    Title,
    /// Mendeley `publication`.
    Journal,
    /// Mendeley `issue`.
    Number,
    Volume,
    Pages,
    Year,
    Doi,
    Publisher,
    LocalFile,
}

const ARTICLE_FIELDS: &[BibField] = &[
    BibField::Author,
    BibField::Title,
    BibField::Journal,
    BibField::Number,
    BibField::Volume,
    BibField::Pages,
    BibField::Year,
    BibField::Doi,
    BibField::LocalFile,
];

const PROCEEDINGS_FIELDS: &[BibField] = &[
    BibField::Author,
    BibField::Title,
    BibField::Publisher,
    BibField::Pages,
    BibField::Year,
    BibField::Doi,
    BibField::LocalFile,
];

const BOOK_FIELDS: &[BibField] = &[
    BibField::Author,
    BibField::Title,
    BibField::Publisher,
    BibField::Year,
    BibField::Volume,
    BibField::Doi,
    BibField::LocalFile,
];

impl EntryKind {
    /// Map a Mendeley type tag to an entry kind.
    ///
    /// Returns `None` for tags without a template; the caller decides
    /// whether to warn.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "JournalArticle" => Some(Self::Article),
            "ConferenceProceedings" => Some(Self::Proceedings),
            "Book" => Some(Self::Book),
            _ => None,
        }
    }

    /// The BibTeX entry type written after `@`.
    pub fn bibtex_type(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Proceedings => "proceedings",
            Self::Book => "book",
        }
    }

    pub fn fields(self) -> &'static [BibField] {
        match self {
            Self::Article => ARTICLE_FIELDS,
            Self::Proceedings => PROCEEDINGS_FIELDS,
            Self::Book => BOOK_FIELDS,
        }
    }
}

impl BibField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Title => "title",
            Self::Journal => "journal",
            Self::Number => "number",
            Self::Volume => "volume",
            Self::Pages => "pages",
            Self::Year => "year",
            Self::Doi => "doi",
            Self::Publisher => "publisher",
            Self::LocalFile => "localfile",
        }
    }

    pub fn value(self, doc: &Document) -> &str {
        match self {
            Self::Author => &doc.authors,
            Self::Title => &doc.title,
            Self::Journal => &doc.publication,
            Self::Number => &doc.issue,
            Self::Volume => &doc.volume,
            Self::Pages => &doc.pages,
            Self::Year => &doc.year,
            Self::Doi => &doc.doi,
            Self::Publisher => &doc.publisher,
            Self::LocalFile => &doc.local_file,
        }
    }
}

/// Render one document as a BibTeX entry of the given kind.
///
/// The result starts with a newline, so entries written back to back are
/// separated by a blank line, and ends with a newline after the closing
/// brace.
pub fn render_entry(kind: EntryKind, doc: &Document) -> String {
    let body = kind
        .fields()
        .iter()
        .map(|field| {
            format!(
                "    {:<width$} = \"{}\"",
                field.label(),
                field.value(doc),
                width = LABEL_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "\n@{}{{{},\n{}\n}}\n",
        kind.bibtex_type(),
        doc.citation_key,
        body
    )
}
