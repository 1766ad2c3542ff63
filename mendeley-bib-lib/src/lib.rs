//! Mendeley-to-BibTeX conversion.
//!
//! Ties the pieces together: opens the library through `mendeley-bib-db`,
//! normalizes and renders each document with `mendeley-bib-core`, and writes
//! the result to stdout or a file.

pub mod convert;
pub mod error;
pub mod output;
pub mod settings;

pub use convert::{convert, convert_library, ConvertOptions, ConvertReport, SkippedEntry};
pub use error::{ConvertError, SettingsError};
pub use output::{banner, open_output, BibWriter, OutputTarget};
pub use settings::{load_settings, load_settings_or_default, settings_path, Settings};
