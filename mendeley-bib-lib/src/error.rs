use std::path::PathBuf;

use mendeley_bib_core::CoreError;
use mendeley_bib_db::{QueryError, SchemaError};
use thiserror::Error;

/// Errors that can stop a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Writing the BibTeX output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The library could not be opened or is not a Mendeley database
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// A document or contributor query failed
    #[error("Query failed: {0}")]
    Query(#[from] QueryError),
}

/// Errors loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid substitution: {0}")]
    Substitution(#[from] CoreError),
}
