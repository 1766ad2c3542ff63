use mendeley_bib_lib::{ConvertError, SettingsError};
use thiserror::Error;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Conversion failed (database, query, or output)
    #[error("{0}")]
    Convert(#[from] ConvertError),

    /// Settings file could not be loaded
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
