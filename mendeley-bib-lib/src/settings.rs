//! Optional settings file (`~/.config/mendeley-bib/settings.toml`).
//!
//! ```toml
//! capitalize_titles = false
//!
//! [[substitutions]]
//! from = "α"
//! to = "$\\alpha$"
//! ```
//!
//! Extra substitutions run after the built-in ones.

use std::path::{Path, PathBuf};

use mendeley_bib_core::SubstitutionTable;
use serde::Deserialize;

use crate::error::SettingsError;

/// Parsed contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub capitalize_titles: bool,
    pub substitutions: Vec<SubstitutionEntry>,
}

/// One user-defined `(from, to)` substitution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubstitutionEntry {
    pub from: String,
    pub to: String,
}

impl Settings {
    /// The built-in substitutions followed by the user's.
    pub fn substitution_table(&self) -> Result<SubstitutionTable, SettingsError> {
        let mut table = SubstitutionTable::default();
        for entry in &self.substitutions {
            table.push(entry.from.as_str(), entry.to.as_str())?;
        }
        Ok(table)
    }
}

/// Canonical path to the settings file: `<config dir>/mendeley-bib/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mendeley-bib").join("settings.toml")
}

/// Load settings from an explicit path. A missing file is an error.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from `path`, falling back to defaults if the file doesn't exist.
pub fn load_settings_or_default(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        log::debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    load_settings(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_gives_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.substitution_table().unwrap(), SubstitutionTable::default());
    }

    #[test]
    fn extra_substitutions_are_appended() {
        let settings: Settings = toml::from_str(
            r#"
capitalize_titles = true

[[substitutions]]
from = "α"
to = "$\\alpha$"
"#,
        )
        .unwrap();
        assert!(settings.capitalize_titles);
        let table = settings.substitution_table().unwrap();
        assert_eq!(table.len(), 7);
        assert_eq!(table.pairs()[6], ("α".to_string(), "$\\alpha$".to_string()));
    }

    #[test]
    fn empty_pattern_is_an_error() {
        let settings: Settings = toml::from_str(
            r#"
[[substitutions]]
from = ""
to = "x"
"#,
        )
        .unwrap();
        assert!(matches!(
            settings.substitution_table(),
            Err(SettingsError::Substitution(_))
        ));
    }

    #[test]
    fn missing_default_file_is_fine() {
        let tmp = TempDir::new().unwrap();
        let settings = load_settings_or_default(&tmp.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_settings(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "capitalise_titles = true\n").unwrap();
        assert!(matches!(
            load_settings(&path),
            Err(SettingsError::Parse { .. })
        ));
    }
}
