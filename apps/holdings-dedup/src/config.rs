//! Configuration for holdings-dedup
//!
//! Loaded from a TOML file; every key is optional:
//!
//! ```toml
//! [columns]
//! title = "TITLE"
//! source = "DB"
//! issn = "ISSN"
//! e_issn = "e-ISSN"
//! isbn = "ISBN"
//! e_isbn = "e-ISBN"
//!
//! [output]
//! duplicates = "duplication.csv"
//! graph = "relation.dot"
//! ```

use holdings_io::ColumnLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur when loading the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("TOML parse error: {0}")]
    Parse(String),
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV header names
    pub columns: ColumnLayout,
    /// Output file locations
    pub output: OutputConfig,
}

/// Output file locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Fixed-width CSV of confirmed duplicate groups
    pub duplicates: PathBuf,
    /// Graphviz rendering of the source graph; not written when unset
    pub graph: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            duplicates: PathBuf::from("duplication.csv"),
            graph: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise the per-user file is used when
    /// present, falling back to the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {:?}", path);
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `<config_dir>/holdings/config.toml`, when the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("holdings").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.columns.source, "DB");
        assert_eq!(config.output.duplicates, PathBuf::from("duplication.csv"));
        assert_eq!(config.output.graph, None);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml(
            r#"
            [columns]
            source = "Catalog"

            [output]
            graph = "sources.dot"
            "#,
        )
        .unwrap();

        assert_eq!(config.columns.source, "Catalog");
        assert_eq!(config.columns.title, "TITLE");
        assert_eq!(config.output.graph, Some(PathBuf::from("sources.dot")));
        assert_eq!(config.output.duplicates, PathBuf::from("duplication.csv"));
    }

    #[test]
    fn test_parse_error() {
        let err = AppConfig::from_toml("[columns\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nduplicates = \"out.csv\"\n").unwrap();

        let config = AppConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.output.duplicates, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = AppConfig::resolve(Some(Path::new("/no/such/holdings.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
