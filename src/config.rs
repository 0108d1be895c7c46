//! Source configuration
//!
//! A single JSON file names the wiki authors (with their topic labels), the
//! tag-API tags, and the notes-vault directory. It is loaded once at
//! pipeline start and never mutated; a missing or unparseable file is fatal.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the source configuration. All fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One wiki author entry: page name plus the topic labels attached to every
/// quote extracted from that page.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorConfig {
    pub name: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// The full source configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    /// Wiki author pages to scrape.
    #[serde(default)]
    pub authors: Vec<AuthorConfig>,
    /// Tags to pull from the quotes API.
    #[serde(default)]
    pub quotable_tags: Vec<String>,
    /// Directory of note files for the vault pipeline.
    #[serde(default)]
    pub books_path: Option<PathBuf>,
}

impl SourceConfig {
    /// Load the configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
