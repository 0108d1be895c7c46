//! Vault ingestion source
//!
//! Reads the notes directory in sorted filename order so id assignment and
//! the first-occurrence-wins dedup race are deterministic across runs.

use super::{QuoteSource, SourceError};
use crate::dataset::Dataset;
use crate::extract::vault::VaultExtractor;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Note file extensions considered part of the vault.
const NOTE_EXTENSIONS: [&str; 3] = ["md", "markdown", "txt"];

/// Source covering every note file in the vault directory.
pub struct VaultSource {
    root: PathBuf,
    extractor: VaultExtractor,
}

impl VaultSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extractor: VaultExtractor::new(),
        }
    }

    /// Note files under the root, sorted by filename. An unreadable
    /// directory aborts the source.
    fn note_files(&self) -> Result<Vec<PathBuf>, SourceError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| SourceError::VaultDir {
            path: self.root.display().to_string(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_note_file(path))
            .collect();
        files.sort();
        Ok(files)
    }
}

fn is_note_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'));
    let known_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| NOTE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
    !hidden && known_extension
}

#[async_trait]
impl QuoteSource for VaultSource {
    fn name(&self) -> &str {
        "vault"
    }

    async fn collect(&self, dataset: &mut Dataset, added_at: &str) -> Result<usize, SourceError> {
        let mut added = 0;

        for path in self.note_files()? {
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(error) => {
                    tracing::warn!(file = %path.display(), %error, "skipping unreadable note");
                    continue;
                }
            };

            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();

            let mut count = 0;
            for candidate in self.extractor.extract_file(stem, &content) {
                if dataset.admit(candidate.into_record(added_at)) {
                    count += 1;
                }
            }
            tracing::info!(file = %path.display(), count, "note done");
            added += count;
        }

        Ok(added)
    }
}
