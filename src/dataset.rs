//! The persisted dataset and its in-memory working form.
//!
//! A `Dataset` is the ordered record list plus the normalized-text seen set
//! used for deduplication. The seen set is owned here and threaded through
//! the ingestion stages explicitly; there is no ambient dedup state.
//!
//! Writes are one-shot and atomic: the full collection is serialized to a
//! temp file which is then renamed over the target, so readers never observe
//! a partial dataset.

use crate::normalize::normalize;
use crate::record::QuoteRecord;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading or writing the dataset file. All fatal: the
/// pipeline never writes a partial dataset after one of these.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Ordered collection of quote records with its dedup index.
///
/// Invariant: no two admitted records share a normalized text body.
/// Existing records are never reordered or rewritten; new records only
/// append.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<QuoteRecord>,
    seen: HashSet<String>,
}

impl Dataset {
    /// An empty dataset. Starting point for the replace-merge (vault) path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the persisted dataset for an append merge.
    ///
    /// A missing file loads as empty (first run); an unreadable or
    /// unparseable file is fatal, since appending to it would lose data.
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::empty());
        }
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<QuoteRecord> = serde_json::from_str(&raw)?;
        let seen = records.iter().map(|r| normalize(&r.text)).collect();
        Ok(Self { records, seen })
    }

    /// Admit a record unless its normalized text is already present.
    ///
    /// Returns `true` if the record was appended. First occurrence wins;
    /// later duplicates are silently skipped (normal filtering, not an
    /// error).
    pub fn admit(&mut self, record: QuoteRecord) -> bool {
        if !self.seen.insert(normalize(&record.text)) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Whether a text body is already present, by normalized comparison.
    pub fn contains_text(&self, text: &str) -> bool {
        self.seen.contains(&normalize(text))
    }

    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the full collection to `path` in one shot.
    ///
    /// Pretty-printed JSON array, written to a sibling temp file and renamed
    /// into place.
    pub fn save(&self, path: impl AsRef<Path>) -> DatasetResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.records)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}
