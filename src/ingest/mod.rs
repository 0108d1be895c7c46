//! Ingestion sources
//!
//! A [`QuoteSource`] glues a reader to its extractor: it pulls raw material
//! from its upstream, extracts candidates, and admits them into the
//! [`Dataset`]. Sources run strictly sequentially; each awaits its IO to
//! completion and throttles its own outbound rate with fixed delays.
//!
//! Per-unit failures (one author, one tag, one file) are transient: the
//! source logs them at `warn` and moves to the next unit. Only failures
//! that invalidate the whole source (an unreadable vault directory) surface
//! as a [`SourceError`].

mod tag;
mod vault;
mod wiki;

pub use tag::TagApiSource;
pub use vault::VaultSource;
pub use wiki::WikiSource;

use crate::dataset::Dataset;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that abort an entire source (not just one of its units).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read vault directory {path}: {source}")]
    VaultDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A quote source: reads its upstream, extracts candidates, and admits them
/// into the dataset.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Short name used in progress logging.
    fn name(&self) -> &str;

    /// Read, extract, and admit. Returns the number of records admitted.
    ///
    /// `added_at` is the run's shared ingestion date stamp.
    async fn collect(&self, dataset: &mut Dataset, added_at: &str) -> Result<usize, SourceError>;
}

/// Run sources in order against the dataset, returning how many records
/// were admitted in total.
pub async fn run_sources(
    sources: &[Box<dyn QuoteSource>],
    dataset: &mut Dataset,
    added_at: &str,
) -> Result<usize, SourceError> {
    let before = dataset.len();
    for source in sources {
        tracing::info!(source = source.name(), "collecting");
        let added = source.collect(dataset, added_at).await?;
        tracing::info!(source = source.name(), added, "source done");
    }
    Ok(dataset.len() - before)
}
