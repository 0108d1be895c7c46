//! Quotemill: quote dataset builder
//!
//! An offline ingestion pipeline behind a personal quote viewer. Three
//! sources feed one JSON dataset:
//!
//! - a wiki parse API, scraped per configured author,
//! - a public quotes API, queried per configured tag,
//! - a personal notes vault of markdown-like files, one per book.
//!
//! # Architecture
//!
//! Source readers ([`fetch`], plus the file reads in [`ingest::VaultSource`])
//! hand raw material to pure extractors ([`extract`]); candidates are
//! normalized, deduplicated, and stamped into the [`dataset::Dataset`],
//! which is written back in a single atomic write. Everything runs
//! sequentially on one task; the only shared state is the dataset itself.
//!
//! # Example
//!
//! ```no_run
//! use quotemill::config::SourceConfig;
//! use quotemill::pipeline;
//! use std::path::Path;
//!
//! # async fn run() -> Result<(), quotemill::pipeline::PipelineError> {
//! let config = SourceConfig::load("config/sources.json")?;
//! let summary = pipeline::run_fetch(&config, Path::new("data/quotes.json")).await?;
//! println!("added {} of {}", summary.added, summary.total);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dataset;
pub mod extract;
pub mod fetch;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod record;

pub use config::{AuthorConfig, SourceConfig};
pub use dataset::{Dataset, DatasetError, DatasetResult};
pub use pipeline::{PipelineError, RunSummary};
pub use record::{record_id, QuoteRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
