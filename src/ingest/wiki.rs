//! Wiki ingestion source
//!
//! Walks the configured author list in order, fetching and extracting one
//! page at a time. Every author is followed by a fixed courtesy delay,
//! whether the fetch succeeded or not.

use super::{QuoteSource, SourceError};
use crate::config::AuthorConfig;
use crate::dataset::Dataset;
use crate::extract::WikiListExtractor;
use crate::fetch::WikiClient;
use async_trait::async_trait;
use std::time::Duration;

/// Delay between author page requests.
const AUTHOR_DELAY: Duration = Duration::from_millis(500);

/// Source covering all configured wiki authors.
pub struct WikiSource {
    client: WikiClient,
    extractor: WikiListExtractor,
    authors: Vec<AuthorConfig>,
    delay: Duration,
}

impl WikiSource {
    pub fn new(client: WikiClient, authors: Vec<AuthorConfig>) -> Self {
        Self {
            client,
            extractor: WikiListExtractor::new(),
            authors,
            delay: AUTHOR_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl QuoteSource for WikiSource {
    fn name(&self) -> &str {
        "wikiquote"
    }

    async fn collect(&self, dataset: &mut Dataset, added_at: &str) -> Result<usize, SourceError> {
        let mut added = 0;

        for author in &self.authors {
            match self.client.fetch_author_page(&author.name).await {
                Ok(html) => {
                    let mut count = 0;
                    for candidate in self.extractor.extract(&html, &author.name, &author.topics) {
                        if dataset.admit(candidate.into_record(added_at)) {
                            count += 1;
                        }
                    }
                    tracing::info!(author = %author.name, count, "author done");
                    added += count;
                }
                Err(error) => {
                    tracing::warn!(author = %author.name, %error, "skipping author");
                }
            }
            tokio::time::sleep(self.delay).await;
        }

        Ok(added)
    }
}
