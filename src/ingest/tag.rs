//! Tag API ingestion source

use super::{QuoteSource, SourceError};
use crate::dataset::Dataset;
use crate::extract::TagFeedExtractor;
use crate::fetch::TagApiClient;
use async_trait::async_trait;
use std::time::Duration;

/// Delay between tag page requests; the tag API is lighter-weight than the
/// wiki, so the pause is shorter.
const TAG_DELAY: Duration = Duration::from_millis(200);

/// Source covering all configured tags.
pub struct TagApiSource {
    client: TagApiClient,
    extractor: TagFeedExtractor,
    tags: Vec<String>,
    delay: Duration,
}

impl TagApiSource {
    pub fn new(client: TagApiClient, tags: Vec<String>) -> Self {
        Self {
            client,
            extractor: TagFeedExtractor::new(),
            tags,
            delay: TAG_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl QuoteSource for TagApiSource {
    fn name(&self) -> &str {
        "quotable"
    }

    async fn collect(&self, dataset: &mut Dataset, added_at: &str) -> Result<usize, SourceError> {
        let mut added = 0;

        for tag in &self.tags {
            match self.client.fetch_tag(tag).await {
                Ok(page) => {
                    let mut count = 0;
                    for candidate in self.extractor.extract(&page, tag) {
                        if dataset.admit(candidate.into_record(added_at)) {
                            count += 1;
                        }
                    }
                    tracing::info!(tag = %tag, count, "tag done");
                    added += count;
                }
                Err(error) => {
                    tracing::warn!(tag = %tag, %error, "skipping tag");
                }
            }
            tokio::time::sleep(self.delay).await;
        }

        Ok(added)
    }
}
