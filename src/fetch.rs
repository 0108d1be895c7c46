//! Remote source readers
//!
//! Thin HTTP clients for the wiki parse API and the tag API. Failures here
//! are transient by contract: the caller logs, skips the author or tag, and
//! keeps going. There are no retries; outbound rate is throttled by the
//! fixed delays in the ingest loops, not here.

use crate::extract::TagApiPage;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// User-Agent sent on every request.
const USER_AGENT: &str = "quotemill/0.1 (quote-fetcher; contact via GitHub)";

/// Default wiki API host.
pub const WIKI_BASE_URL: &str = "https://en.wikiquote.org";

/// Default tag API host.
pub const TAG_BASE_URL: &str = "https://api.quotable.io";

/// Results per tag page.
const TAG_PAGE_LIMIT: &str = "30";

/// Errors raised while fetching one remote unit (author page or tag page).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("API error: {0}")]
    Api(String),

    #[error("no HTML content in response")]
    MissingHtml,
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Envelope of the wiki parse API:
/// `{parse: {text: {"*": html}}}` on success, `{error: {code}}` on failure.
#[derive(Debug, Deserialize)]
struct WikiEnvelope {
    parse: Option<WikiParse>,
    error: Option<WikiApiError>,
}

#[derive(Debug, Deserialize)]
struct WikiParse {
    text: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct WikiApiError {
    code: String,
}

fn html_from_envelope(envelope: WikiEnvelope) -> FetchResult<String> {
    if let Some(error) = envelope.error {
        return Err(FetchError::Api(error.code));
    }
    envelope
        .parse
        .and_then(|parse| parse.text)
        .and_then(|mut text| text.remove("*"))
        .ok_or(FetchError::MissingHtml)
}

/// Client for the wiki parse API.
pub struct WikiClient {
    client: reqwest::Client,
    base_url: String,
}

impl WikiClient {
    pub fn new() -> FetchResult<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: WIKI_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the rendered HTML fragment for one author page.
    ///
    /// Page names use underscores for spaces; the rest of the name is
    /// percent-encoded by the query builder.
    pub async fn fetch_author_page(&self, name: &str) -> FetchResult<String> {
        let page = name.replace(' ', "_");
        let response = self
            .client
            .get(format!("{}/w/api.php", self.base_url))
            .query(&[
                ("action", "parse"),
                ("page", page.as_str()),
                ("prop", "text"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        html_from_envelope(response.json().await?)
    }
}

/// Client for the tag API.
pub struct TagApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl TagApiClient {
    pub fn new() -> FetchResult<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: TAG_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch one page of quotes for a tag.
    pub async fn fetch_tag(&self, tag: &str) -> FetchResult<TagApiPage> {
        let response = self
            .client
            .get(format!("{}/quotes", self.base_url))
            .query(&[("tags", tag), ("limit", TAG_PAGE_LIMIT)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.json().await?)
    }
}
