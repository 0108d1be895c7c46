//! Tag API extractor
//!
//! The quotes API returns one JSON page per tag; each result carries the
//! quote body and a display author. Both must be non-empty after trimming.

use super::{Candidate, LengthWindow};
use serde::Deserialize;

/// One page of the tag API response: `{"results": [{content, author}, ..]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagApiPage {
    #[serde(default)]
    pub results: Vec<TagApiQuote>,
}

/// One quote entry in a tag API page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagApiQuote {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

/// Extractor for tag API pages.
pub struct TagFeedExtractor {
    window: LengthWindow,
}

impl Default for TagFeedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TagFeedExtractor {
    pub fn new() -> Self {
        Self {
            window: LengthWindow::REMOTE,
        }
    }

    /// Extract candidates from one tag page. The queried tag becomes the
    /// sole topic label of every candidate.
    pub fn extract(&self, page: &TagApiPage, tag: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for item in &page.results {
            let text = item.content.trim();
            let author = item.author.trim();
            if text.is_empty() || author.is_empty() {
                continue;
            }
            if !self.window.accepts(text) {
                continue;
            }
            candidates.push(Candidate {
                text: text.to_string(),
                author: author.to_string(),
                source: None,
                topics: vec![tag.to_string()],
            });
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(raw: &str) -> TagApiPage {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_extracts_results_with_tag_topic() {
        let page = page(
            r#"{"results": [
                {"content": "  A wise man adapts himself to circumstances as water shapes itself to the vessel.  ",
                 "author": " Chinese Proverb "}
            ]}"#,
        );
        let candidates = TagFeedExtractor::new().extract(&page, "wisdom");
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].text,
            "A wise man adapts himself to circumstances as water shapes itself to the vessel."
        );
        assert_eq!(candidates[0].author, "Chinese Proverb");
        assert_eq!(candidates[0].topics, ["wisdom"]);
    }

    #[test]
    fn test_requires_content_and_author() {
        let page = page(
            r#"{"results": [
                {"content": "A body that is certainly long enough to pass the window.", "author": "  "},
                {"content": "", "author": "Someone"},
                {"author": "Missing content entirely"}
            ]}"#,
        );
        assert!(TagFeedExtractor::new().extract(&page, "life").is_empty());
    }

    #[test]
    fn test_applies_remote_length_window() {
        let page = page(r#"{"results": [{"content": "Too short.", "author": "A"}]}"#);
        assert!(TagFeedExtractor::new().extract(&page, "life").is_empty());
    }

    #[test]
    fn test_empty_results_page() {
        let page = page(r#"{}"#);
        assert!(TagFeedExtractor::new().extract(&page, "life").is_empty());
    }
}
