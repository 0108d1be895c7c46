//! The persisted quote record and its identifier scheme.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex length of a record id (truncated sha256 prefix).
const ID_LEN: usize = 16;

/// One persisted quotation with its attribution and metadata.
///
/// Serialized field names match what the viewer reads: `source` may be
/// absent entirely, `topics` is always present (possibly empty), and the
/// ingestion date is `addedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    /// Stable identifier derived from `(author, text)`.
    pub id: String,
    /// Cleaned quotation body.
    pub text: String,
    /// Resolved attribution.
    pub author: String,
    /// Originating work (book/speech) title, when derivable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Ordered category labels.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Ingestion date (`YYYY-MM-DD`), shared by all records of one run.
    pub added_at: String,
}

impl QuoteRecord {
    /// Build a record, deriving its id from `(author, text)`.
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        source: Option<String>,
        topics: Vec<String>,
        added_at: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let author = author.into();
        Self {
            id: record_id(&author, &text),
            text,
            author,
            source,
            topics,
            added_at: added_at.into(),
        }
    }
}

/// Deterministic record id: sha256 of `"{author}:{text}"`, truncated to a
/// 16-hex-char prefix.
///
/// Collisions at this truncation length are accepted as statistically
/// negligible; there is no collision-detection step.
pub fn record_id(author: &str, text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(author.as_bytes());
    hasher.update(b":");
    hasher.update(text.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(ID_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_known_answer() {
        // sha256("Seneca:Luck is what happens when preparation meets opportunity.")
        assert_eq!(
            record_id(
                "Seneca",
                "Luck is what happens when preparation meets opportunity."
            ),
            "5b68ea37753ef11d"
        );
    }

    #[test]
    fn test_record_id_deterministic() {
        let a = record_id("Ada Lovelace", "The Analytical Engine weaves patterns.");
        let b = record_id("Ada Lovelace", "The Analytical Engine weaves patterns.");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_record_id_distinct_pairs() {
        assert_ne!(record_id("A", "same text"), record_id("B", "same text"));
        assert_ne!(record_id("A", "one text"), record_id("A", "another text"));
    }

    #[test]
    fn test_serde_field_names() {
        let record = QuoteRecord::new(
            "Some quotation body that is long enough to keep.",
            "Seneca",
            None,
            vec!["stoicism".to_string()],
            "2024-01-01",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("addedAt").is_some());
        assert!(json.get("source").is_none());
        assert_eq!(json["topics"][0], "stoicism");
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        // The viewer contract: records missing `source`/`topics` are valid.
        let json = r#"{
            "id": "0123456789abcdef",
            "text": "body",
            "author": "Unknown",
            "addedAt": "2024-01-01"
        }"#;
        let record: QuoteRecord = serde_json::from_str(json).unwrap();
        assert!(record.source.is_none());
        assert!(record.topics.is_empty());
    }
}
