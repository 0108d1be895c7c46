//! Shared helpers for quotemill integration tests

use quotemill::normalize::normalize;
use quotemill::QuoteRecord;
use std::path::Path;

/// Write a note file into a vault directory.
pub fn write_note(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

/// Read a persisted dataset file back as records.
pub fn read_dataset(path: &Path) -> Vec<QuoteRecord> {
    let raw = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// Assert the dataset-wide invariants: 16-hex-char ids, non-empty bodies,
/// no two records sharing an id or a normalized body.
pub fn assert_dataset_invariants(records: &[QuoteRecord]) {
    for record in records {
        assert_eq!(record.id.len(), 16, "id length: {}", record.id);
        assert!(
            record.id.chars().all(|c| c.is_ascii_hexdigit()),
            "id not hex: {}",
            record.id
        );
        assert!(!record.text.is_empty());
    }
    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate id");
            assert_ne!(
                normalize(&a.text),
                normalize(&b.text),
                "duplicate normalized body"
            );
        }
    }
}
