//! End-to-end test for the wiki extraction path: one configured author, a
//! canned API fragment, an append merge onto an existing dataset.

mod common;

use common::{assert_dataset_invariants, read_dataset};
use quotemill::dataset::Dataset;
use quotemill::extract::WikiListExtractor;
use quotemill::record::record_id;

const FRAGMENT: &str = r#"<div class="mw-parser-output"><ul>
    <li>The best way to predict the future is to invent it yourself.
        <ul><li>As quoted in a 1982 interview</li></ul>
    </li>
    <li>Simplicity is the ultimate sophistication in all things that matter.</li>
    <li>Stub line.</li>
</ul></div>"#;

#[test]
fn test_three_items_two_records_with_stable_ids() {
    let topics = vec!["innovation".to_string()];
    let candidates = WikiListExtractor::new().extract(FRAGMENT, "AuthorName", &topics);
    assert_eq!(candidates.len(), 2);

    let mut dataset = Dataset::empty();
    for candidate in candidates {
        assert!(dataset.admit(candidate.into_record("2024-06-01")));
    }

    let records = dataset.records();
    // sha256("AuthorName:<cleaned text>") truncated to 16 hex chars.
    assert_eq!(records[0].id, "151412130a97381b");
    assert_eq!(records[1].id, "313263d6c6562b23");
    assert_eq!(
        records[0].id,
        record_id("AuthorName", &records[0].text),
    );
    assert_eq!(records[0].topics, ["innovation"]);
    assert_dataset_invariants(records);
}

#[test]
fn test_append_merge_preserves_existing_records() {
    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("quotes.json");

    // Seed the dataset with one of the two fragment quotes.
    let mut seeded = Dataset::empty();
    let topics = vec!["innovation".to_string()];
    let first = WikiListExtractor::new()
        .extract(FRAGMENT, "AuthorName", &topics)
        .remove(0);
    seeded.admit(first.into_record("2024-05-01"));
    seeded.save(&path).unwrap();

    // A later run sees the same page: only the unseen quote is appended,
    // and the seeded record keeps its original stamp and position.
    let mut dataset = Dataset::load(&path).unwrap();
    let mut added = 0;
    for candidate in WikiListExtractor::new().extract(FRAGMENT, "AuthorName", &topics) {
        if dataset.admit(candidate.into_record("2024-06-01")) {
            added += 1;
        }
    }
    dataset.save(&path).unwrap();

    assert_eq!(added, 1);
    let records = read_dataset(&path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "151412130a97381b");
    assert_eq!(records[0].added_at, "2024-05-01");
    assert_eq!(records[1].added_at, "2024-06-01");
    assert_dataset_invariants(&records);
}
