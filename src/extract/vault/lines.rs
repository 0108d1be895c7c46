//! Reader-note line classification
//!
//! Every non-blank line of a note chunk is either quote text or a reader
//! note (commentary, metadata, markers). The classification is a closed set
//! of syntactic predicates over a single line, exposed as one pure function
//! so it can be tested against a line corpus.

use regex::Regex;
use std::sync::LazyLock;

/// A bulleted `* Key: value` / `- Key: value` metadata item.
static META_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+[A-Za-z][A-Za-z0-9 _/-]{0,40}:\s").unwrap());

/// A `Key:: value` structured inline field.
static STRUCTURED_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9 _/-]{0,40}::").unwrap());

/// Classification of one note line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Part of the quote body.
    Quote,
    /// Reader commentary or metadata, excluded from the quote body.
    Note,
}

/// Classify a single non-blank line.
pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();

    if is_blockquote(trimmed)
        || is_heading(trimmed)
        || is_commentary(trimmed)
        || is_meta_list_item(trimmed)
        || is_structured_field(trimmed)
        || is_embed(trimmed)
        || is_status_marker(trimmed)
    {
        LineClass::Note
    } else {
        LineClass::Quote
    }
}

fn is_blockquote(line: &str) -> bool {
    line.starts_with('>')
}

/// A markdown heading: one or more `#` followed by a space.
fn is_heading(line: &str) -> bool {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    hashes > 0 && line[hashes..].starts_with(' ')
}

/// Lines opening with an em-dash are the reader's own commentary.
fn is_commentary(line: &str) -> bool {
    line.starts_with('\u{2014}')
}

fn is_meta_list_item(line: &str) -> bool {
    META_LIST_ITEM.is_match(line)
}

fn is_structured_field(line: &str) -> bool {
    STRUCTURED_FIELD.is_match(line)
}

/// An embedded-file reference, `![[attachment]]`.
fn is_embed(line: &str) -> bool {
    line.starts_with("![[")
}

/// A line consisting solely of `#tag` status tokens (e.g. `#read #keep`).
/// Headings don't qualify: their `#` run is followed by a space.
fn is_status_marker(line: &str) -> bool {
    !line.is_empty() && line.split_whitespace().all(|token| token.starts_with('#'))
}
