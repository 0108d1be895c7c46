//! Notes-vault extractor
//!
//! The vault is a directory of markdown-like note files, one per book or
//! work. A note mixes quote text with the reader's own apparatus: optional
//! frontmatter, headings, commentary, structured fields, status tags. This
//! module pulls the quotes out:
//!
//! 1. split frontmatter from body,
//! 2. resolve file-level author/title/topics (metadata, body markers,
//!    filename heuristics),
//! 3. chunk the body on horizontal rules, else blank lines,
//! 4. drop reader-note lines, join the rest,
//! 5. apply a trailing inline citation as a per-chunk attribution override,
//! 6. clean markup artifacts,
//! 7. reject out-of-window, heading-like, and number-word chunks,
//! 8. dedup within the file.

mod attribution;
mod cleanup;
mod frontmatter;
mod lines;

pub use attribution::{InlineAttribution, UNKNOWN_AUTHOR};
pub use frontmatter::Frontmatter;
pub use lines::LineClass;

use super::{Candidate, LengthWindow};
use crate::normalize::normalize;
use std::collections::HashSet;

/// Bare English number words are stray chapter markers, not quotes.
const NUMBER_WORDS: [&str; 12] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve",
];

/// Extractor for vault note files.
pub struct VaultExtractor {
    window: LengthWindow,
}

impl Default for VaultExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultExtractor {
    pub fn new() -> Self {
        Self {
            window: LengthWindow::VAULT,
        }
    }

    /// Extract candidate quotes from one note file.
    ///
    /// `file_stem` is the filename without its extension; it feeds the
    /// author/title filename heuristics. Every candidate carries the
    /// resolved (or chunk-overridden) title as its `source`.
    pub fn extract_file(&self, file_stem: &str, content: &str) -> Vec<Candidate> {
        let (fm, body) = frontmatter::split_frontmatter(content);
        let file_author = attribution::resolve_author(&fm, body, file_stem);
        let file_title = attribution::resolve_title(&fm, file_stem);
        let topics = attribution::resolve_topics(&fm);

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for chunk in chunk_body(body) {
            let raw = quote_text(&chunk);
            if raw.is_empty() {
                continue;
            }

            let (author, source, text) = match attribution::inline_attribution(&raw) {
                Some((cite, stripped)) => (cite.author, Some(cite.source), stripped),
                None => (file_author.clone(), Some(file_title.clone()), raw),
            };

            let text = cleanup::clean_text(&text);
            if !self.accepts(&text) {
                continue;
            }
            if !seen.insert(normalize(&text)) {
                continue;
            }

            candidates.push(Candidate {
                text,
                author,
                source,
                topics: topics.clone(),
            });
        }

        candidates
    }

    /// Rejection filters. Silent skips, not errors.
    fn accepts(&self, text: &str) -> bool {
        self.window.accepts(text) && !is_shouted_heading(text) && !is_number_word(text)
    }
}

/// Join a chunk's quote lines with spaces, dropping blank and reader-note
/// lines.
fn quote_text(chunk: &str) -> String {
    chunk
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| lines::classify(line) == LineClass::Quote)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split the body into candidate chunks.
///
/// If the body contains any horizontal-rule line, rules delimit chunks for
/// the whole file; otherwise blank lines do.
fn chunk_body(body: &str) -> Vec<String> {
    let all_lines: Vec<&str> = body.lines().collect();
    let ruled = all_lines.iter().any(|line| is_rule(line));

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in all_lines {
        let boundary = if ruled {
            is_rule(line)
        } else {
            line.trim().is_empty()
        };
        if boundary {
            if !current.trim().is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    if !current.trim().is_empty() {
        chunks.push(current);
    }

    chunks
}

/// A horizontal rule: three or more identical `-`, `*`, or `_` characters,
/// optionally space-separated.
fn is_rule(line: &str) -> bool {
    let marks: Vec<char> = line.trim().chars().filter(|c| !c.is_whitespace()).collect();
    marks.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|&mark| marks.iter().all(|&c| c == mark))
}

/// Heading detection: all-uppercase letters (ignoring non-letters) with more
/// than 4 letters total.
fn is_shouted_heading(text: &str) -> bool {
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 4 && letters.iter().all(|c| c.is_uppercase())
}

/// A chunk that is nothing but a bare English number word (one..twelve).
fn is_number_word(text: &str) -> bool {
    NUMBER_WORDS.contains(&text.trim().to_lowercase().as_str())
}
