//! Chunk text cleanup
//!
//! Strips the markup artifacts the vault dialect leaves in a quote chunk:
//! block-reference markers, highlight/bold/italic markers, wikilinks, and
//! trailing page-number locators.

use regex::Regex;
use std::sync::LazyLock;

/// Trailing `^block-ref` markers (one or more).
static BLOCK_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s*\^[A-Za-z0-9-]+)+\s*$").unwrap());

/// A trailing parenthesized page locator: `(42)`, `(12-13)`, `(p. 7)`.
static PAGE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(\s*(?:pp?\.?\s*)?\d+(?:\s*[-\u{2013}\u{2014}]\s*\d+)?\s*\)\s*$").unwrap()
});

/// Clean a joined chunk into its final quote body.
///
/// Order matters: block refs sit at the very end of a line, markers wrap
/// link and page syntax, and the page suffix is only recognizable once the
/// markup around it is gone.
pub fn clean_text(text: &str) -> String {
    let text = BLOCK_REF.replace(text, "");
    let text = strip_emphasis(&text);
    let text = resolve_wikilinks(&text);
    let text = PAGE_SUFFIX.replace(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a short metadata value: wikilink brackets resolved, whitespace
/// trimmed. Used for frontmatter values and body markers like
/// `Author: [[Mary Oliver]]`.
pub fn clean_value(value: &str) -> String {
    resolve_wikilinks(value).trim().to_string()
}

/// Remove `==highlight==`, `**bold**`, `*italic*` and `__bold__` markers,
/// including nested runs like `==**text**==`. Single underscores are left
/// alone; they occur inside words.
fn strip_emphasis(text: &str) -> String {
    text.replace("==", "")
        .replace("**", "")
        .replace("__", "")
        .replace('*', "")
}

/// Resolve `[[target|display]]` to its display text and `[[target]]` to the
/// target name. Unclosed brackets are kept verbatim.
fn resolve_wikilinks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '[' && chars.peek() == Some(&'[') {
            chars.next();
            let mut inner = String::new();
            let mut closed = false;
            while let Some(c2) = chars.next() {
                if c2 == ']' && chars.peek() == Some(&']') {
                    chars.next();
                    closed = true;
                    break;
                }
                inner.push(c2);
            }
            if closed {
                let display = match inner.find('|') {
                    Some(pipe) => &inner[pipe + 1..],
                    None => &inner,
                };
                out.push_str(display.trim());
            } else {
                out.push_str("[[");
                out.push_str(&inner);
            }
        } else {
            out.push(c);
        }
    }

    out
}
