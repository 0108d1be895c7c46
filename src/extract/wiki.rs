//! Wiki page extractor
//!
//! Turns the HTML fragment of one author page into candidate quotes. On the
//! wiki, quotes are the top-level text of `<li>` items inside unordered
//! lists; nested `<ul>`/`<ol>` blocks under an item hold attribution
//! sub-notes ("As quoted in ...") and are excluded from the quote text.

use super::{Candidate, LengthWindow};
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

/// Case-insensitive prefixes marking attribution or navigation lines rather
/// than quote text.
const PREFIX_BLACKLIST: [&str; 10] = [
    "as quoted",
    "source:",
    "from ",
    "see also",
    "references",
    "notes",
    "edit",
    "chapter",
    "book ",
    "part ",
];

/// Extractor for wiki author pages.
pub struct WikiListExtractor {
    window: LengthWindow,
}

impl Default for WikiListExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl WikiListExtractor {
    pub fn new() -> Self {
        Self {
            window: LengthWindow::REMOTE,
        }
    }

    /// Extract candidate quotes from one author page fragment.
    ///
    /// `author` and `topics` come from the per-author source config; the
    /// wiki never yields a `source` title.
    pub fn extract(&self, html: &str, author: &str, topics: &[String]) -> Vec<Candidate> {
        let Ok(selector) = Selector::parse("ul > li") else {
            return Vec::new();
        };

        let fragment = Html::parse_fragment(html);
        let mut candidates = Vec::new();

        for item in fragment.select(&selector) {
            let text = Self::item_text(item);
            if !self.accepts(&text) {
                continue;
            }
            candidates.push(Candidate {
                text,
                author: author.to_string(),
                source: None,
                topics: topics.to_vec(),
            });
        }

        candidates
    }

    /// Collect the text of a list item, skipping nested list subtrees.
    ///
    /// HTML entities are already decoded by the parser, so the result is
    /// plain text with whitespace collapsed.
    fn item_text(item: ElementRef) -> String {
        let mut out = String::new();
        Self::collect_text(*item, &mut out);
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn collect_text(node: NodeRef<Node>, out: &mut String) {
        for child in node.children() {
            match child.value() {
                Node::Text(text) => out.push_str(&text),
                Node::Element(element) => {
                    let name = element.name();
                    if name.eq_ignore_ascii_case("ul") || name.eq_ignore_ascii_case("ol") {
                        continue;
                    }
                    out.push(' ');
                    Self::collect_text(child, out);
                }
                _ => {}
            }
        }
    }

    /// Validation filters: length window, prefix blacklist, letterless
    /// lines. Rejections are normal filtering, not errors.
    fn accepts(&self, text: &str) -> bool {
        if !self.window.accepts(text) {
            return false;
        }
        let lower = text.to_lowercase();
        if PREFIX_BLACKLIST.iter().any(|p| lower.starts_with(p)) {
            return false;
        }
        // Section markers and stray locators carry no letters at all.
        text.chars().any(|c| c.is_alphabetic())
    }
}
