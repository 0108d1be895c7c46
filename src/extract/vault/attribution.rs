//! Author, title, and topic resolution for vault notes
//!
//! All of this is heuristic inference over free-form conventions, not a
//! grammar. Each inference is an ordered list of fallback rules; the first
//! rule that matches wins, and every rule is independently testable.

use super::cleanup;
use super::frontmatter::Frontmatter;
use regex::Regex;
use std::sync::LazyLock;

/// Fallback attribution when nothing resolves.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Trailing citation overriding file-level attribution:
/// `(Capitalized Name, Work Title, locator)`. The author segment must be two
/// or more capitalized tokens; single-name and non-Latin authors
/// intentionally never match and fall through to file-level attribution.
static INLINE_ATTRIBUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\(\s*([A-Z][A-Za-z.'\u{2019}-]*(?:\s+[A-Z][A-Za-z.'\u{2019}-]*)+)\s*,\s*([^,()]+?)\s*(?:,\s*([^()]*?)\s*)?\)\s*$",
    )
    .unwrap()
});

/// `... by Author Name` at the end of a filename. The name must open
/// capitalized; later tokens may be particles ("de", "van").
static FILENAME_BY_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[Bb]y\s+([A-Z][A-Za-z.'\u{2019}-]*(?:\s+[A-Za-z.'\u{2019}-]+)*)\s*$").unwrap()
});

/// `... - First Last` at the end of a filename (plain hyphen, capitalized
/// two-plus-word name).
static FILENAME_HYPHEN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s-\s*([A-Z][A-Za-z.'\u{2019}-]*(?:\s+[A-Z][A-Za-z.'\u{2019}-]*)+)\s*$").unwrap()
});

/// An inline `Author: ...` body marker line.
static BODY_AUTHOR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^author\s*:\s*(.+)$").unwrap());

/// A chunk-level attribution override parsed from a trailing citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAttribution {
    pub author: String,
    pub source: String,
}

/// Match a trailing inline citation. Returns the override plus the chunk
/// text with the parenthetical removed.
pub fn inline_attribution(text: &str) -> Option<(InlineAttribution, String)> {
    let captures = INLINE_ATTRIBUTION.captures(text)?;
    let matched = captures.get(0)?;
    let attribution = InlineAttribution {
        author: captures[1].to_string(),
        source: captures[2].trim().to_string(),
    };
    let stripped = text[..matched.start()].trim_end().to_string();
    Some((attribution, stripped))
}

/// Resolve the file-level author, in priority order: explicit metadata keys,
/// any metadata key containing "author", an inline body marker, filename
/// heuristics, the literal fallback.
pub fn resolve_author(fm: &Frontmatter, body: &str, file_stem: &str) -> String {
    author_from_metadata(fm)
        .or_else(|| author_from_body(body))
        .or_else(|| author_from_filename(file_stem))
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

pub fn author_from_metadata(fm: &Frontmatter) -> Option<String> {
    for key in ["author", "authors", "author name"] {
        if let Some(value) = fm.get(key) {
            let cleaned = cleanup::clean_value(value);
            if !cleaned.is_empty() {
                return Some(cleaned);
            }
        }
    }
    fm.first_containing("author")
        .map(cleanup::clean_value)
        .filter(|name| !name.is_empty())
}

/// Scan the body for an `Author: Name` / `Author: [[Name]]` marker line.
pub fn author_from_body(body: &str) -> Option<String> {
    body.lines().find_map(|line| {
        BODY_AUTHOR_LINE
            .captures(line.trim())
            .map(|captures| cleanup::clean_value(&captures[1]))
            .filter(|name| !name.is_empty())
    })
}

/// Filename heuristics, first match wins:
/// 1. a trailing `— Name` segment (em-dash),
/// 2. a trailing `by Name`,
/// 3. a trailing `- First Last` (plain hyphen, capitalized multi-word name).
pub fn author_from_filename(stem: &str) -> Option<String> {
    if let Some(dash) = stem.rfind('\u{2014}') {
        let name = stem[dash + '\u{2014}'.len_utf8()..].trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }
    if let Some(captures) = FILENAME_BY_AUTHOR.captures(stem) {
        return Some(captures[1].trim().to_string());
    }
    if let Some(captures) = FILENAME_HYPHEN_NAME.captures(stem) {
        return Some(captures[1].trim().to_string());
    }
    None
}

/// Resolve the work title: explicit metadata, else the filename with author
/// suffixes and the `Quotes from ` prefix stripped.
pub fn resolve_title(fm: &Frontmatter, file_stem: &str) -> String {
    for key in ["title", "book"] {
        if let Some(value) = fm.get(key) {
            return cleanup::clean_value(value);
        }
    }
    title_from_filename(file_stem)
}

pub fn title_from_filename(stem: &str) -> String {
    let mut title = stem;

    if let Some(dash) = title.rfind('\u{2014}') {
        title = &title[..dash];
    } else if let Some(m) = FILENAME_BY_AUTHOR.find(title) {
        title = &title[..m.start()];
    } else if let Some(m) = FILENAME_HYPHEN_NAME.find(title) {
        title = &title[..m.start()];
    }

    let title = title.trim().trim_end_matches(['-', '\u{2014}']).trim();
    let title = title.strip_prefix("Quotes from ").unwrap_or(title);
    title.to_string()
}

/// Topics: the first comma/ampersand-delimited segment of a
/// `category`/`categories` metadata value.
pub fn resolve_topics(fm: &Frontmatter) -> Vec<String> {
    for key in ["category", "categories"] {
        if let Some(value) = fm.get(key) {
            let first = value
                .split([',', '&'])
                .map(str::trim)
                .find(|segment| !segment.is_empty());
            if let Some(topic) = first {
                return vec![topic.to_string()];
            }
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::vault::frontmatter::split_frontmatter;

    fn fm(raw: &str) -> Frontmatter {
        split_frontmatter(raw).0
    }

    #[test]
    fn test_inline_attribution_match() {
        let (attribution, stripped) = inline_attribution(
            "Do not go gentle into that good night. (Jane Q Public, Some Essay, 42)",
        )
        .unwrap();
        assert_eq!(attribution.author, "Jane Q Public");
        assert_eq!(attribution.source, "Some Essay");
        assert_eq!(stripped, "Do not go gentle into that good night.");
    }

    #[test]
    fn test_inline_attribution_without_locator() {
        let (attribution, _) =
            inline_attribution("Some text here. (Ursula Le Guin, The Dispossessed)").unwrap();
        assert_eq!(attribution.author, "Ursula Le Guin");
        assert_eq!(attribution.source, "The Dispossessed");
    }

    #[test]
    fn test_inline_attribution_single_name_never_matches() {
        assert!(inline_attribution("Some text here. (Seneca, Letters, 3)").is_none());
    }

    #[test]
    fn test_inline_attribution_must_trail() {
        assert!(inline_attribution("(Jane Q Public, Some Essay, 42) opens the chunk").is_none());
    }

    #[test]
    fn test_author_from_metadata_priority() {
        let fm = fm("---\nbook author: Fallback Key\nauthor: Primary Key\n---\n");
        assert_eq!(author_from_metadata(&fm).as_deref(), Some("Primary Key"));
    }

    #[test]
    fn test_author_from_metadata_containing_key() {
        let fm = fm("---\nbook author: Octavia Butler\n---\n");
        assert_eq!(author_from_metadata(&fm).as_deref(), Some("Octavia Butler"));
    }

    #[test]
    fn test_author_from_body_marker() {
        assert_eq!(
            author_from_body("Some chunk\n\nAuthor: [[Mary Oliver]]\n\nMore text").as_deref(),
            Some("Mary Oliver")
        );
        assert_eq!(
            author_from_body("author: bell hooks").as_deref(),
            Some("bell hooks")
        );
        assert!(author_from_body("No marker anywhere").is_none());
    }

    #[test]
    fn test_author_from_filename_em_dash() {
        assert_eq!(
            author_from_filename("Meditations — Marcus Aurelius").as_deref(),
            Some("Marcus Aurelius")
        );
    }

    #[test]
    fn test_author_from_filename_by() {
        assert_eq!(
            author_from_filename("The Dispossessed by Ursula Le Guin").as_deref(),
            Some("Ursula Le Guin")
        );
    }

    #[test]
    fn test_author_from_filename_hyphen_name() {
        assert_eq!(
            author_from_filename("Walden - Henry Thoreau").as_deref(),
            Some("Henry Thoreau")
        );
        // A plain hyphenated title is not an author suffix.
        assert!(author_from_filename("Notes - assorted clippings").is_none());
    }

    #[test]
    fn test_resolve_author_fallback_chain() {
        let empty = Frontmatter::default();
        assert_eq!(
            resolve_author(&empty, "no markers", "untitled notes"),
            UNKNOWN_AUTHOR
        );
    }

    #[test]
    fn test_title_from_metadata() {
        let fm = fm("---\ntitle: The Overstory\n---\n");
        assert_eq!(resolve_title(&fm, "ignored"), "The Overstory");
    }

    #[test]
    fn test_title_from_filename_strips_author_and_prefix() {
        assert_eq!(
            title_from_filename("Quotes from Meditations — Marcus Aurelius"),
            "Meditations"
        );
        assert_eq!(
            title_from_filename("The Dispossessed by Ursula Le Guin"),
            "The Dispossessed"
        );
        assert_eq!(title_from_filename("Walden - Henry Thoreau"), "Walden");
    }

    #[test]
    fn test_topics_first_segment() {
        let fm = fm("---\ncategories: Philosophy & Ethics, History\n---\n");
        assert_eq!(resolve_topics(&fm), ["Philosophy"]);
        assert!(resolve_topics(&Frontmatter::default()).is_empty());
    }
}
