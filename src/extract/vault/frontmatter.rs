//! Frontmatter handling for vault notes
//!
//! Notes may open with a `---` delimited metadata block. The dialect is a
//! flat key:value map, not full YAML: keys are matched case-insensitively,
//! values are stripped of surrounding quotes, nesting and lists are not
//! supported.

/// Parsed frontmatter: lowercased keys paired with quote-stripped values,
/// kept in file order so "first matching key" lookups are well-defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pairs: Vec<(String, String)>,
}

impl Frontmatter {
    /// Look up an exact key (callers pass lowercase).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value whose key contains `needle`, in file order.
    pub fn first_containing(&self, needle: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.contains(needle))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Split a note into its frontmatter map and body.
///
/// Files that do not open with a delimiter block get an empty map and the
/// whole file as body.
pub fn split_frontmatter(content: &str) -> (Frontmatter, &str) {
    let Some(block) = extract_block(content) else {
        return (Frontmatter::default(), content);
    };

    (parse_block(block), rest_after_block(content, block))
}

/// The text between the opening `---` line and the closing `\n---`, if the
/// file opens with one.
fn extract_block(content: &str) -> Option<&str> {
    let after_open = content.strip_prefix("---")?;
    let end = after_open.find("\n---")?;
    Some(&after_open[..end])
}

/// The body following the closing delimiter line.
fn rest_after_block<'a>(content: &'a str, block: &str) -> &'a str {
    // 3 for the opening fence, 4 for "\n---".
    let after_close = &content[3 + block.len() + 4..];
    match after_close.find('\n') {
        Some(nl) => &after_close[nl + 1..],
        None => "",
    }
}

fn parse_block(block: &str) -> Frontmatter {
    let mut pairs = Vec::new();

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some(colon) = trimmed.find(':') else {
            continue;
        };
        let key = trimmed[..colon].trim().to_lowercase();
        let value = trimmed[colon + 1..]
            .trim()
            .trim_matches('"')
            .trim_matches('\'')
            .to_string();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        pairs.push((key, value));
    }

    Frontmatter { pairs }
}
