//! Text normalization for duplicate detection
//!
//! The normalized form is a comparison key only; it is never persisted.
//! Two texts that differ only in case, punctuation, or whitespace density
//! normalize to the same key.

/// Reduce a quote body to its canonical comparison form.
///
/// Lowercases, drops every character outside `[a-z0-9 ]` (any whitespace
/// counts as the space class), collapses whitespace runs, and trims.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| c.to_ascii_lowercase())
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert_eq!(
            normalize("Stay hungry, stay foolish!"),
            normalize("stay HUNGRY stay foolish")
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(normalize("Catch-22 rules"), "catch 22 rules");
    }

    #[test]
    fn test_non_ascii_stripped() {
        assert_eq!(normalize("café «au» lait"), "caf au lait");
    }

    #[test]
    fn test_empty_after_strip() {
        assert_eq!(normalize("—×—"), "");
    }
}
