//! Canonical form of a name for comparison.

/// Lower-case, turn hyphens into spaces, collapse whitespace runs and trim.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
