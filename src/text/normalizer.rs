//! Lowercasing and whitespace collapsing for raw extracted text.

use tracing::instrument;

/// Normalizes raw document text for keyword analysis.
///
/// Normalization steps:
/// 1. Convert to lowercase
/// 2. Collapse every whitespace run (spaces, tabs, newlines) into one space
/// 3. Trim leading and trailing whitespace
///
/// Never fails; empty or whitespace-only input yields an empty string.
#[must_use]
#[instrument(skip(raw), fields(len = raw.len()))]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns true when `needle` occurs in `haystack` with no alphanumeric
/// character directly before or after it.
#[must_use]
pub fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(needle).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|ch| !ch.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|ch| !ch.is_alphanumeric());
        before_ok && after_ok
    })
}
