//! Lookup key normalization.

/// Canonicalizes a library or collection display name into a lookup key.
///
/// Trims, lowercases, and collapses internal whitespace runs to a single
/// space. Applied on both the index-build path and the query path, so case
/// or whitespace drift between the feed and a caller-supplied name never
/// produces a missed match.
pub fn normalize_key(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
