//! Classification ordering over raw call number strings.

use super::parse::parse;
use std::cmp::Ordering;

/// Compares two raw call number strings under classification rules.
///
/// Ordering is: letter prefix (case-insensitive, lexicographic), then main
/// class (numeric), then decimal digits compared positionally as a string.
/// An unparsable operand sorts before any parsable one, and two unparsable
/// operands compare equal, so the result is deterministic for every input
/// pair and `compare(a, b)` is always the reverse of `compare(b, a)`.
///
/// # Example
///
/// ```
/// use shelfmark::callnumber::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("296.81", "296.851"), Ordering::Less);
/// assert_eq!(compare("296.851", "296.9"), Ordering::Less);
/// assert_eq!(compare("QA76", "QB50"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    match (parse(a), parse(b)) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
