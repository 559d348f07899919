//! Range membership for call numbers, with cutter stripping.

use super::parse::parse;

/// Strips a cutter suffix from a raw call number.
///
/// The cutter is the first whitespace run that is immediately followed by an
/// alphabetic character (Latin or Hebrew); it and everything after it are
/// removed. Returns the input unchanged when no cutter is present. Idempotent.
///
/// # Example
///
/// ```
/// use shelfmark::callnumber::strip_cutter;
///
/// assert_eq!(strip_cutter("892.413 מאו"), "892.413");
/// assert_eq!(strip_cutter("301.5 ABC"), "301.5");
/// assert_eq!(strip_cutter("296.851"), "296.851");
/// ```
pub fn strip_cutter(raw: &str) -> &str {
    let mut iter = raw.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        if !c.is_whitespace() {
            continue;
        }
        // Skip the rest of the whitespace run, then look at what follows it.
        while let Some(&(_, next)) = iter.peek() {
            if next.is_whitespace() {
                iter.next();
            } else {
                break;
            }
        }
        match iter.peek() {
            Some(&(_, next)) if next.is_alphabetic() => return &raw[..i],
            _ => {}
        }
    }
    raw
}

/// Reports whether a raw call number falls inside `[start, end]`.
///
/// The cutter suffix is stripped from `raw` before comparison. Returns
/// `false` whenever the call number or either endpoint fails to parse, so a
/// malformed or inverted range never matches and never crashes.
pub fn in_range(raw: &str, start: &str, end: &str) -> bool {
    let stripped = strip_cutter(raw);
    let (Some(c), Some(s), Some(e)) = (parse(stripped), parse(start), parse(end)) else {
        return false;
    };
    c >= s && c <= e
}
