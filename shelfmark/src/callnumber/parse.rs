//! Call number parsing.

/// A call number decomposed into its comparable parts.
///
/// The derived ordering is the classification ordering: `prefix` first
/// (stored uppercased, so the lexicographic comparison is case-insensitive),
/// then `main_class` numerically, then `decimal` as a plain string so that
/// digit positions are compared left to right (`"81" < "851" < "9"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParsedCallNumber {
    /// Leading letters, uppercased (e.g. `"QA"`), empty for pure Dewey numbers.
    pub prefix: String,
    /// The integer class number (e.g. `76` in `"QA76.73"`).
    pub main_class: u32,
    /// Digits after the decimal point, kept as a string (e.g. `"73"`).
    /// Empty when the call number has no decimal part.
    pub decimal: String,
}

/// Parses a raw call number string.
///
/// The recognized pattern is: optional leading letters, a required digit run,
/// and an optional `.` followed by further digits. Anything after that pattern
/// is ignored. Returns `None` when no digit run follows the letters; callers
/// treat an unparsable call number as "matches nothing", never as an error.
///
/// # Example
///
/// ```
/// use shelfmark::callnumber::parse;
///
/// let parsed = parse("QA76.73").unwrap();
/// assert_eq!(parsed.prefix, "QA");
/// assert_eq!(parsed.main_class, 76);
/// assert_eq!(parsed.decimal, "73");
///
/// assert!(parse("oversize").is_none());
/// ```
pub fn parse(raw: &str) -> Option<ParsedCallNumber> {
    let s = raw.trim_start();
    let mut chars = s.char_indices().peekable();

    let mut prefix_end = 0;
    while let Some(&(i, c)) = chars.peek() {
        if c.is_alphabetic() {
            prefix_end = i + c.len_utf8();
            chars.next();
        } else {
            break;
        }
    }
    let prefix: String = s[..prefix_end].to_uppercase();

    let mut digits_end = prefix_end;
    while let Some(&(i, c)) = chars.peek() {
        if c.is_ascii_digit() {
            digits_end = i + 1;
            chars.next();
        } else {
            break;
        }
    }
    if digits_end == prefix_end {
        return None;
    }
    // A class number too large for u32 is not a real call number.
    let main_class: u32 = s[prefix_end..digits_end].parse().ok()?;

    let mut decimal = String::new();
    if let Some(&(_, '.')) = chars.peek() {
        chars.next();
        while let Some(&(_, c)) = chars.peek() {
            if c.is_ascii_digit() {
                decimal.push(c);
                chars.next();
            } else {
                break;
            }
        }
    }

    Some(ParsedCallNumber {
        prefix,
        main_class,
        decimal,
    })
}
