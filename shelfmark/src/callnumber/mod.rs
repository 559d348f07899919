//! Call number parsing, ordering, and range matching.
//!
//! Call numbers are compared under classification rules, not naive numeric
//! comparison: the portion after a decimal point is ordered digit-by-digit as
//! a string, because that is how physical shelving is ordered (296.851 sits
//! before 296.9, which sits before 297).

mod compare;
mod parse;
mod range;

pub use compare::compare;
pub use parse::{parse, ParsedCallNumber};
pub use range::{in_range, strip_cutter};
