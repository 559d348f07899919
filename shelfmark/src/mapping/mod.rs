//! Mapping records and the two-level lookup index.
//!
//! A [`MappingRecord`] describes one physical shelf segment and the numeric
//! range of call numbers it holds. The [`MappingIndex`] makes records
//! reachable under every display-language variant of their library and
//! collection names.

mod index;
mod normalize;
mod record;

pub use index::MappingIndex;
pub use normalize::normalize_key;
pub use record::{LocationQuery, MappingRecord};
