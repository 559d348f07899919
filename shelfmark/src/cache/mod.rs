//! TTL cache around the mapping feed.
//!
//! Holds one immutable snapshot of the parsed feed and its lookup index.
//! Snapshots are swapped by reference, never mutated in place, so a lookup
//! in progress always sees one fully-formed index. On fetch failure the
//! previous snapshot keeps serving past its TTL; with no snapshot yet, the
//! engine degrades to an empty mapping set.

mod service;
mod snapshot;

pub use service::{MappingCache, DEFAULT_CACHE_TTL};
pub use snapshot::Snapshot;
