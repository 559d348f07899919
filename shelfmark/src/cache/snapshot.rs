//! Cache snapshot type.

use crate::feed::FeedStats;
use crate::mapping::MappingIndex;
use std::sync::Arc;
use std::time::Instant;

/// One complete, immutable result of a feed refresh.
///
/// The index owns the records; replacing the snapshot replaces everything a
/// reader can observe in a single reference swap.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Lookup index built from the fetched records.
    pub index: Arc<MappingIndex>,
    /// Row counters from the parse that produced this snapshot.
    pub stats: FeedStats,
    /// When the successful fetch completed.
    pub fetched_at: Instant,
}
