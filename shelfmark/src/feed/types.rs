//! Feed error types.

use thiserror::Error;

/// Errors from fetching or parsing the mapping feed.
///
/// None of these are fatal to the host: the cache layer answers them by
/// falling back to the previous snapshot, or to an empty mapping set when no
/// snapshot exists yet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    /// Network or HTTP failure, including an elapsed request timeout.
    #[error("feed fetch failed: {0}")]
    Http(String),

    /// The feed body could not be interpreted as a header-labeled CSV table.
    #[error("feed parse failed: {0}")]
    Parse(String),
}
