//! Service-level errors.

use crate::config::ConfigFileError;
use crate::feed::FeedError;
use thiserror::Error;

/// Errors from constructing a resolver.
///
/// Resolution itself never fails: once a resolver exists, the worst outcome
/// of a lookup is an empty result.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The HTTP client could not be created.
    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] FeedError),

    /// The config file could not be read or was invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigFileError),
}
