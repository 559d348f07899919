//! Resolver configuration.

use crate::cache::DEFAULT_CACHE_TTL;
use crate::config::FeedSettings;
use crate::feed::DEFAULT_HTTP_TIMEOUT;
use std::time::Duration;

/// Configuration for a [`ShelfResolver`](super::ShelfResolver).
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// URL of the CSV mapping feed.
    pub feed_url: String,
    /// How long a fetched snapshot is served before refreshing.
    pub cache_ttl: Duration,
    /// HTTP request timeout for feed fetches.
    pub http_timeout: Duration,
}

impl ResolverConfig {
    /// Creates a configuration with the default TTL (300 s) and timeout (30 s).
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            cache_ttl: DEFAULT_CACHE_TTL,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Sets the snapshot lifetime.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Sets the HTTP request timeout.
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }
}

impl From<&FeedSettings> for ResolverConfig {
    fn from(settings: &FeedSettings) -> Self {
        Self {
            feed_url: settings.url.clone(),
            cache_ttl: Duration::from_secs(settings.cache_ttl_secs),
            http_timeout: Duration::from_secs(settings.http_timeout_secs),
        }
    }
}
