//! Default values for all configuration settings.

use super::settings::*;

/// Default snapshot lifetime in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            feed: FeedSettings::default(),
        }
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
