//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Mapping feed settings
    pub feed: FeedSettings,
}

/// Mapping feed configuration.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    /// URL of the CSV mapping feed. Empty until the operator sets it; an
    /// empty URL means every fetch fails and resolution degrades to "no
    /// mapping found".
    pub url: String,
    /// Snapshot lifetime in seconds.
    pub cache_ttl_secs: u64,
    /// HTTP request timeout in seconds.
    pub http_timeout_secs: u64,
}
