//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented INI representation written to `config.ini`.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[feed]
; URL of the CSV shelf-mapping feed. Resolution returns no matches until
; this is set.
url = {url}
; How long a fetched feed snapshot is served before refreshing, in seconds.
cache_ttl = {cache_ttl}
; HTTP request timeout in seconds. An elapsed timeout counts as a fetch
; failure and the previous snapshot keeps serving.
http_timeout = {http_timeout}
"#,
        url = config.feed.url,
        cache_ttl = config.feed.cache_ttl_secs,
        http_timeout = config.feed.http_timeout_secs,
    )
}
