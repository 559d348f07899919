//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [feed] section
    if let Some(section) = ini.section(Some("feed")) {
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if !v.is_empty() {
                config.feed.url = v.to_string();
            }
        }
        if let Some(v) = section.get("cache_ttl") {
            config.feed.cache_ttl_secs = parse_seconds("feed", "cache_ttl", v)?;
        }
        if let Some(v) = section.get("http_timeout") {
            config.feed.http_timeout_secs = parse_seconds("feed", "http_timeout", v)?;
        }
    }

    Ok(config)
}

fn parse_seconds(section: &str, key: &str, value: &str) -> Result<u64, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected a whole number of seconds".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_parse_full_section() {
        let config = load(
            "[feed]\nurl = https://example.org/feed.csv\ncache_ttl = 600\nhttp_timeout = 10\n",
        )
        .unwrap();
        assert_eq!(config.feed.url, "https://example.org/feed.csv");
        assert_eq!(config.feed.cache_ttl_secs, 600);
        assert_eq!(config.feed.http_timeout_secs, 10);
    }

    #[test]
    fn test_parse_missing_keys_use_defaults() {
        let config = load("[feed]\nurl = https://example.org/feed.csv\n").unwrap();
        assert_eq!(config.feed.cache_ttl_secs, 300);
        assert_eq!(config.feed.http_timeout_secs, 30);
    }

    #[test]
    fn test_parse_empty_ini_is_default() {
        let config = load("").unwrap();
        assert_eq!(config.feed.url, "");
        assert_eq!(config.feed.cache_ttl_secs, 300);
    }

    #[test]
    fn test_parse_invalid_ttl_rejected() {
        let err = load("[feed]\ncache_ttl = five minutes\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { .. }));
    }
}
