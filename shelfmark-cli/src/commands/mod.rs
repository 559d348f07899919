//! CLI subcommand implementations.

pub mod check_feed;
pub mod config;
pub mod resolve;

use crate::error::CliError;
use shelfmark::config::ConfigFile;
use shelfmark::service::ResolverConfig;

/// Builds a resolver configuration from the config file, with an optional
/// command-line feed URL override.
pub(crate) fn resolver_config(feed_url: Option<String>) -> Result<ResolverConfig, CliError> {
    let config = ConfigFile::load().map_err(|e| CliError::Config(e.to_string()))?;
    let mut resolver = ResolverConfig::from(&config.feed);
    if let Some(url) = feed_url {
        resolver.feed_url = url;
    }
    if resolver.feed_url.is_empty() {
        return Err(CliError::Config("no feed URL configured".to_string()));
    }
    Ok(resolver)
}
