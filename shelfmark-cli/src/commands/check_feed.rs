//! The `check-feed` subcommand.
//!
//! Fetches the feed once, outside the cache, so operators can see parse
//! statistics and catch spreadsheet corruption before users notice missing
//! mappings.

use super::resolver_config;
use crate::error::CliError;
use shelfmark::feed::{FeedSource, ReqwestClient};

pub async fn run(feed_url: Option<String>) -> Result<(), CliError> {
    let config = resolver_config(feed_url)?;
    let client = ReqwestClient::with_timeout(config.http_timeout)
        .map_err(|e| CliError::ServiceCreation(e.into()))?;
    let source = FeedSource::new(client, config.feed_url);

    let (records, stats) = source.fetch_records().await.map_err(CliError::Feed)?;

    println!("Feed OK: {}", source.url());
    println!("  rows parsed:  {}", stats.parsed);
    println!("  rows dropped: {}", stats.dropped);

    let libraries: std::collections::BTreeSet<&str> =
        records.iter().map(|r| r.library_name.as_str()).collect();
    println!("  libraries:    {}", libraries.len());
    if stats.dropped > 0 {
        println!();
        println!("Dropped rows are logged with their line numbers; see the log file.");
    }
    Ok(())
}
