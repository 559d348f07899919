//! The `resolve` subcommand.

use super::resolver_config;
use crate::error::CliError;
use shelfmark::mapping::LocationQuery;
use shelfmark::service::ShelfResolver;

/// Resolves one query against the live feed and prints every matching
/// shelf segment.
pub async fn run(
    library: &str,
    collection: &str,
    call_number: &str,
    feed_url: Option<String>,
) -> Result<(), CliError> {
    let config = resolver_config(feed_url)?;
    let resolver = ShelfResolver::new(config).map_err(CliError::ServiceCreation)?;

    let query = LocationQuery::new(library, collection, call_number);
    let matches = resolver.resolve(&query).await;

    if matches.is_empty() {
        println!("No shelf mapping found for this item.");
        return Ok(());
    }

    for record in matches {
        let mut line = record.shelf_code.clone();
        if let Some(label) = &record.shelf_label {
            line.push_str(&format!("  {}", label));
        }
        if let Some(floor) = &record.floor {
            line.push_str(&format!("  (floor {})", floor));
        }
        println!("{}", line);
        if let Some(description) = &record.description {
            println!("    {}", description);
        }
    }
    Ok(())
}
