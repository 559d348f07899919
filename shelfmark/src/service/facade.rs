//! The resolver facade.

use super::config::ResolverConfig;
use super::error::ServiceError;
use crate::cache::MappingCache;
use crate::config::ConfigFile;
use crate::feed::{AsyncHttpClient, FeedSource, ReqwestClient};
use crate::mapping::{LocationQuery, MappingRecord};
use std::sync::Arc;
use tracing::debug;

/// Resolves call numbers to shelf locations.
///
/// One instance is shared process-wide (or per session). The remote feed
/// fetch is the only suspension point; callers that hit a stale cache await
/// the in-flight fetch and then read from the refreshed snapshot.
///
/// # Example
///
/// ```no_run
/// use shelfmark::mapping::LocationQuery;
/// use shelfmark::service::{ResolverConfig, ShelfResolver};
///
/// # async fn example() -> Result<(), shelfmark::service::ServiceError> {
/// let resolver = ShelfResolver::new(ResolverConfig::new("https://example.org/feed.csv"))?;
///
/// let query = LocationQuery::new("Sourasky", "General", "892.413 מאו");
/// for record in resolver.resolve(&query).await {
///     println!("{} ({})", record.shelf_code, record.floor.as_deref().unwrap_or("?"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct ShelfResolver<C: AsyncHttpClient> {
    cache: MappingCache<C>,
}

impl ShelfResolver<ReqwestClient> {
    /// Creates a resolver with a real HTTP client.
    pub fn new(config: ResolverConfig) -> Result<Self, ServiceError> {
        let client = ReqwestClient::with_timeout(config.http_timeout)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a resolver from the user config file
    /// (~/.shelfmark/config.ini), falling back to defaults when absent.
    pub fn from_config_file() -> Result<Self, ServiceError> {
        let config = ConfigFile::load()?;
        Self::new(ResolverConfig::from(&config.feed))
    }
}

impl<C: AsyncHttpClient> ShelfResolver<C> {
    /// Creates a resolver with an injected HTTP client (used by tests).
    pub fn with_client(client: C, config: ResolverConfig) -> Self {
        let source = FeedSource::new(client, config.feed_url);
        Self {
            cache: MappingCache::new(source, config.cache_ttl),
        }
    }

    /// Returns every shelf segment the call number occupies for the given
    /// library and collection, in either display language.
    ///
    /// An empty result means "no mapping available for this item" and is the
    /// worst observable outcome; fetch problems never surface here.
    pub async fn resolve(&self, query: &LocationQuery) -> Vec<Arc<MappingRecord>> {
        let index = self.cache.index().await;
        let matches = index.all_mappings(
            &query.library_name,
            &query.collection_name,
            &query.raw_call_number,
        );
        debug!(
            library = %query.library_name,
            collection = %query.collection_name,
            call_number = %query.raw_call_number,
            matches = matches.len(),
            "resolved location query"
        );
        matches
    }

    /// Reports whether any shelf mapping exists for the query, for callers
    /// deciding whether to show a UI affordance.
    pub async fn has_mapping(&self, query: &LocationQuery) -> bool {
        !self.resolve(query).await.is_empty()
    }

    /// Invalidates the cache; the next [`resolve`](Self::resolve) call
    /// fetches the feed regardless of TTL.
    pub fn force_refresh(&self) {
        self.cache.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedError, MockHttpClient};
    use std::time::Duration;

    const FEED: &str = "\
libraryName,libraryNameAlt,collectionName,collectionNameAlt,rangeStart,rangeEnd,shelfCode
Sourasky,סוראסקי,General,כללי,100,199,SHELF-04
Sourasky,סוראסקי,General,כללי,1,999,SHELF-01
";

    fn resolver(response: Result<Vec<u8>, FeedError>) -> ShelfResolver<MockHttpClient> {
        ShelfResolver::with_client(
            MockHttpClient { response },
            ResolverConfig::new("https://example.org/feed.csv"),
        )
    }

    #[tokio::test]
    async fn test_resolve_strips_cutter_and_matches() {
        let resolver = resolver(Ok(FEED.as_bytes().to_vec()));

        let query = LocationQuery::new("Sourasky", "General", "150.5 XYZ");
        let matches = resolver.resolve(&query).await;
        let shelves: Vec<&str> = matches.iter().map(|r| r.shelf_code.as_str()).collect();
        assert_eq!(shelves, vec!["SHELF-04", "SHELF-01"]);
    }

    #[tokio::test]
    async fn test_resolve_alternate_language_query() {
        let resolver = resolver(Ok(FEED.as_bytes().to_vec()));

        let primary = resolver
            .resolve(&LocationQuery::new("Sourasky", "General", "150"))
            .await;
        let alternate = resolver
            .resolve(&LocationQuery::new("סוראסקי", "כללי", "150"))
            .await;
        assert_eq!(primary, alternate);
    }

    #[tokio::test]
    async fn test_unknown_collection_is_empty_not_error() {
        let resolver = resolver(Ok(FEED.as_bytes().to_vec()));

        let query = LocationQuery::new("Sourasky", "Periodicals", "150");
        assert!(resolver.resolve(&query).await.is_empty());
        assert!(!resolver.has_mapping(&query).await);
    }

    #[tokio::test]
    async fn test_fetch_failure_resolves_to_empty() {
        let resolver = resolver(Err(FeedError::Http("503".to_string())));

        let query = LocationQuery::new("Sourasky", "General", "150");
        assert!(resolver.resolve(&query).await.is_empty());
    }

    #[tokio::test]
    async fn test_has_mapping() {
        let resolver = resolver(Ok(FEED.as_bytes().to_vec()));

        assert!(
            resolver
                .has_mapping(&LocationQuery::new("Sourasky", "General", "150"))
                .await
        );
        assert!(
            !resolver
                .has_mapping(&LocationQuery::new("Sourasky", "General", "oversize"))
                .await
        );
    }

    #[tokio::test]
    async fn test_force_refresh_triggers_fetch() {
        let resolver = ShelfResolver::with_client(
            MockHttpClient {
                response: Ok(FEED.as_bytes().to_vec()),
            },
            ResolverConfig::new("https://example.org/feed.csv")
                .with_cache_ttl(Duration::from_secs(300)),
        );

        let query = LocationQuery::new("Sourasky", "General", "150");
        assert_eq!(resolver.resolve(&query).await.len(), 2);
        resolver.force_refresh();
        assert_eq!(resolver.resolve(&query).await.len(), 2);
    }
}
