//! Feed fetch and parse orchestration.

use super::http::AsyncHttpClient;
use super::parser::{parse_feed, FeedStats};
use super::types::FeedError;
use crate::mapping::MappingRecord;
use tracing::{debug, info};

/// Fetches the mapping feed from its URL and parses it into records.
///
/// Generic over the HTTP client so tests can inject a mock. The fetch is the
/// only suspension point in the whole engine.
pub struct FeedSource<C: AsyncHttpClient> {
    client: C,
    url: String,
}

impl<C: AsyncHttpClient> FeedSource<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The feed URL this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches and parses the feed.
    ///
    /// Row-level problems are absorbed into `FeedStats`; only a failed fetch
    /// or an unusable body is an error.
    pub async fn fetch_records(&self) -> Result<(Vec<MappingRecord>, FeedStats), FeedError> {
        debug!(url = %self.url, "fetching mapping feed");
        let body = self.client.get(&self.url).await?;
        let (records, stats) = parse_feed(&body)?;
        info!(
            parsed = stats.parsed,
            dropped = stats.dropped,
            "mapping feed refreshed"
        );
        Ok((records, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::MockHttpClient;

    const FEED: &str = "\
libraryName,collectionName,rangeStart,rangeEnd,shelfCode
Sourasky,General,100,199,S-01
";

    #[tokio::test]
    async fn test_fetch_records_success() {
        let source = FeedSource::new(
            MockHttpClient {
                response: Ok(FEED.as_bytes().to_vec()),
            },
            "https://example.org/feed.csv",
        );

        let (records, stats) = source.fetch_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(stats.parsed, 1);
        assert_eq!(records[0].shelf_code, "S-01");
    }

    #[tokio::test]
    async fn test_fetch_records_http_error() {
        let source = FeedSource::new(
            MockHttpClient {
                response: Err(FeedError::Http("503 Service Unavailable".to_string())),
            },
            "https://example.org/feed.csv",
        );

        let err = source.fetch_records().await.unwrap_err();
        assert!(matches!(err, FeedError::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_records_unusable_body() {
        let source = FeedSource::new(
            MockHttpClient {
                response: Ok(b"not,a,mapping,feed\n1,2,3,4\n".to_vec()),
            },
            "https://example.org/feed.csv",
        );

        let err = source.fetch_records().await.unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }
}
