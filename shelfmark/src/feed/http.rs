//! HTTP client abstraction for testability.

use super::types::FeedError;
use std::future::Future;
use std::time::Duration;

/// Default request timeout. Resolution must never hang on the feed; an
/// elapsed timeout is reported as a fetch failure and the cache falls back.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for asynchronous HTTP GET operations.
///
/// This abstraction allows dependency injection of mock clients in tests,
/// so the resolver and cache can be exercised without a network.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FeedError>> + Send;
}

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new client with the default request timeout.
    pub fn new() -> Result<Self, FeedError> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    /// Creates a new client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FeedError::Http(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| FeedError::Http(format!("Failed to read response: {}", e)))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock HTTP client for testing.
    #[derive(Clone)]
    pub struct MockHttpClient {
        pub response: Result<Vec<u8>, FeedError>,
    }

    impl AsyncHttpClient for MockHttpClient {
        async fn get(&self, _url: &str) -> Result<Vec<u8>, FeedError> {
            self.response.clone()
        }
    }
}
