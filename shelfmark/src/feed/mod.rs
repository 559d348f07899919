//! Remote mapping feed: HTTP fetch and CSV parsing.
//!
//! The feed is an administrative spreadsheet exported as CSV and served over
//! HTTP(S). Rows are validated individually; a malformed row is dropped and
//! logged, never fatal, because a broken spreadsheet must not take down
//! resolution.

mod http;
mod parser;
mod source;
mod types;

pub use http::{AsyncHttpClient, ReqwestClient, DEFAULT_HTTP_TIMEOUT};
pub use parser::{parse_feed, FeedStats};
pub use source::FeedSource;
pub use types::FeedError;

#[cfg(test)]
pub use http::tests::MockHttpClient;
