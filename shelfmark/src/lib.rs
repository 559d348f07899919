//! Shelfmark - call number to shelf location resolution
//!
//! This library resolves a library name, collection name, and raw call
//! number (as shown in a catalog's item view, in either display language)
//! to the physical shelf segment(s) holding the item, for display on a
//! floor-plan UI.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use shelfmark::mapping::LocationQuery;
//! use shelfmark::service::{ResolverConfig, ShelfResolver};
//!
//! let resolver = ShelfResolver::new(ResolverConfig::new(feed_url))?;
//!
//! let query = LocationQuery::new("Sourasky", "General", "892.413 מאו");
//! let shelves = resolver.resolve(&query).await;
//! ```
//!
//! The mapping feed is fetched over HTTP, cached with a TTL, and served
//! from the previous snapshot when a refresh fails; no failure in this
//! engine is ever fatal to the host.

pub mod cache;
pub mod callnumber;
pub mod config;
pub mod feed;
pub mod logging;
pub mod mapping;
pub mod service;

/// Version of the shelfmark library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
