//! High-level resolver facade.
//!
//! This module wires the feed source, cache, and index together behind a
//! small API, following the Facade pattern. Other layers (the floor-plan UI,
//! the CLI) call [`ShelfResolver`] and nothing else.

mod config;
mod error;
mod facade;

pub use config::ResolverConfig;
pub use error::ServiceError;
pub use facade::ShelfResolver;
