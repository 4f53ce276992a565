//! API clients for external services
//!
//! - TMDB: genre list, trending feed, discovery and free-text search

pub mod tmdb;

pub use tmdb::{DiscoverQuery, TmdbClient};
