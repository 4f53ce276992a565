//! MovieTUI - terminal movie discovery over TMDB
//!
//! Trending carousel, random discovery, debounced free-text search and
//! composable genre/year/sort filters, all in the terminal.
//!
//! # Modules
//!
//! - `models` - Genres, movies, filter state and card-text helpers
//! - `api` - TMDB client (genres, trending, discover, search)
//! - `explorer` - Session controller and the `View` render seam
//! - `app` - TUI state, keyboard wiring and the search debounce
//! - `ui` - ratatui components (theme, carousel, grid, filters)

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod explorer;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use api::{DiscoverQuery, TmdbClient};
pub use app::{App, Request};
pub use explorer::{Explorer, View};
pub use models::{FilterState, Genre, Movie, SortBy};
