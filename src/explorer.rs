//! Session controller: fetch-and-render orchestration
//!
//! One `Explorer` instance per session owns the API client, the genre table,
//! the current filter selections and the search-mode flag. Each operation
//! fetches from TMDB and pushes the result to a [`View`] — the render seam
//! that keeps the TUI binding swappable and the controller testable.
//!
//! Error surfaces are deliberately asymmetric: a trending failure renders a
//! static error in the carousel region, while discovery/search/filter
//! failures are logged only and leave the grid as it was.

use tracing::{error, warn};

use crate::api::{DiscoverQuery, TmdbClient};
use crate::models::{random_page, FilterState, Genre, Movie};

/// At most this many trending movies are ranked in the carousel.
pub const TRENDING_LIMIT: usize = 10;

/// Render operations the controller drives.
///
/// The trending carousel and the discovery/search grid are independent
/// regions; no operation ever writes to both.
pub trait View {
    /// Populate the genre selector (one option per genre, response order).
    fn set_genre_options(&mut self, genres: &[Genre]);
    /// Replace the trending carousel with ranked movies.
    fn render_trending(&mut self, movies: Vec<Movie>);
    /// Replace the trending carousel with a static error message.
    fn render_trending_error(&mut self);
    /// Replace the grid with movie cards (or the empty placeholder).
    fn render_grid(&mut self, movies: Vec<Movie>);
    /// Show or hide the "clear filters" affordance.
    fn set_clear_visible(&mut self, visible: bool);
}

/// Session-scoped controller coordinating the trending feed, the discovery
/// grid, search and filter composition.
pub struct Explorer {
    client: TmdbClient,
    genres: Vec<Genre>,
    filters: FilterState,
    searching: bool,
}

impl Explorer {
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client,
            genres: Vec::new(),
            filters: FilterState::default(),
            searching: false,
        }
    }

    /// Genre table loaded at bootstrap (empty if the load failed).
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// True while a non-empty search query is active.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Current filter selections.
    pub fn filters(&self) -> FilterState {
        self.filters
    }

    // -------------------------------------------------------------------------
    // Bootstrap
    // -------------------------------------------------------------------------

    /// Run the startup sequence: genre list, trending carousel, initial
    /// random discovery page.
    ///
    /// A genre-load failure is logged and skipped; the UI stays usable with
    /// an empty genre filter.
    pub async fn bootstrap(&mut self, view: &mut impl View) {
        match self.client.genres().await {
            Ok(genres) => {
                self.genres = genres;
                view.set_genre_options(&self.genres);
            }
            Err(e) => warn!("genre load failed: {:#}", e),
        }

        self.load_trending(view).await;
        self.load_random(view).await;
    }

    // -------------------------------------------------------------------------
    // Trending feed
    // -------------------------------------------------------------------------

    /// Fetch today's trending movies and render the top ten as a ranked
    /// carousel. Any failure replaces the carousel with static error text.
    pub async fn load_trending(&mut self, view: &mut impl View) {
        match self.client.trending_today().await {
            Ok(mut movies) => {
                movies.truncate(TRENDING_LIMIT);
                view.render_trending(movies);
            }
            Err(e) => {
                warn!("trending load failed: {:#}", e);
                view.render_trending_error();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Discovery / Filter / Search (shared grid)
    // -------------------------------------------------------------------------

    /// Fetch a pseudo-random page (1..=10) of the default discovery query.
    /// On failure the grid keeps its previous contents.
    pub async fn load_random(&mut self, view: &mut impl View) {
        let query = DiscoverQuery::page(random_page());
        match self.client.discover(&query).await {
            Ok(movies) => view.render_grid(movies),
            Err(e) => error!("movie load failed: {:#}", e),
        }
    }

    /// Apply the given filter selections as a discovery query. Constraints
    /// at their sentinels are omitted. Always shows the clear affordance.
    pub async fn apply_filters(&mut self, view: &mut impl View, filters: FilterState) {
        self.filters = filters;
        view.set_clear_visible(true);

        let query = DiscoverQuery::from_filters(filters);
        match self.client.discover(&query).await {
            Ok(movies) => view.render_grid(movies),
            Err(e) => error!("filter load failed: {:#}", e),
        }
    }

    /// Run a free-text search. A trimmed-empty query exits search mode,
    /// hides the clear affordance and falls back to a fresh random page;
    /// otherwise the raw query text is sent as-is.
    pub async fn search(&mut self, view: &mut impl View, query: &str) {
        if query.trim().is_empty() {
            self.searching = false;
            view.set_clear_visible(false);
            self.load_random(view).await;
            return;
        }

        self.searching = true;
        view.set_clear_visible(true);

        match self.client.search(query).await {
            Ok(movies) => view.render_grid(movies),
            Err(e) => error!("search failed: {:#}", e),
        }
    }

    /// Reset filters and search mode, hide the clear affordance and load a
    /// fresh random discovery page.
    pub async fn clear(&mut self, view: &mut impl View) {
        self.filters = FilterState::default();
        self.searching = false;
        view.set_clear_visible(false);
        self.load_random(view).await;
    }
}
