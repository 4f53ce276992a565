//! Data structures and types for MovieTUI
//!
//! Contains all shared models used across the application:
//! - **Genre**: reference data loaded once at startup for the filter selector
//! - **Movie**: transient per-query results from TMDB
//! - **FilterState**: the genre/year/sort selections composed into a
//!   discovery query
//!
//! Also holds the card-text helpers (poster URL, rating label, overview
//! snippet) shared by the TUI renderers and the CLI output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL for poster images; TMDB returns only the path fragment.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Placeholder shown when a movie has no poster path.
pub const FALLBACK_POSTER: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Oldest year offered by the year filter.
pub const YEAR_FLOOR: u16 = 1990;

/// Overview text is cut to this many characters on a card.
const OVERVIEW_CHARS: usize = 100;

// =============================================================================
// Genre
// =============================================================================

/// Movie genre from the TMDB genre list endpoint.
///
/// Loaded once at startup and used only to populate the genre selector
/// (value = id, label = name). Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A movie as returned by the trending, discover and search endpoints.
///
/// Fetched per query, rendered, then discarded; never stored beyond the
/// current render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: f32,
    /// Absent overviews are normalized to an empty string.
    pub overview: String,
}

impl Movie {
    /// Displayable poster URL: image base + path, or the fixed placeholder.
    pub fn poster_url(&self) -> String {
        match &self.poster_path {
            Some(path) => format!("{}{}", IMAGE_BASE_URL, path),
            None => FALLBACK_POSTER.to_string(),
        }
    }

    /// Rating rounded to one decimal, e.g. "7.8".
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// First 100 characters of the overview followed by an ellipsis,
    /// or "No description..." when the overview is empty.
    pub fn overview_snippet(&self) -> String {
        if self.overview.is_empty() {
            return "No description...".to_string();
        }
        let cut: String = self.overview.chars().take(OVERVIEW_CHARS).collect();
        format!("{}...", cut)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [★ {}]", self.title, self.rating_label())
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Sort order for the discovery query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// No explicit sort; the provider's default ordering.
    #[default]
    None,
    /// Descending vote average.
    Rating,
    /// Descending release date.
    Latest,
}

impl SortBy {
    /// All selectable orders, in selector order.
    pub const ALL: [SortBy; 3] = [SortBy::None, SortBy::Rating, SortBy::Latest];

    /// The provider's `sort_by` parameter value, if any.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SortBy::None => None,
            SortBy::Rating => Some("vote_average.desc"),
            SortBy::Latest => Some("release_date.desc"),
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            SortBy::None => "Default",
            SortBy::Rating => "Rating",
            SortBy::Latest => "Latest",
        }
    }
}

/// Current genre/year/sort selections.
///
/// `None` is the "no constraint" sentinel for genre and year. Mutated only by
/// selector change events; read synchronously when composing a discovery
/// query; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterState {
    pub genre: Option<u32>,
    pub year: Option<u16>,
    pub sort: SortBy,
}

// =============================================================================
// Helpers
// =============================================================================

/// Year selector entries: current year down to the floor, descending.
pub fn year_options(current_year: u16) -> Vec<u16> {
    (YEAR_FLOOR..=current_year).rev().collect()
}

/// Pseudo-random discovery page in 1..=10, seeded from the system clock.
pub fn random_page() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(0);
    seed % 10 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(overview: &str, poster: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "Test".into(),
            poster_path: poster.map(String::from),
            vote_average: 7.84,
            overview: overview.into(),
        }
    }

    #[test]
    fn test_poster_url_with_path() {
        let m = movie("", Some("/abc.jpg"));
        assert_eq!(m.poster_url(), format!("{}/abc.jpg", IMAGE_BASE_URL));
    }

    #[test]
    fn test_poster_url_fallback() {
        let m = movie("", None);
        assert_eq!(m.poster_url(), FALLBACK_POSTER);
    }

    #[test]
    fn test_rating_one_decimal() {
        assert_eq!(movie("", None).rating_label(), "7.8");
    }

    #[test]
    fn test_overview_snippet_short() {
        let m = movie("Short plot.", None);
        assert_eq!(m.overview_snippet(), "Short plot....");
    }

    #[test]
    fn test_overview_snippet_truncates_at_100_chars() {
        let long = "x".repeat(250);
        let m = movie(&long, None);
        let snippet = m.overview_snippet();
        assert_eq!(snippet, format!("{}...", "x".repeat(100)));
        assert_eq!(snippet.chars().count(), 103);
    }

    #[test]
    fn test_overview_snippet_missing() {
        assert_eq!(movie("", None).overview_snippet(), "No description...");
    }

    #[test]
    fn test_overview_snippet_multibyte_boundary() {
        // The cut counts characters, never bytes
        let long = "é".repeat(150);
        let m = movie(&long, None);
        assert_eq!(m.overview_snippet(), format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn test_year_options_descending_to_floor() {
        let years = year_options(2026);
        assert_eq!(years.len(), (2026 - 1990 + 1) as usize);
        assert_eq!(years.first(), Some(&2026));
        assert_eq!(years.last(), Some(&1990));
        assert!(years.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_random_page_in_range() {
        for _ in 0..50 {
            let page = random_page();
            assert!((1..=10).contains(&page));
        }
    }

    #[test]
    fn test_sort_params() {
        assert_eq!(SortBy::None.as_param(), None);
        assert_eq!(SortBy::Rating.as_param(), Some("vote_average.desc"));
        assert_eq!(SortBy::Latest.as_param(), Some("release_date.desc"));
    }

    #[test]
    fn test_filter_state_default_is_neutral() {
        let filters = FilterState::default();
        assert_eq!(filters.genre, None);
        assert_eq!(filters.year, None);
        assert_eq!(filters.sort, SortBy::None);
    }
}
