//! TMDB (The Movie Database) API client
//!
//! Provides the four provider endpoints the app uses: genre list, trending
//! movies of the day, parameterized discovery and free-text search.
//! API docs: https://developer.themoviedb.org/docs
//!
//! The key is sent as an `api_key` query parameter. Requests are issued
//! exactly once: no retry, no timeout. A hung request simply never resolves
//! and the corresponding screen region stays as it was.

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{FilterState, Genre, Movie, SortBy};

/// TMDB API error types
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

// =============================================================================
// Discover Query
// =============================================================================

/// Parameters for the discover endpoint.
///
/// Every field is optional; a constraint at its sentinel is omitted from the
/// request entirely rather than sent with a neutral value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverQuery {
    pub page: Option<u32>,
    pub genre: Option<u32>,
    pub year: Option<u16>,
    pub sort: SortBy,
}

impl DiscoverQuery {
    /// Default discovery query for a specific page (the random-page path).
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Discovery query composed from the current filter selections.
    pub fn from_filters(filters: FilterState) -> Self {
        Self {
            page: None,
            genre: filters.genre,
            year: filters.year,
            sort: filters.sort,
        }
    }

    /// Query string for the discover endpoint ("" when nothing is set).
    fn to_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(genre) = self.genre {
            params.push(format!("with_genres={}", genre));
        }
        if let Some(year) = self.year {
            params.push(format!("primary_release_year={}", year));
        }
        if let Some(sort) = self.sort.as_param() {
            params.push(format!("sort_by={}", sort));
        }
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// TMDB API client
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.themoviedb.org/3")
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Make an authenticated GET request, appending the api_key parameter
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let sep = if endpoint.contains('?') { '&' } else { '?' };
        let url = format!("{}{}{}api_key={}", self.base_url, endpoint, sep, self.api_key);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(TmdbError::RequestFailed)?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await.map_err(TmdbError::RequestFailed)?;
                let parsed: T = serde_json::from_str(&body)
                    .map_err(|e| TmdbError::InvalidResponse(format!("JSON parse error: {}", e)))?;
                Ok(parsed)
            }
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound.into()),
            status => Err(TmdbError::ServerError(status.as_u16()).into()),
        }
    }

    /// Get the movie genre list (reference data, loaded once at startup)
    pub async fn genres(&self) -> Result<Vec<Genre>> {
        let response: GenreListResponse = self.get("/genre/movie/list").await?;
        Ok(response.genres)
    }

    /// Get today's trending movies
    pub async fn trending_today(&self) -> Result<Vec<Movie>> {
        let response: MovieListResponse = self.get("/trending/movie/day").await?;
        Ok(response.into_movies())
    }

    /// Discover movies by optional genre, release year, sort order and page
    pub async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<Movie>> {
        let endpoint = format!("/discover/movie{}", query.to_query());
        let response: MovieListResponse = self.get(&endpoint).await?;
        Ok(response.into_movies())
    }

    /// Free-text movie search
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        let endpoint = format!("/search/movie?query={}", urlencoding::encode(query));
        let response: MovieListResponse = self.get(&endpoint).await?;
        Ok(response.into_movies())
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct MovieListResponse {
    #[serde(default)]
    results: Vec<MovieRaw>,
}

impl MovieListResponse {
    fn into_movies(self) -> Vec<Movie> {
        self.results.into_iter().map(MovieRaw::into_movie).collect()
    }
}

#[derive(Debug, Deserialize)]
struct MovieRaw {
    id: u64,
    title: Option<String>,
    poster_path: Option<String>,
    vote_average: Option<f32>,
    overview: Option<String>,
}

impl MovieRaw {
    fn into_movie(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title.unwrap_or_default(),
            poster_path: self.poster_path,
            vote_average: self.vote_average.unwrap_or(0.0),
            overview: self.overview.unwrap_or_default(),
        }
    }
}
