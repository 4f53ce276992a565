//! CLI Command Handlers
//!
//! Implements the scriptable commands by calling the TMDB client directly.
//! Each handler takes CLI args and Output, returns ExitCode.

use crate::api::{DiscoverQuery, TmdbClient};
use crate::cli::{DiscoverCmd, ExitCode, Output, SearchCmd, TrendingCmd};
use crate::config::Config;
use crate::models::random_page;

fn client() -> TmdbClient {
    let config = Config::load();
    TmdbClient::new(config.tmdb_api_key())
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, output: &Output) -> ExitCode {
    let client = client();

    output.info(format!("Searching for: {}", cmd.query));

    match client.search(&cmd.query).await {
        Ok(mut movies) => {
            movies.truncate(cmd.limit);
            if let Err(e) = output.print(&movies) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Search failed: {}", e), ExitCode::NetworkError),
    }
}

// =============================================================================
// Trending Command
// =============================================================================

pub async fn trending_cmd(cmd: TrendingCmd, output: &Output) -> ExitCode {
    let client = client();

    output.info("Fetching trending (today)...");

    match client.trending_today().await {
        Ok(mut movies) => {
            movies.truncate(cmd.limit);
            if let Err(e) = output.print(&movies) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(
            format!("Trending fetch failed: {}", e),
            ExitCode::NetworkError,
        ),
    }
}

// =============================================================================
// Discover Command
// =============================================================================

pub async fn discover_cmd(cmd: DiscoverCmd, output: &Output) -> ExitCode {
    let client = client();

    let page = cmd.page.unwrap_or_else(random_page);
    let query = DiscoverQuery {
        page: Some(page),
        genre: cmd.genre,
        year: cmd.year,
        sort: cmd.sort.map(Into::into).unwrap_or_default(),
    };

    output.info(format!("Discovering movies (page {})...", page));

    match client.discover(&query).await {
        Ok(movies) => {
            if let Err(e) = output.print(&movies) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Discover failed: {}", e), ExitCode::NetworkError),
    }
}

// =============================================================================
// Genres Command
// =============================================================================

pub async fn genres_cmd(output: &Output) -> ExitCode {
    let client = client();

    match client.genres().await {
        Ok(genres) => {
            if let Err(e) = output.print(&genres) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Genre list failed: {}", e), ExitCode::NetworkError),
    }
}
