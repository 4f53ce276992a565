//! Configuration management for MovieTUI
//!
//! Handles config file loading and API key resolution.
//! Config is stored at ~/.config/movietui/config.toml

use serde::Deserialize;
use std::path::PathBuf;

/// Bundled TMDB API key used when no key is configured.
const DEFAULT_API_KEY: &str = "60ff5b28d357cb55797b688329ccb20c";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// TMDB API key override
    pub tmdb_api_key: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/movietui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("movietui").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Get TMDB API key with fallback chain:
    /// 1. Environment variable TMDB_API_KEY
    /// 2. Key from config file
    /// 3. Bundled default key
    pub fn tmdb_api_key(&self) -> String {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.is_empty() {
                return key;
            }
        }

        self.tmdb_api_key
            .clone()
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string())
    }
}
