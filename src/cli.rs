//! CLI - Command Line Interface for MovieTUI
//!
//! Every TUI feed is scriptable: trending, discovery, filtered discovery
//! and search. All output is JSON-parseable for automation.
//!
//! # Examples
//!
//! ```bash
//! # Search for movies
//! movietui search "the batman" --json
//!
//! # Trending today, filtered discovery
//! movietui trending
//! movietui discover --genre 28 --year 2019 --sort rating
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::IsTerminal;

use crate::models::SortBy;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// MovieTUI - terminal movie discovery over TMDB
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "movietui",
    version,
    author = "Gorka & Hermes",
    about = "Terminal movie discovery: trending, search and filters over TMDB",
    after_help = "EXAMPLES:\n\
                  movietui                              Launch interactive TUI\n\
                  movietui search \"blade runner\"        Free-text search\n\
                  movietui discover --genre 28          Filtered discovery\n\
                  movietui trending --json              Trending today as JSON"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Free-text movie search
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Today's trending movies
    #[command(visible_alias = "tr")]
    Trending(TrendingCmd),

    /// Discover movies by genre, year and sort order
    #[command(visible_alias = "d")]
    Discover(DiscoverCmd),

    /// List movie genres
    #[command(visible_alias = "g")]
    Genres,
}

#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct TrendingCmd {
    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct DiscoverCmd {
    /// Genre id constraint
    #[arg(long, short = 'g')]
    pub genre: Option<u32>,

    /// Release year constraint
    #[arg(long, short = 'y')]
    pub year: Option<u16>,

    /// Sort order
    #[arg(long, short = 's', value_enum)]
    pub sort: Option<SortArg>,

    /// Page number (omit for a random page 1-10)
    #[arg(long, short = 'p')]
    pub page: Option<u32>,
}

/// Sort order argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SortArg {
    /// Descending vote average
    Rating,
    /// Descending release date
    Latest,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Rating => SortBy::Rating,
            SortArg::Latest => SortBy::Latest,
        }
    }
}

// =============================================================================
// Output
// =============================================================================

/// JSON envelope for scriptable output
#[derive(Debug, Serialize)]
struct JsonOutput<T: Serialize> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    fn error_msg(msg: &str) -> JsonOutput<()> {
        JsonOutput {
            ok: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Output writer honoring --json and --quiet
pub struct Output {
    json: bool,
    quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet and JSON modes)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
