//! MovieTUI - terminal movie discovery over TMDB
//!
//! Trending carousel, random discovery, debounced search and composable
//! filters in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! movietui
//!
//! # CLI mode (for automation)
//! movietui search "blade runner"
//! movietui discover --genre 28 --sort rating
//! movietui trending --json
//! ```

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use movietui::app::{App, InputMode, Request};
use movietui::cli::{Cli, Command, ExitCode, Output};
use movietui::commands;
use movietui::config::Config;
use movietui::explorer::Explorer;
use movietui::ui::{carousel, filters, grid, Theme};
use movietui::TmdbClient;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui().await
    }
}

/// Log to stderr, filtered by RUST_LOG (silent by default).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &output).await,
        Some(Command::Trending(cmd)) => commands::trending_cmd(cmd, &output).await,
        Some(Command::Discover(cmd)) => commands::discover_cmd(cmd, &output).await,
        Some(Command::Genres) => commands::genres_cmd(&output).await,
        None => ExitCode::Success, // unreachable, guarded by is_cli_mode
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui() -> Result<()> {
    let config = Config::load();
    let client = TmdbClient::new(config.tmdb_api_key());
    let mut explorer = Explorer::new(client);

    let current_year = chrono::Local::now().year() as u16;
    let mut app = App::new(current_year);

    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app, &mut explorer).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, dispatches fetches, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App, explorer: &mut Explorer) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    // Startup sequence: genres, trending carousel, initial random page
    terminal.draw(|frame| render_ui(frame, app))?;
    explorer.bootstrap(app).await;

    while app.running {
        terminal.draw(|frame| render_ui(frame, app))?;

        // Poll for events with timeout; the tick doubles as the debounce clock
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key, Instant::now()) {
                        Some(Request::FilterChanged) => {
                            let filter_state = app.current_filters();
                            explorer.apply_filters(app, filter_state).await;
                        }
                        Some(Request::ClearFilters) => {
                            explorer.clear(app).await;
                        }
                        None => {}
                    }
                }
            }
        }

        // A pending search fires once input has been quiet past its deadline
        if let Some(query) = app.take_due_search(Instant::now()) {
            explorer.search(app, &query).await;
        }
    }

    Ok(())
}

// =============================================================================
// UI Rendering
// =============================================================================

/// Main render function - lays out the regions and dispatches to components
fn render_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Clear with background color
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    // Main layout: header, trending carousel, filter strip, grid, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (logo + search)
            Constraint::Length(7), // Trending carousel
            Constraint::Length(3), // Filter strip
            Constraint::Min(1),    // Movie grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    carousel::render_carousel(frame, chunks[1], &app.trending);
    filters::render_filter_bar(frame, chunks[2], app);
    grid::render_grid(frame, chunks[3], &app.grid);
    render_status_bar(frame, chunks[4], app);
}

/// Render the header with logo and search box
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Logo
            Constraint::Min(1),     // Search box
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "MOVIE",
            ratatui::style::Style::default()
                .fg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "TUI",
            ratatui::style::Style::default()
                .fg(Theme::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    filters::render_search_box(frame, header_chunks[1], app);
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            ratatui::style::Style::default()
                .fg(Theme::BACKGROUND)
                .bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            ratatui::style::Style::default()
                .fg(Theme::BACKGROUND)
                .bg(Theme::ACCENT),
        ),
    };

    let help = Span::styled(
        " q:quit  /:search  TAB:focus  ↑↓:change  c:clear  [ ]:scroll ",
        Theme::dimmed(),
    );

    let status_line = Line::from(vec![mode_indicator, Span::raw(" │ "), help]);

    let status = Paragraph::new(status_line).style(Theme::status_bar());
    frame.render_widget(status, area);
}
