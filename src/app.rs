//! App state and event wiring
//!
//! Holds the two render regions (trending carousel, discovery grid), the
//! control strip (search box, genre/year/sort selectors, clear affordance)
//! and the keyboard routing. Fetch requests raised by user input are
//! returned to the event loop as [`Request`] values; the loop dispatches
//! them to the [`Explorer`](crate::explorer::Explorer) controller, which
//! writes results back through the [`View`](crate::explorer::View) trait
//! this type implements.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::explorer::View;
use crate::models::{FilterState, Genre, Movie, SortBy};

/// Search waits for this much keyboard inactivity before firing.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Width of one card column in the trending carousel.
pub const CARD_WIDTH: u16 = 32;

/// Prev/next scroll the carousel viewport by this fixed column offset.
pub const CAROUSEL_STEP: u16 = 32;

// =============================================================================
// Requests
// =============================================================================

/// Fetch request raised by a key event, dispatched by the event loop.
///
/// Debounced search is not listed here; the loop polls
/// [`App::take_due_search`] on its tick instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// A selector changed; re-run the filter-driven discovery query.
    FilterChanged,
    /// The clear affordance was used; reset and load a fresh random page.
    ClearFilters,
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

/// Which control the selector keys act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grid,
    Genre,
    Year,
    Sort,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Grid => Focus::Genre,
            Focus::Genre => Focus::Year,
            Focus::Year => Focus::Sort,
            Focus::Sort => Focus::Grid,
        }
    }
}

// =============================================================================
// Selector
// =============================================================================

/// Selection state for a dropdown-style option list.
///
/// Index 0 is always the "no constraint" sentinel entry. Movement clamps at
/// both ends, like a native select control.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector {
    pub selected: usize,
    pub len: usize,
}

impl Selector {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// Move to the previous option. Returns true if the value changed.
    pub fn prev(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    /// Move to the next option. Returns true if the value changed.
    pub fn next(&mut self) -> bool {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Back to the sentinel entry.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

// =============================================================================
// Search Box
// =============================================================================

/// Search input state (query text plus cursor)
///
/// The cursor is a byte offset into the query, always kept on a char
/// boundary so multibyte input ("amélie", CJK titles) edits cleanly.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    pub query: String,
    pub cursor: usize,
}

impl SearchBox {
    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.query[..self.cursor].char_indices().next_back() {
            self.query.remove(idx);
            self.cursor = idx;
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.query.len() {
            self.query.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some((idx, _)) = self.query[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.query[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.query.len();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }
}

// =============================================================================
// Render Regions
// =============================================================================

/// Trending carousel region: ranked movies or a static error.
#[derive(Debug, Clone, Default)]
pub struct TrendingState {
    pub movies: Vec<Movie>,
    /// Set when the trending fetch failed; the renderer shows error text.
    pub error: bool,
    /// Horizontal viewport offset in columns.
    pub scroll: u16,
}

impl TrendingState {
    fn max_scroll(&self) -> u16 {
        (self.movies.len() as u16)
            .saturating_mul(CARD_WIDTH)
            .saturating_sub(CARD_WIDTH)
    }

    /// Scroll one step towards the start (viewport only, no refetch).
    pub fn scroll_prev(&mut self) {
        self.scroll = self.scroll.saturating_sub(CAROUSEL_STEP);
    }

    /// Scroll one step towards the end, clamped to the content width.
    pub fn scroll_next(&mut self) {
        self.scroll = self.scroll.saturating_add(CAROUSEL_STEP).min(self.max_scroll());
    }
}

/// Discovery/search grid region.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    pub movies: Vec<Movie>,
    /// Cursor for browsing cards; cosmetic, never triggers a fetch.
    pub selected: usize,
}

impl GridState {
    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.selected = 0;
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if !self.movies.is_empty() {
            self.selected = (self.selected + 1).min(self.movies.len() - 1);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

// =============================================================================
// Pending Search (debounce)
// =============================================================================

/// A scheduled search waiting out the debounce window.
#[derive(Debug, Clone)]
struct PendingSearch {
    query: String,
    due: Instant,
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state. Implements [`View`] so the controller renders
/// straight into it.
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Which control has selector focus
    pub focus: Focus,

    // Render regions
    pub trending: TrendingState,
    pub grid: GridState,

    // Control strip
    pub search: SearchBox,
    pub genre_options: Vec<Genre>,
    pub genre_sel: Selector,
    pub year_options: Vec<u16>,
    pub year_sel: Selector,
    pub sort_sel: Selector,
    pub clear_visible: bool,

    /// Pending debounced search, if any. Cancel-and-reschedule: a new
    /// keystroke before the deadline replaces it entirely.
    pending_search: Option<PendingSearch>,
}

impl App {
    /// Create app state; the year selector is populated synchronously,
    /// no network call involved.
    pub fn new(current_year: u16) -> Self {
        let year_options = crate::models::year_options(current_year);
        let year_len = year_options.len() + 1; // sentinel + years
        Self {
            running: true,
            input_mode: InputMode::Normal,
            focus: Focus::Grid,
            trending: TrendingState::default(),
            grid: GridState::default(),
            search: SearchBox::default(),
            genre_options: Vec::new(),
            genre_sel: Selector::new(1),
            year_options,
            year_sel: Selector::new(year_len),
            sort_sel: Selector::new(SortBy::ALL.len()),
            clear_visible: false,
            pending_search: None,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // Filter composition
    // -------------------------------------------------------------------------

    /// Genre id selected in the genre filter, None at the sentinel.
    pub fn selected_genre(&self) -> Option<u32> {
        match self.genre_sel.selected {
            0 => None,
            i => self.genre_options.get(i - 1).map(|g| g.id),
        }
    }

    /// Year selected in the year filter, None at the sentinel.
    pub fn selected_year(&self) -> Option<u16> {
        match self.year_sel.selected {
            0 => None,
            i => self.year_options.get(i - 1).copied(),
        }
    }

    /// Sort order selected in the sort filter.
    pub fn selected_sort(&self) -> SortBy {
        SortBy::ALL[self.sort_sel.selected.min(SortBy::ALL.len() - 1)]
    }

    /// Read the current selections into a discovery filter state.
    pub fn current_filters(&self) -> FilterState {
        FilterState {
            genre: self.selected_genre(),
            year: self.selected_year(),
            sort: self.selected_sort(),
        }
    }

    /// Reset search input and all selectors to their sentinels and cancel
    /// any pending debounced search.
    pub fn reset_controls(&mut self) {
        self.search.clear();
        self.genre_sel.reset();
        self.year_sel.reset();
        self.sort_sel.reset();
        self.pending_search = None;
    }

    // -------------------------------------------------------------------------
    // Debounce
    // -------------------------------------------------------------------------

    /// Restart the inactivity timer with the current query text.
    pub fn schedule_search(&mut self, now: Instant) {
        self.pending_search = Some(PendingSearch {
            query: self.search.query.clone(),
            due: now + SEARCH_DEBOUNCE,
        });
    }

    /// Take the pending search if its deadline has passed. At most one
    /// query fires per scheduling burst: the last one.
    pub fn take_due_search(&mut self, now: Instant) -> Option<String> {
        if self.pending_search.as_ref().is_some_and(|p| p.due <= now) {
            self.pending_search.take().map(|p| p.query)
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key event. Returns a fetch request for the event loop to
    /// dispatch, if the key raised one.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Request> {
        // Global quit shortcut
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key, now),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    /// Keys in editing (search input) mode. Every text mutation restarts
    /// the debounce timer; cursor movement does not.
    fn handle_editing_key(&mut self, key: KeyEvent, now: Instant) -> Option<Request> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Char(c) => {
                self.search.insert(c);
                self.schedule_search(now);
            }
            KeyCode::Backspace => {
                self.search.backspace();
                self.schedule_search(now);
            }
            KeyCode::Delete => {
                self.search.delete();
                self.schedule_search(now);
            }
            KeyCode::Left => self.search.cursor_left(),
            KeyCode::Right => self.search.cursor_right(),
            KeyCode::Home => self.search.cursor_home(),
            KeyCode::End => self.search.cursor_end(),
            _ => {}
        }
        None
    }

    /// Keys in normal navigation mode.
    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                None
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.input_mode = InputMode::Editing;
                None
            }
            KeyCode::Char('c') => {
                self.reset_controls();
                Some(Request::ClearFilters)
            }
            KeyCode::Char('[') => {
                self.trending.scroll_prev();
                None
            }
            KeyCode::Char(']') => {
                self.trending.scroll_next();
                None
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::Esc => {
                self.focus = Focus::Grid;
                None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
                self.step_focused(false)
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
                self.step_focused(true)
            }
            _ => None,
        }
    }

    /// Move the focused control. A selector raises a filter change only
    /// when its value actually changed.
    fn step_focused(&mut self, forward: bool) -> Option<Request> {
        let changed = match self.focus {
            Focus::Grid => {
                if forward {
                    self.grid.down();
                } else {
                    self.grid.up();
                }
                return None;
            }
            Focus::Genre => step(&mut self.genre_sel, forward),
            Focus::Year => step(&mut self.year_sel, forward),
            Focus::Sort => step(&mut self.sort_sel, forward),
        };
        changed.then_some(Request::FilterChanged)
    }
}

fn step(sel: &mut Selector, forward: bool) -> bool {
    if forward {
        sel.next()
    } else {
        sel.prev()
    }
}

// =============================================================================
// View implementation (controller render seam)
// =============================================================================

impl View for App {
    fn set_genre_options(&mut self, genres: &[Genre]) {
        self.genre_options = genres.to_vec();
        self.genre_sel = Selector::new(self.genre_options.len() + 1);
    }

    fn render_trending(&mut self, movies: Vec<Movie>) {
        self.trending.movies = movies;
        self.trending.error = false;
        self.trending.scroll = 0;
    }

    fn render_trending_error(&mut self) {
        self.trending.movies.clear();
        self.trending.error = true;
        self.trending.scroll = 0;
    }

    fn render_grid(&mut self, movies: Vec<Movie>) {
        self.grid.set_movies(movies);
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.clear_visible = visible;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
