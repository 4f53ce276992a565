//! Control strip: search box, genre/year/sort selectors, clear affordance

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, InputMode};
use crate::ui::Theme;

/// Render the search input with a visible cursor while editing.
pub fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;

    let search_text = if editing {
        let query = &app.search.query;
        let cursor = app.search.cursor.min(query.len());
        let (before, after) = query.split_at(cursor);
        format!("⌕ {}│{}", before, after)
    } else if app.search.query.is_empty() {
        "⌕ Type / to search...".to_string()
    } else {
        format!("⌕ {}", app.search.query)
    };

    let border = if editing {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let search_box = Paragraph::new(search_text)
        .style(if editing {
            Theme::input().fg(Theme::PRIMARY)
        } else {
            Theme::input()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border)
                .title(Span::styled(" SEARCH ", Theme::title())),
        );
    frame.render_widget(search_box, area);
}

/// Render the genre/year/sort selectors and the clear affordance.
pub fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(18),    // Genre
            Constraint::Length(14), // Year
            Constraint::Length(14), // Sort
            Constraint::Length(16), // Clear
        ])
        .split(area);

    let genre_label = match app.selected_genre() {
        None => "All genres".to_string(),
        Some(id) => app
            .genre_options
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| "All genres".to_string()),
    };
    render_selector(frame, chunks[0], "GENRE", &genre_label, app.focus == Focus::Genre);

    let year_label = match app.selected_year() {
        None => "All".to_string(),
        Some(year) => year.to_string(),
    };
    render_selector(frame, chunks[1], "YEAR", &year_label, app.focus == Focus::Year);

    render_selector(
        frame,
        chunks[2],
        "SORT",
        app.selected_sort().label(),
        app.focus == Focus::Sort,
    );

    let clear = if app.clear_visible {
        Paragraph::new(Span::styled("✕ clear (c)", Theme::accent()))
    } else {
        Paragraph::new("")
    };
    let clear_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    frame.render_widget(clear.block(clear_block), chunks[3]);
}

fn render_selector(frame: &mut Frame, area: Rect, name: &str, value: &str, focused: bool) {
    let border = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let value_style = if focused { Theme::accent() } else { Theme::text() };

    let selector = Paragraph::new(Span::styled(format!("‹ {} ›", value), value_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(format!(" {} ", name), Theme::title())),
    );
    frame.render_widget(selector, area);
}
