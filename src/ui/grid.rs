//! Discovery / search grid
//!
//! Movie cards in provider response order: title, rating to one decimal and
//! the overview snippet. An empty result list renders the "No Movies Found"
//! placeholder instead of cards.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::GridState;
use crate::ui::Theme;

/// Placeholder for an empty or absent result list.
pub const NO_MOVIES_TEXT: &str = "No Movies Found";

/// Lines one card occupies in the list.
const CARD_LINES: usize = 3;

/// Render the grid region.
pub fn render_grid(frame: &mut Frame, area: Rect, grid: &GridState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(
            format!(" MOVIES ({}) ", grid.movies.len()),
            Theme::title(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if grid.is_empty() {
        let empty = Paragraph::new(NO_MOVIES_TEXT)
            .style(Theme::accent())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    // Keep the selected card visible
    let visible = (inner.height as usize / CARD_LINES).max(1);
    let offset = grid.selected.saturating_sub(visible - 1);

    let items: Vec<ListItem> = grid
        .movies
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(i, movie)| {
            let is_selected = i == grid.selected;
            let marker = if is_selected { "▸ " } else { "  " };

            let title_line = Line::from(vec![
                Span::styled(
                    marker,
                    if is_selected {
                        Theme::accent()
                    } else {
                        Theme::dimmed()
                    },
                ),
                Span::styled(
                    movie.title.clone(),
                    if is_selected {
                        Theme::highlighted()
                    } else {
                        Theme::text()
                    },
                ),
                Span::raw(" "),
                Span::styled(
                    format!("★ {}", movie.rating_label()),
                    Theme::rating(movie.vote_average),
                ),
            ]);

            let overview_line = Line::from(vec![
                Span::raw("  "),
                Span::styled(movie.overview_snippet(), Theme::dimmed()),
            ]);

            ListItem::new(Text::from(vec![title_line, overview_line, Line::from("")]))
        })
        .collect();

    let list = List::new(items).style(Theme::text());
    frame.render_widget(list, inner);
}
