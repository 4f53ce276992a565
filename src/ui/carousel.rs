//! Trending carousel
//!
//! Horizontally scrollable strip of ranked movie cards. Prev/next only move
//! the viewport by a fixed column step; the data never changes. A failed
//! trending fetch replaces the whole region with static error text.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{TrendingState, CARD_WIDTH};
use crate::ui::Theme;

/// Shown in place of the carousel when the trending fetch failed.
pub const TRENDING_ERROR_TEXT: &str = "Error loading trending movies";

/// Render the trending region.
pub fn render_carousel(frame: &mut Frame, area: Rect, trending: &TrendingState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" ⚡ TRENDING TODAY ", Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if trending.error {
        let error = Paragraph::new(TRENDING_ERROR_TEXT)
            .style(Theme::error())
            .alignment(Alignment::Center);
        frame.render_widget(error, inner);
        return;
    }

    if trending.movies.is_empty() {
        let empty = Paragraph::new("No trending movies")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    // Viewport windowing: the scroll offset selects the first visible card,
    // then as many full cards as fit are laid out left to right.
    let first = (trending.scroll / CARD_WIDTH) as usize;
    let visible = (inner.width / CARD_WIDTH).max(1) as usize;

    for (slot, (idx, movie)) in trending
        .movies
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let card_area = Rect {
            x: inner.x + (slot as u16) * CARD_WIDTH,
            y: inner.y,
            width: CARD_WIDTH.min(inner.width.saturating_sub((slot as u16) * CARD_WIDTH)),
            height: inner.height,
        };
        render_card(frame, card_area, movie, idx + 1);
    }
}

/// One ranked card: rank badge (1-based), title, rating, poster marker.
fn render_card(frame: &mut Frame, area: Rect, movie: &crate::models::Movie, rank: usize) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(format!(" #{} ", rank), Theme::rank_badge()));

    let inner = card.inner(area);
    frame.render_widget(card, area);

    let poster_line = if movie.poster_path.is_some() {
        Line::from(Span::styled("▦ poster", Theme::dimmed()))
    } else {
        Line::from(Span::styled("░ no image", Theme::dimmed()))
    };

    let content = Paragraph::new(vec![
        Line::from(Span::styled(movie.title.clone(), Theme::text())),
        Line::from(Span::styled(
            format!("★ {}", movie.rating_label()),
            Theme::rating(movie.vote_average),
        )),
        poster_line,
    ]);
    frame.render_widget(content, inner);
}
