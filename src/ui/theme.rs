//! Midnight marquee theme for MovieTUI
//!
//! Dark cinema palette: deep indigo background, marquee gold for primary
//! accents, warm white text. Style helpers keep the render code free of
//! inline color fiddling.

use ratatui::style::{Color, Modifier, Style};

/// Midnight marquee color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #120f1a (deep indigo-black)
    pub const BACKGROUND: Color = Color::Rgb(0x12, 0x0f, 0x1a);

    /// Primary: #ffc857 (marquee gold)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xc8, 0x57);

    /// Secondary: #4fd1c5 (teal)
    pub const SECONDARY: Color = Color::Rgb(0x4f, 0xd1, 0xc5);

    /// Accent: #ff9f1c (amber)
    pub const ACCENT: Color = Color::Rgb(0xff, 0x9f, 0x1c);

    /// Highlight: #f95f8a (rose)
    pub const HIGHLIGHT: Color = Color::Rgb(0xf9, 0x5f, 0x8a);

    /// Text: #e8e2d0 (warm white)
    pub const TEXT: Color = Color::Rgb(0xe8, 0xe2, 0xd0);

    /// Dim: #565066 (muted violet-grey)
    pub const DIM: Color = Color::Rgb(0x56, 0x50, 0x66);

    /// Success: #7ddf64 (green)
    pub const SUCCESS: Color = Color::Rgb(0x7d, 0xdf, 0x64);

    /// Warning: #ffb347 (orange)
    pub const WARNING: Color = Color::Rgb(0xff, 0xb3, 0x47);

    /// Error: #ff4d5e (red)
    pub const ERROR: Color = Color::Rgb(0xff, 0x4d, 0x5e);

    /// Border color (dim gold)
    pub const BORDER: Color = Color::Rgb(0x8a, 0x6d, 0x2f);

    /// Border color when focused (full gold)
    pub const BORDER_FOCUSED: Color = Color::Rgb(0xff, 0xc8, 0x57);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::BORDER_FOCUSED)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn accent() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Rank badge on a trending card.
    pub fn rank_badge() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Rating style: high ratings glow, low ones fade.
    pub fn rating(vote_average: f32) -> Style {
        if vote_average >= 7.0 {
            Style::default().fg(Self::SUCCESS)
        } else if vote_average >= 5.0 {
            Style::default().fg(Self::WARNING)
        } else {
            Self::dimmed()
        }
    }
}

// =============================================================================
// Contrast helpers (used by UI tests)
// =============================================================================

/// Extract RGB components from a ratatui color, if it is an RGB color.
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

fn relative_luminance((r, g, b): (u8, u8, u8)) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// WCAG contrast ratio between two colors (1.0..=21.0).
pub fn contrast_ratio(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG AA for normal text (4.5:1).
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// WCAG AA for large text (3:1).
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}
