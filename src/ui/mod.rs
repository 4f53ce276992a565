//! TUI components
//!
//! - `theme`: midnight marquee palette and style helpers
//! - `carousel`: ranked trending strip with horizontal scrolling
//! - `grid`: discovery/search result cards
//! - `filters`: search box, selector strip and clear affordance

pub mod carousel;
pub mod filters;
pub mod grid;
pub mod theme;

pub use theme::Theme;
