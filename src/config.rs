use std::time::Duration;

use ratatui::style::Color;

/// Size of one logical grid cell in viewport units.
pub const CELL_SIZE: u16 = 20;

/// Safe margin reserved around the playable area, in whole cells.
pub const SAFE_MARGIN_CELLS: i32 = 2;

/// Default viewport width in logical units.
pub const DEFAULT_VIEWPORT_WIDTH: u16 = 400;

/// Default viewport height in logical units.
pub const DEFAULT_VIEWPORT_HEIGHT: u16 = 400;

/// Fixed simulation cadence: one tick every 100 ms (10 Hz).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Delay before a finished game automatically returns to the start screen.
pub const RESET_DELAY: Duration = Duration::from_millis(2000);

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    /// Color for the snake head cell.
    pub snake_head: Color,
    /// Color for body segments.
    pub snake_body: Color,
    /// Color for the tail segment.
    pub snake_tail: Color,
    /// Color for food.
    pub food: Color,
    pub border: Color,
    pub score_text: Color,
    pub overlay_title: Color,
    pub overlay_footer: Color,
}

/// Classic palette: green snake, red food, white border on black.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::LightGreen,
    snake_tail: Color::Green,
    food: Color::Red,
    border: Color::White,
    score_text: Color::White,
    overlay_title: Color::LightGreen,
    overlay_footer: Color::DarkGray,
};

/// Solid block glyph for snake segments.
pub const GLYPH_SNAKE: &str = "█";

/// Glyph for food.
pub const GLYPH_FOOD: &str = "●";
