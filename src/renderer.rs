use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE, THEME_CLASSIC, Theme};
use crate::game::{Game, Mode};
use crate::grid::{Cell, Grid};

/// Renders one frame from the core's read-only snapshot.
pub fn render(frame: &mut Frame<'_>, game: &Game) {
    let theme = &THEME_CLASSIC;
    let area = frame.area();

    let Some(board) = board_area(area, game.grid()) else {
        render_too_small_notice(frame, area);
        return;
    };

    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    if game.mode() != Mode::Start {
        render_food(frame, inner, game, theme);
        render_snake(frame, inner, game, theme);
        render_score_line(frame, area, board, game, theme);
    }

    match game.mode() {
        Mode::Start => {
            crate::ui::menu::render_start_screen(frame, area, game.high_score(), game.score, theme);
        }
        Mode::Paused => crate::ui::menu::render_pause_overlay(frame, area),
        Mode::GameOver => crate::ui::menu::render_game_over_screen(
            frame,
            area,
            game.score,
            game.high_score(),
            game.game_over_reason(),
            theme,
        ),
        Mode::Playing => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let Some(food) = game.food else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(inner, game.grid(), food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let head = game.snake.head();
    let tail = game.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in game.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, game.grid(), *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else if Some(*segment) == tail {
            Style::new().fg(theme.snake_tail)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

fn render_score_line(frame: &mut Frame<'_>, area: Rect, board: Rect, game: &Game, theme: &Theme) {
    let y = board.bottom();
    if y >= area.bottom() {
        return;
    }
    let line = Rect::new(board.x, y, board.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(format!(
            "Score: {}   High score: {}",
            game.score,
            game.high_score()
        )))
        .style(Style::new().fg(theme.score_text)),
        line,
    );
}

fn render_too_small_notice(frame: &mut Frame<'_>, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from("Terminal too small for the board"))
            .alignment(Alignment::Center),
        area,
    );
}

/// Centers the bordered board in the terminal area.
///
/// Returns `None` when the terminal cannot hold the movement bounds
/// plus the border ring.
fn board_area(area: Rect, grid: Grid) -> Option<Rect> {
    let width = u16::try_from(grid.bounds_width()).ok()?.checked_add(2)?;
    let height = u16::try_from(grid.bounds_height()).ok()?.checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Some(Rect::new(x, y, width, height))
}

fn cell_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.contains(cell) {
        return None;
    }
    let origin = grid.bounds_origin();
    let x_offset = u16::try_from(cell.x - origin.x).ok()?;
    let y_offset = u16::try_from(cell.y - origin.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
