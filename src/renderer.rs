use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    BoardConfig, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Cell;
use crate::theme::Theme;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, info);
    let board_area = board_rect(play_area, state.board());

    let theme = info.theme;
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    if state.status == GameStatus::GameOver {
        render_game_over_menu(frame, board_area, state.death_reason, theme);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, state.board(), state.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, state.board(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.direction),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Centers the bordered board inside the play area, clamped to fit.
fn board_rect(area: Rect, board: BoardConfig) -> Rect {
    let want_width = u16::try_from(board.cells_wide())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let want_height = u16::try_from(board.cells_high())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let width = want_width.min(area.width);
    let height = want_height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    Rect::new(x, y, width, height)
}

/// Projects a pixel cell onto a terminal coordinate inside `inner`.
///
/// One terminal cell per game cell; anything outside the board or the
/// visible rect is skipped.
fn cell_to_terminal(inner: Rect, board: BoardConfig, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(board) {
        return None;
    }

    let col = u16::try_from(cell.x / board.cell_size).ok()?;
    let row = u16::try_from(cell.y / board.cell_size).ok()?;

    let x = inner.x.saturating_add(col);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
