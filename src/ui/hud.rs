use std::time::Duration;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::game::GameState;
use crate::theme::Theme;

const CONTROLS_HINT: &str = "[▲][▼][◀][▶]/WASD steer   [R] restart   [Q] quit";
const CONTROLS_HINT_SHORT: &str = "arrows move  R restart  Q quit";

/// Supplemental values displayed by the HUD rows.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    pub tick_interval: Duration,
}

/// Renders the status and control-panel bands at the bottom of the screen
/// and returns the remaining play area above them.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, status_row, controls_row] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_status_row(frame, status_row, state, info);
    render_controls_row(frame, controls_row, info);

    play_area
}

fn render_status_row(frame: &mut Frame<'_>, row: Rect, state: &GameState, info: &HudInfo<'_>) {
    let left = format!(
        "Length {}   Ticks {}   {} ms",
        state.snake.len(),
        state.tick_count,
        info.tick_interval.as_millis(),
    );
    let right = info.theme.name.as_str();

    let pad = usize::from(row.width)
        .saturating_sub(left.width())
        .saturating_sub(right.width());

    let line = Line::from(vec![
        Span::styled(
            left,
            Style::new()
                .fg(info.theme.hud_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(right.to_owned(), Style::new().fg(info.theme.menu_footer)),
    ]);

    frame.render_widget(Paragraph::new(line), row);
}

/// Control panel band: the four directional controls plus restart/quit.
fn render_controls_row(frame: &mut Frame<'_>, row: Rect, info: &HudInfo<'_>) {
    let hint = if CONTROLS_HINT.width() <= usize::from(row.width) {
        CONTROLS_HINT
    } else {
        CONTROLS_HINT_SHORT
    };

    frame.render_widget(
        Paragraph::new(Line::from(hint))
            .alignment(Alignment::Center)
            .style(Style::new().fg(info.theme.menu_footer)),
        row,
    );
}
