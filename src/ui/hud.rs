use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::game::RenderModel;
use crate::renderer::FrameInfo;
use crate::theme::Theme;

const SEPARATOR: &str = " │ ";
const CONTROLS_HINT: &str = "arrows/WASD move · Esc quit";

/// Renders the one-line HUD under the board and returns the area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    model: &RenderModel,
    info: FrameInfo<'_>,
) -> Rect {
    let [board_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let stats = stat_spans(model, info);
    let stats_width: usize = stats.iter().map(|span| span.content.width()).sum();
    let available = usize::from(hud_area.width);

    let mut spans = Vec::new();
    if let Some(padding) = hint_padding(available, stats_width) {
        spans.push(Span::styled(
            CONTROLS_HINT,
            Style::new().fg(info.theme.menu_footer),
        ));
        spans.push(Span::raw(" ".repeat(padding)));
    }
    spans.extend(stats);

    frame.render_widget(Paragraph::new(Line::from(spans)).right_aligned(), hud_area);

    board_area
}

fn stat_spans(model: &RenderModel, info: FrameInfo<'_>) -> Vec<Span<'static>> {
    let theme: &Theme = info.theme;
    let label = Style::new().fg(theme.hud_label);
    let value = Style::new().fg(theme.hud_value);

    vec![
        Span::styled("Score: ", label),
        Span::styled(model.score.to_string(), value),
        Span::styled(SEPARATOR, label),
        Span::styled("Length: ", label),
        Span::styled(model.snake.len().to_string(), value),
        Span::styled(SEPARATOR, label),
        Span::styled(info.difficulty.name(), value),
        Span::styled(
            format!(" ({:.1} sq/s)", info.difficulty.squares_per_second()),
            label,
        ),
    ]
}

/// Gap between the controls hint and the stats, or `None` when the hint
/// does not fit next to them.
fn hint_padding(available: usize, stats_width: usize) -> Option<usize> {
    let hint_width = CONTROLS_HINT.width();
    let gap = available.checked_sub(hint_width + stats_width)?;
    (gap >= 2).then_some(gap)
}

#[cfg(test)]
mod tests {
    use super::{hint_padding, stat_spans};
    use crate::config::{Difficulty, GridSize};
    use crate::game::{GameStatus, RenderModel};
    use crate::renderer::FrameInfo;
    use crate::snake::Position;
    use crate::theme::THEME_BASIC;

    #[test]
    fn hint_is_dropped_on_narrow_terminals() {
        assert_eq!(hint_padding(20, 30), None);
        assert_eq!(hint_padding(80, 30), Some(80 - 30 - 27));
    }

    #[test]
    fn stats_show_score_length_and_difficulty() {
        let model = RenderModel {
            snake: vec![Position::new(1, 1), Position::new(0, 1)],
            food: None,
            score: 12,
            status: GameStatus::Playing,
            death_reason: None,
        };
        let info = FrameInfo {
            bounds: GridSize {
                width: 10,
                height: 10,
            },
            difficulty: Difficulty::Hard,
            theme: &THEME_BASIC,
        };

        let text: String = stat_spans(&model, info)
            .iter()
            .map(|span| span.content.as_ref())
            .collect();

        assert_eq!(text, "Score: 12 │ Length: 2 │ HARD (10.0 sq/s)");
    }
}
