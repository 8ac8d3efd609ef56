use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::DeathReason;
use crate::theme::Theme;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let lines = vec![
        Line::styled(
            "GAME OVER",
            Style::new().fg(theme.food).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(death_cause(death_reason)),
        Line::from(""),
        Line::styled(
            "[R] Restart   [Esc] Quit",
            Style::new().fg(theme.menu_footer),
        ),
    ];

    render_popup(frame, area, " game over ", lines);
}

/// Draws the board-full screen as a centered popup.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let lines = vec![
        Line::styled(
            "BOARD CLEARED",
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from("No room left for food"),
        Line::from(""),
        Line::styled(
            "[R] Restart   [Esc] Quit",
            Style::new().fg(theme.menu_footer),
        ),
    ];

    render_popup(frame, area, " victory ", lines);
}

fn death_cause(death_reason: Option<DeathReason>) -> &'static str {
    match death_reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    }
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let popup = centered_popup(area, 32, height);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{centered_popup, death_cause, render_game_over_menu};
    use crate::game::DeathReason;
    use crate::theme::THEME_BASIC;

    #[test]
    fn death_cause_names_collision() {
        assert_eq!(
            death_cause(Some(DeathReason::WallCollision)),
            "Cause: hit wall"
        );
        assert_eq!(
            death_cause(Some(DeathReason::SelfCollision)),
            "Cause: hit yourself"
        );
        assert_eq!(death_cause(None), "");
    }

    #[test]
    fn popup_is_clipped_to_small_areas() {
        let popup = centered_popup(Rect::new(0, 0, 20, 5), 32, 8);

        assert!(popup.width <= 20);
        assert!(popup.height <= 5);
    }

    #[test]
    fn game_over_popup_shows_final_score() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12))
            .expect("test backend should initialise");

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_game_over_menu(
                    frame,
                    area,
                    17,
                    Some(DeathReason::WallCollision),
                    &THEME_BASIC,
                );
            })
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final score: 17"));
    }
}
