use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_WIDTH, Difficulty, GridSize};
use crate::game::{GameStatus, RenderModel};
use crate::snake::Position;
use crate::theme::Theme;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_victory_menu};

const GLYPH_CELL: &str = "██";
const GLYPH_EMPTY: &str = " ·";

/// Per-frame values the renderer needs beyond the game snapshot.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo<'a> {
    pub bounds: GridSize,
    pub difficulty: Difficulty,
    pub theme: &'a Theme,
}

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, model: &RenderModel, info: FrameInfo<'_>) {
    let area = frame.area();
    let board_area = render_hud(frame, area, model, info);

    let play_area = centered_board(board_area, info.bounds);
    let block = Block::bordered().border_style(Style::new().fg(info.theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_background(frame, inner, info);
    if let Some(food) = model.food {
        let food_style = Style::new().fg(info.theme.food);
        render_cell(frame, inner, info.bounds, food, food_style);
    }
    render_snake(frame, inner, model, info);

    match model.status {
        GameStatus::GameOver => {
            render_game_over_menu(
                frame,
                play_area,
                model.score,
                model.death_reason,
                info.theme,
            );
        }
        GameStatus::Victory => render_victory_menu(frame, play_area, model.score, info.theme),
        GameStatus::Playing => {}
    }
}

/// Returns the bordered board rect, centered and clipped to `area`.
fn centered_board(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = bounds.height.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    board
}

fn render_background(frame: &mut Frame<'_>, inner: Rect, info: FrameInfo<'_>) {
    let style = Style::new().fg(info.theme.grid_line).bg(info.theme.play_bg);
    let buffer = frame.buffer_mut();

    for y in inner.y..inner.bottom() {
        for x in (inner.x..inner.right()).step_by(usize::from(CELL_WIDTH)) {
            buffer.set_stringn(x, y, GLYPH_EMPTY, usize::from(inner.right() - x), style);
        }
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, model: &RenderModel, info: FrameInfo<'_>) {
    let body_style = Style::new().fg(info.theme.snake_body);
    for segment in model.snake.iter().skip(1) {
        render_cell(frame, inner, info.bounds, *segment, body_style);
    }

    if let Some(head) = model.snake.first() {
        let head_style = Style::new()
            .fg(info.theme.snake_head)
            .add_modifier(Modifier::BOLD);
        render_cell(frame, inner, info.bounds, *head, head_style);
    }
}

fn render_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    position: Position,
    style: Style,
) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
        return;
    };

    let available = usize::from(inner.right() - x);
    frame
        .buffer_mut()
        .set_stringn(x, y, GLYPH_CELL, available, style);
}

/// Maps a bottom-left-origin grid cell to its top-left terminal column/row.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let column = u16::try_from(position.x).ok()?;
    let row = bounds.height - 1 - u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(column.saturating_mul(CELL_WIDTH));
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
