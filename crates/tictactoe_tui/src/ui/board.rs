//! Tic-tac-toe board rendering.

use super::layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Player, Position, Square};

/// Renders the bordered board panel with all nine cells.
pub fn render_board(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let border_style = match app.focus() {
        Focus::Board => Style::default().fg(Color::Cyan),
        Focus::Moves => Style::default().fg(Color::DarkGray),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    frame.render_widget(block, *layout.board());

    frame.render_widget(
        Paragraph::new(grid_lines()).style(Style::default().fg(Color::DarkGray)),
        *layout.grid(),
    );

    for (pos, area) in Position::ALL.into_iter().zip(layout.cells()) {
        let (symbol, style) = cell_appearance(app, pos);
        let text = vec![Line::from(""), Line::from(symbol), Line::from("")];
        frame.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            *area,
        );
    }
}

/// Symbol and style for one cell.
///
/// Empty cells show their keypad digit while playable and a dot once
/// disabled; the winning line is highlighted; the cursor is reversed
/// while the board has focus.
pub(crate) fn cell_appearance(app: &App, pos: Position) -> (String, Style) {
    let game = app.game();
    let highlighted = game.win_result().contains(pos);

    let (symbol, mut style) = match game.board().get(pos) {
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Empty if game.is_playable(pos) => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (
            "·".to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
    };

    if highlighted {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if *app.focus() == Focus::Board && *app.cursor() == pos {
        style = style.add_modifier(Modifier::REVERSED);
    }

    (symbol, style)
}

/// Background lines drawing the separators between cells.
fn grid_lines() -> Vec<Line<'static>> {
    let blank = " ".repeat(usize::from(CELL_WIDTH));
    let rule = "─".repeat(usize::from(CELL_WIDTH));
    let cell_row = format!("{blank}│{blank}│{blank}");
    let separator = format!("{rule}┼{rule}┼{rule}");

    let mut lines = Vec::new();
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::from(separator.clone()));
        }
        for _ in 0..CELL_HEIGHT {
            lines.push(Line::from(cell_row.clone()));
        }
    }
    lines
}
