//! Stateless UI rendering using ratatui.

mod board;
mod layout;
mod panel;

use crate::app::App;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use layout::{Hit, ScreenLayout};

const HELP: &str =
    "1-9/Enter: play | Tab: focus | ↑↓ Enter: jump | S: sort | R: reset | Q: quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, *layout.title());

    board::render_board(frame, app, layout);
    panel::render_status(frame, app, layout);
    panel::render_controls(frame, app, layout);
    panel::render_moves(frame, app, layout);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, *layout.help());
}
