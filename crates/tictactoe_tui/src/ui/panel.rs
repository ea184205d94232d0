//! Side panel: status line, controls and the move list.

use super::layout::ScreenLayout;
use crate::app::{App, Focus};
use crate::move_list::MoveEntry;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::GameStatus;

/// Renders the status line.
pub fn render_status(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let status = app.game().status();
    let color = match status {
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::InProgress(_) => Color::Yellow,
    };

    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, *layout.status());
}

/// Renders the sort toggle and reset controls.
pub fn render_controls(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let button = |label: String| {
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    };

    frame.render_widget(
        button(format!("Sort: {}", app.sort_order().label())),
        *layout.sort_button(),
    );
    frame.render_widget(button("Reset".to_string()), *layout.reset_button());
}

/// Renders the move list, scrolled to keep the selection visible.
pub fn render_moves(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let border_style = match app.focus() {
        Focus::Moves => Style::default().fg(Color::Cyan),
        Focus::Board => Style::default().fg(Color::DarkGray),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Moves");

    let lines: Vec<Line> = app
        .entries()
        .iter()
        .skip(*layout.moves_offset())
        .map(|entry| entry_line(app, entry))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), *layout.moves());
}

/// One move-list line: the current step is bold, the keyboard selection
/// is reversed while the list has focus.
fn entry_line(app: &App, entry: &MoveEntry) -> Line<'static> {
    let mut style = Style::default();
    if *entry.current() {
        style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if *app.focus() == Focus::Moves && entry.step() == app.selected_step() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let marker = if *entry.current() { "▶ " } else { "  " };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(entry.label().clone(), style),
    ])
}
