//! Application state and input handling.
//!
//! [`App`] owns the one [`GameState`] of the session together with the
//! purely visual state around it: sort order, board cursor, which panel
//! has focus, and the highlighted move-list entry. Key and mouse events
//! are translated into game transitions here; drawing never mutates.

use crate::input::move_cursor;
use crate::move_list::{MoveEntry, SortOrder, move_entries};
use crate::settings::Settings;
use crate::ui::{Hit, ScreenLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use tictactoe_core::{GameState, Position};
use tracing::{debug, info, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    sort_order: SortOrder,
    show_coordinates: bool,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: GameState::new(),
            sort_order: *settings.sort_order(),
            show_coordinates: *settings.show_coordinates(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Move-list entries in display order.
    pub fn entries(&self) -> Vec<MoveEntry> {
        move_entries(&self.game, self.sort_order, self.show_coordinates)
    }

    /// Plays at `pos` if the cell accepts input.
    ///
    /// Occupied cells, and every cell once the shown board has a winner,
    /// are disabled; activating them does nothing.
    #[instrument(skip(self))]
    pub fn activate_cell(&mut self, pos: Position) {
        self.cursor = pos;
        if !self.game.is_playable(pos) {
            debug!("Cell is disabled");
            return;
        }

        let outcome = self.game.play(pos);
        debug!(?outcome, status = %self.game.status(), "Played");
        self.selected_step = self.game.current_step();
    }

    /// Shows the board as it was at `step`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.selected_step = step,
            Err(e) => warn!(error = %e, "Ignoring jump"),
        }
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.game.history().len() - 1, "Resetting game");
        self.game.reset();
        self.selected_step = 0;
    }

    /// Flips the move-list order.
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Toggled sort order");
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::Moves {
                    self.selected_step = self.game.current_step();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_digit(c) {
                    self.focus = Focus::Board;
                    self.activate_cell(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cell(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let len = self.game.history().len();
        let row = self.sort_order.row_of(self.selected_step, len);

        let row = match code {
            KeyCode::Up | KeyCode::Char('k') => row.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (row + 1).min(len - 1),
            KeyCode::Home => 0,
            KeyCode::End => len - 1,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.jump_to(self.selected_step);
                return;
            }
            _ => return,
        };

        if let Some(step) = self.sort_order.step_at(row, len) {
            self.selected_step = step;
        }
    }

    /// Handles a mouse event against the layout of the last frame.
    #[instrument(skip(self, mouse, layout), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match layout.hit_test(mouse.column, mouse.row) {
            Some(Hit::Cell(pos)) => {
                self.focus = Focus::Board;
                self.activate_cell(pos);
            }
            Some(Hit::Move(step)) => {
                self.focus = Focus::Moves;
                self.jump_to(step);
            }
            Some(Hit::SortToggle) => self.toggle_sort(),
            Some(Hit::Reset) => self.reset(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictactoe_core::{Player, Square};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn new_app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));

        let board = app.game().board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(*app.selected_step(), 2);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = new_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.game().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_disabled_cells_ignore_input() {
        let mut app = new_app();
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game().status_text(), "Winner: X");
        let len = app.game().history().len();

        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game().history().len(), len);
    }

    #[test]
    fn test_move_list_navigation_and_jump() {
        let mut app = new_app();
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }

        press(&mut app, KeyCode::Tab);
        assert_eq!(*app.focus(), Focus::Moves);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game().current_step(), 1);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_move_list_navigation_follows_display_order() {
        let mut app = new_app();
        for c in ['1', '5'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Tab);

        // Descending: step 2 is the top row, Down goes towards game start.
        press(&mut app, KeyCode::Down);
        assert_eq!(*app.selected_step(), 1);
        press(&mut app, KeyCode::End);
        assert_eq!(*app.selected_step(), 0);
        press(&mut app, KeyCode::Home);
        assert_eq!(*app.selected_step(), 2);
    }

    #[test]
    fn test_sort_toggle_keeps_game() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('5'));
        let before = app.game().clone();

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(*app.sort_order(), SortOrder::Descending);
        assert_eq!(app.game(), &before);
        assert_eq!(*app.entries()[0].step(), 1);
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(*app.selected_step(), 0);

        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut app = new_app();
        app.jump_to(3);
        assert_eq!(app.game().current_step(), 0);
        assert_eq!(*app.selected_step(), 0);
    }
}
