//! Screen geometry shared by drawing and mouse hit-testing.

use crate::app::App;
use crate::move_list::SortOrder;
use derive_getters::Getters;
use ratatui::layout::{self, Constraint, Direction, Layout, Margin, Rect};
use tictactoe_core::Position;

/// Width of one board cell, in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell, in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the 3x3 grid including separators.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the 3x3 grid including separators.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const BOARD_PANEL_WIDTH: u16 = GRID_WIDTH + 6;
const SORT_BUTTON_WIDTH: u16 = 13;
const RESET_BUTTON_WIDTH: u16 = 9;

/// A clickable element under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// A move-list entry, by history step.
    Move(usize),
    /// The sort toggle.
    SortToggle,
    /// The reset control.
    Reset,
}

/// Where every widget goes for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ScreenLayout {
    title: Rect,
    board: Rect,
    grid: Rect,
    cells: [Rect; 9],
    status: Rect,
    sort_button: Rect,
    reset_button: Rect,
    moves: Rect,
    moves_inner: Rect,
    moves_offset: usize,
    move_count: usize,
    sort_order: SortOrder,
    help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen for `area` and the current app state.
    pub fn new(area: Rect, app: &App) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Board and side panel
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_PANEL_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        let board = body[0];
        let grid = center_rect(
            board.inner(Margin {
                horizontal: 1,
                vertical: 1,
            }),
            GRID_WIDTH,
            GRID_HEIGHT,
        );

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(3), // Controls
                Constraint::Min(0),    // Moves
            ])
            .split(body[1]);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(SORT_BUTTON_WIDTH),
                Constraint::Length(1),
                Constraint::Length(RESET_BUTTON_WIDTH),
                Constraint::Min(0),
            ])
            .split(side[1]);

        let moves = side[2];
        let moves_inner = moves.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });

        let move_count = app.game().history().len();
        let sort_order = *app.sort_order();
        let selected_row = sort_order.row_of(*app.selected_step(), move_count);
        let visible = usize::from(moves_inner.height);
        let moves_offset = match visible {
            0 => 0,
            _ => selected_row.saturating_sub(visible - 1),
        };

        Self {
            title: rows[0],
            board,
            grid,
            cells: grid_cells(grid),
            status: side[0],
            sort_button: controls[0],
            reset_button: controls[2],
            moves,
            moves_inner,
            moves_offset,
            move_count,
            sort_order,
            help: rows[2],
        }
    }

    /// Returns the clickable element at a terminal cell, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let point = layout::Position::new(column, row);

        if let Some(index) = self.cells.iter().position(|cell| cell.contains(point)) {
            return Position::from_index(index).ok().map(Hit::Cell);
        }
        if self.sort_button.contains(point) {
            return Some(Hit::SortToggle);
        }
        if self.reset_button.contains(point) {
            return Some(Hit::Reset);
        }
        if self.moves_inner.contains(point) {
            let display_row = usize::from(row - self.moves_inner.y) + self.moves_offset;
            return self
                .sort_order
                .step_at(display_row, self.move_count)
                .map(Hit::Move);
        }
        None
    }
}

/// Splits the grid into nine cells, row-major, skipping the separators.
fn grid_cells(grid: Rect) -> [Rect; 9] {
    let mut cells = [Rect::default(); 9];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

    for (r, row) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row);

        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell;
        }
    }

    cells
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn layout_for(app: &App) -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 30), app)
    }

    #[test]
    fn test_cells_are_disjoint_and_sized() {
        let app = App::new(&Settings::default());
        let layout = layout_for(&app);

        for (i, a) in layout.cells().iter().enumerate() {
            assert_eq!((a.width, a.height), (CELL_WIDTH, CELL_HEIGHT));
            for b in &layout.cells()[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_cells_and_controls() {
        let app = App::new(&Settings::default());
        let layout = layout_for(&app);

        let center = layout.cells()[4];
        assert_eq!(
            layout.hit_test(center.x + 1, center.y + 1),
            Some(Hit::Cell(Position::Center))
        );
        let sort = layout.sort_button();
        assert_eq!(layout.hit_test(sort.x, sort.y), Some(Hit::SortToggle));
        let reset = layout.reset_button();
        assert_eq!(layout.hit_test(reset.x + 1, reset.y + 1), Some(Hit::Reset));
        assert_eq!(layout.hit_test(0, 0), None);
    }

    #[test]
    fn test_hit_moves_respects_sort_order() {
        let mut app = App::new(&Settings::default());
        app.activate_cell(Position::TopLeft);
        app.activate_cell(Position::Center);

        let inner = *layout_for(&app).moves_inner();
        assert_eq!(layout_for(&app).hit_test(inner.x, inner.y), Some(Hit::Move(0)));
        assert_eq!(layout_for(&app).hit_test(inner.x, inner.y + 3), None);

        app.toggle_sort();
        let layout = layout_for(&app);
        assert_eq!(layout.hit_test(inner.x, inner.y), Some(Hit::Move(2)));
        assert_eq!(layout.hit_test(inner.x, inner.y + 2), Some(Hit::Move(0)));
    }

    #[test]
    fn test_moves_scroll_to_keep_selection_visible() {
        let mut app = App::new(&Settings::default());
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
        ] {
            app.activate_cell(pos);
        }
        // Room for three entries: title 3 + status 3 + controls 3 + moves 5 + help 3.
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 17), &app);
        assert_eq!(layout.moves_inner().height, 3);
        assert_eq!(*layout.moves_offset(), 3);

        let inner = *layout.moves_inner();
        assert_eq!(layout.hit_test(inner.x, inner.y), Some(Hit::Move(3)));
        assert_eq!(layout.hit_test(inner.x, inner.y + 2), Some(Hit::Move(5)));
    }
}
