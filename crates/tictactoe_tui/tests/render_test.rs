//! Rendering and mouse tests against an in-memory terminal.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, style::Color};
use tictactoe_core::{Player, Position, Square};
use tictactoe_tui::{App, Hit, ScreenLayout, Settings, SortOrder, ui};

const WIDTH: u16 = 90;
const HEIGHT: u16 = 30;

struct Rendered {
    rows: Vec<String>,
    layout: ScreenLayout,
    terminal: Terminal<TestBackend>,
}

impl Rendered {
    fn text(&self) -> String {
        self.rows.join("\n")
    }

    fn row_containing(&self, needle: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.contains(needle))
    }
}

fn render(app: &App) -> Rendered {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut layout = ScreenLayout::default();
    terminal
        .draw(|frame| {
            layout = ScreenLayout::new(frame.area(), app);
            ui::draw(frame, app, &layout);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let rows = buffer
        .content()
        .chunks(usize::from(WIDTH))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect();

    Rendered {
        rows,
        layout,
        terminal,
    }
}

fn click(app: &mut App, layout: &ScreenLayout, column: u16, row: u16) {
    app.handle_mouse(
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
        layout,
    );
}

fn click_cell(app: &mut App, pos: Position) {
    let layout = render(app).layout;
    let cell = layout.cells()[pos.to_index()];
    click(app, &layout, cell.x + 1, cell.y + 1);
}

#[test]
fn test_initial_screen() {
    let app = App::new(&Settings::default());
    let text = render(&app).text();

    assert!(text.contains("Tic-Tac-Toe"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("Sort: ASC"));
    assert!(text.contains("Reset"));
    assert!(text.contains("Go to game start"));
    assert!(!text.contains("Go to move #1"));
}

#[test]
fn test_clicks_play_and_win_highlights_line() {
    let mut app = App::new(&Settings::default());
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleRight,
        Position::TopRight,
    ] {
        click_cell(&mut app, pos);
    }

    let rendered = render(&app);
    assert!(rendered.text().contains("Winner: X"));
    assert!(rendered.text().contains("Go to move #5 (r1, c3)"));

    let buffer = rendered.terminal.backend().buffer();
    let top_center = rendered.layout.cells()[1];
    let cell = buffer
        .cell((top_center.x + 1, top_center.y + 1))
        .expect("cell inside buffer");
    assert_eq!(cell.style().bg, Some(Color::Green));

    // The board is locked: clicking an empty cell does nothing.
    let len = app.game().history().len();
    click_cell(&mut app, Position::BottomLeft);
    assert_eq!(app.game().history().len(), len);
    assert_eq!(app.game().board().get(Position::BottomLeft), Square::Empty);
}

#[test]
fn test_clicking_move_entry_jumps() {
    let mut app = App::new(&Settings::default());
    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        click_cell(&mut app, pos);
    }

    let rendered = render(&app);
    let row = rendered
        .row_containing("Go to move #1 (r1, c1)")
        .expect("entry rendered");
    let inner = *rendered.layout.moves_inner();
    assert_eq!(
        rendered.layout.hit_test(inner.x + 2, row as u16),
        Some(Hit::Move(1))
    );
    click(&mut app, &rendered.layout, inner.x + 2, row as u16);

    assert_eq!(app.game().current_step(), 1);
    assert_eq!(app.game().history().len(), 4);
    assert!(render(&app).text().contains("Next player: O"));

    // Playing from the rewound position discards the later moves.
    click_cell(&mut app, Position::BottomLeft);
    assert_eq!(app.game().history().len(), 3);
    assert_eq!(
        app.game().board().get(Position::BottomLeft),
        Square::Occupied(Player::O)
    );
    assert!(!render(&app).text().contains("(r3, c3)"));
}

#[test]
fn test_sort_and_reset_controls() {
    let mut app = App::new(&Settings::default());
    click_cell(&mut app, Position::Center);
    click_cell(&mut app, Position::TopLeft);

    let rendered = render(&app);
    let sort = *rendered.layout.sort_button();
    click(&mut app, &rendered.layout, sort.x + 2, sort.y + 1);
    assert_eq!(*app.sort_order(), SortOrder::Descending);

    let rendered = render(&app);
    assert!(rendered.text().contains("Sort: DESC"));
    let latest = rendered.row_containing("Go to move #2").unwrap();
    let start = rendered.row_containing("Go to game start").unwrap();
    assert!(latest < start);

    let reset = *rendered.layout.reset_button();
    click(&mut app, &rendered.layout, reset.x + 2, reset.y + 1);
    let text = render(&app).text();
    assert!(text.contains("Next player: X"));
    assert!(!text.contains("Go to move #1"));
    // Sort order is display state and survives a reset.
    assert!(text.contains("Sort: DESC"));
}

#[test]
fn test_draw_status() {
    let mut app = App::new(&Settings::default());
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ] {
        click_cell(&mut app, pos);
    }

    assert!(app.game().is_draw());
    assert!(render(&app).text().contains("Draw!"));
}

#[test]
fn test_coordinates_can_be_hidden() {
    let settings = Settings::default().with_show_coordinates(false);
    let mut app = App::new(&settings);
    click_cell(&mut app, Position::Center);

    let text = render(&app).text();
    assert!(text.contains("Go to move #1"));
    assert!(!text.contains("(r2, c2)"));
}
