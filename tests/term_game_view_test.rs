//! Rendering tests: the game view is pure, so frames can be asserted on.

use tui_tictactoe::core::Board;
use tui_tictactoe::term::{FrameBuffer, GameView, Viewport};
use tui_tictactoe::types::{GameAction, Point, Symbol};

fn frame_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_fresh_board_shows_turn_status_and_no_restart() {
    let board = Board::default();
    let view = GameView::default();
    let text = frame_text(&view.render(&board.snapshot(), Viewport::new(100, 40)));

    assert!(text.contains("Player X's Turn"));
    assert!(!text.contains("Restart"));
}

#[test]
fn test_frame_is_pure_function_of_snapshot() {
    let mut board = Board::default();
    board.place(0, 0, Symbol::X);
    board.place(2, 2, Symbol::O);

    let view = GameView::default();
    let viewport = Viewport::new(100, 40);
    let snap = board.snapshot();
    let a = view.render(&snap, viewport);
    let b = view.render(&snap, viewport);
    assert_eq!(a, b);
}

#[test]
fn test_rendering_never_mutates_the_board() {
    let mut board = Board::default();
    board.place(1, 1, Symbol::X);
    let before = board.clone();

    let view = GameView::default();
    for _ in 0..3 {
        let _ = view.render(&board.snapshot(), Viewport::new(80, 40));
    }
    assert_eq!(board, before);
}

#[test]
fn test_win_shows_status_and_restart_button() {
    let mut board = Board::default();
    board.place(0, 0, Symbol::X);
    board.place(1, 1, Symbol::O);
    board.place(0, 1, Symbol::X);
    board.place(1, 0, Symbol::O);
    board.place(0, 2, Symbol::X);

    let view = GameView::default();
    let text = frame_text(&view.render(&board.snapshot(), Viewport::new(100, 40)));
    assert!(text.contains("Player X Wins!"));
    assert!(text.contains("Restart"));
}

#[test]
fn test_mouse_click_through_view_mapping_places_a_checker() {
    // Simulates the host loop: terminal coordinates -> logical point ->
    // board action.
    let mut board = Board::default();
    let view = GameView::default();
    let viewport = Viewport::new(80, 40);

    // Click the middle of the board region (terminal cell near the center
    // maps into cell (1, 1)'s hit box).
    let anchor = board.cell(1, 1).anchor();
    let probe = view
        .screen_to_logical(viewport, 8 + (anchor.x / 7.5) as u16, 4 + (anchor.y / 15.0) as u16)
        .expect("anchor lies inside the board region");
    board.apply_action(GameAction::PointerDown(probe));

    assert_eq!(board.get(1, 1), Some(Symbol::X));
}

#[test]
fn test_clicks_outside_region_map_to_none() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 40);
    assert_eq!(view.screen_to_logical(viewport, 0, 0), None);
    assert_eq!(view.screen_to_logical(viewport, 79, 0), None);
    assert_eq!(view.screen_to_logical(viewport, 0, 39), None);
}

#[test]
fn test_restart_button_click_roundtrip() {
    let mut board = Board::default();
    board.place(0, 0, Symbol::X);
    board.place(1, 1, Symbol::O);
    board.place(0, 1, Symbol::X);
    board.place(1, 0, Symbol::O);
    board.place(0, 2, Symbol::X);
    assert!(board.game_over());

    let view = GameView::default();
    let viewport = Viewport::new(80, 40);

    // Terminal cell over the middle of the restart button: logical
    // (410, 70) -> col 8 + 410/7.5, row 4 + 70/15.
    let logical = view
        .screen_to_logical(viewport, 8 + (410.0_f32 / 7.5) as u16, 4 + (70.0_f32 / 15.0) as u16)
        .expect("restart button lies inside the board region");
    board.apply_action(GameAction::PointerDown(logical));

    assert_eq!(board, Board::default());
}
