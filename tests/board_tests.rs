//! Board tests - state machine and hit-testing through the facade crate

use tui_tictactoe::core::{Board, Placement};
use tui_tictactoe::types::{Point, Symbol, GRID_SIZE, HIT_MARGIN};

#[test]
fn test_new_board_is_empty_with_x_to_move() {
    let board = Board::default();
    assert_eq!(board.current_player(), Symbol::X);
    assert!(!board.game_over());
    assert_eq!(board.winner(), None);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert_eq!(board.get(row, col), None, "cell ({}, {})", row, col);
        }
    }
}

#[test]
fn test_turn_parity_over_a_full_game() {
    // After N valid alternating placements the current player is X iff N
    // is even.
    let mut board = Board::default();
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
    ];
    for (n, (row, col)) in moves.iter().enumerate() {
        let expected = if n % 2 == 0 { Symbol::X } else { Symbol::O };
        assert_eq!(board.current_player(), expected, "before move {}", n);
        let symbol = board.current_player();
        assert_eq!(board.place(*row, *col, symbol), Placement::Placed);
        if board.game_over() {
            break;
        }
    }
}

#[test]
fn test_rejected_placement_mutates_nothing() {
    let mut board = Board::default();
    board.place(1, 1, Symbol::X);
    let before = board.clone();

    assert_eq!(board.place(1, 1, Symbol::O), Placement::Rejected);
    assert_eq!(board, before);
    assert_eq!(board.current_player(), before.current_player());
    assert_eq!(board.get(1, 1), Some(Symbol::X));
}

#[test]
fn test_column_win() {
    let mut board = Board::default();
    board.place(0, 1, Symbol::X);
    board.place(0, 0, Symbol::O);
    board.place(1, 1, Symbol::X);
    board.place(1, 0, Symbol::O);
    board.place(2, 1, Symbol::X);

    assert!(board.game_over());
    assert_eq!(board.winner(), Some(Symbol::X));
    assert_eq!(board.status_message(), "Player X Wins!");
}

#[test]
fn test_anti_diagonal_win_for_o() {
    let mut board = Board::default();
    board.place(0, 0, Symbol::X);
    board.place(0, 2, Symbol::O);
    board.place(0, 1, Symbol::X);
    board.place(1, 1, Symbol::O);
    board.place(2, 2, Symbol::X);
    board.place(2, 0, Symbol::O);

    assert!(board.game_over());
    assert_eq!(board.winner(), Some(Symbol::O));
    assert_eq!(board.status_message(), "Player O Wins!");
}

#[test]
fn test_find_cell_at_is_deterministic() {
    let mut board = Board::default();
    board.place(1, 1, Symbol::X);

    let probes = [
        Point::new(45.9, 42.9),
        Point::new(250.0, 250.0),
        Point::new(5.0, 5.0),
        Point::new(400.0, 400.0),
    ];
    for probe in probes {
        let first = board.find_cell_at(probe);
        for _ in 0..10 {
            assert_eq!(board.find_cell_at(probe), first);
        }
    }
}

#[test]
fn test_hit_box_bounds_are_strict() {
    let board = Board::default();
    let anchor = board.cell(0, 0).anchor();
    let (cell_w, _) = board.cell_size();

    // Exactly on the inflated edge is a miss (strict comparison).
    let left_edge = Point::new(anchor.x - HIT_MARGIN, anchor.y);
    assert_ne!(board.find_cell_at(left_edge), Some((0, 0)));
    let right_edge = Point::new(anchor.x + cell_w / 2.0 + HIT_MARGIN, anchor.y);
    assert_ne!(board.find_cell_at(right_edge), Some((0, 0)));
}

#[test]
fn test_reset_restores_initial_state() {
    let mut board = Board::default();
    let anchors: Vec<Point> = (0..GRID_SIZE)
        .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
        .map(|(r, c)| board.cell(r, c).anchor())
        .collect();

    board.place(0, 0, Symbol::X);
    board.place(1, 1, Symbol::O);
    board.reset();

    assert_eq!(board, Board::default());
    let after: Vec<Point> = (0..GRID_SIZE)
        .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
        .map(|(r, c)| board.cell(r, c).anchor())
        .collect();
    assert_eq!(anchors, after);
}
