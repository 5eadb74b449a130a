//! Read-only board view handed to renderers
//!
//! Renderers never see `&mut Board`; they get this snapshot of exactly the
//! fields needed to draw a frame.

use tui_tictactoe_types::{Symbol, CELL_COUNT, GRID_SIZE};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    /// Occupancy in row-major order
    pub cells: [Option<Symbol>; CELL_COUNT],
    pub current_player: Symbol,
    pub game_over: bool,
    pub winner: Option<Symbol>,
    /// Derived status line ("Player X's Turn", "Player O Wins!", ...)
    pub status: String,
}

impl BoardSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cells[row * GRID_SIZE + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_snapshot_reflects_board_state() {
        let mut board = Board::default();
        board.place(2, 1, Symbol::X);

        let snap = board.snapshot();
        assert_eq!(snap.get(2, 1), Some(Symbol::X));
        assert_eq!(snap.get(0, 0), None);
        assert_eq!(snap.current_player, Symbol::O);
        assert!(!snap.game_over);
        assert_eq!(snap.winner, None);
        assert_eq!(snap.status, "Player O's Turn");
    }
}
