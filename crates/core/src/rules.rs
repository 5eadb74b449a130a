//! Win/draw evaluation - pure functions over the occupancy grid
//!
//! Only one line can be newly completed per move, so the check order does not
//! affect which symbol wins, but it is fixed anyway so tests can rely on it:
//! rows top to bottom, columns left to right, main diagonal, anti-diagonal.

use tui_tictactoe_types::{Symbol, CELL_COUNT};

/// Outcome of evaluating the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No line matched and at least one cell is still empty
    InProgress,
    /// A row, column, or diagonal is fully occupied by this symbol
    Won(Symbol),
    /// All nine cells occupied with no line matched
    Draw,
}

/// All win lines as flat row-major indices, in evaluation order
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Evaluate the grid for a win or draw.
///
/// `cells` is the board occupancy in row-major order.
pub fn evaluate(cells: &[Option<Symbol>; CELL_COUNT]) -> Outcome {
    for [a, b, c] in LINES {
        if let Some(symbol) = cells[a] {
            if cells[b] == Some(symbol) && cells[c] == Some(symbol) {
                return Outcome::Won(symbol);
            }
        }
    }

    if cells.iter().all(|cell| cell.is_some()) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
