//! Board module - the tic-tac-toe state machine
//!
//! The board owns the nine cells (row-major), the turn state, and the
//! game-over/winner flags. All mutation goes through [`Board::place`] and
//! [`Board::reset`]; everything else is read-only. Rejected placements
//! (occupied cell, finished game) are normal outcomes, not errors.

use tracing::debug;

use tui_tictactoe_types::{
    GameAction, Point, Symbol, ANCHOR_BIAS, BOARD_INSET_X, BOARD_INSET_Y, CELL_COUNT, GRID_SIZE,
    HIT_MARGIN, RESTART_BUTTON, SCREEN_HEIGHT, SCREEN_WIDTH,
};

use crate::cell::Cell;
use crate::rules::{self, Outcome};
use crate::snapshot::BoardSnapshot;

/// Result of a placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The symbol was placed and the outcome re-evaluated
    Placed,
    /// The cell was occupied or the game was already over; nothing changed
    Rejected,
}

/// The 3x3 game board and its turn state machine
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Cells in row-major order, anchors fixed at construction
    cells: [Cell; CELL_COUNT],
    cell_w: f32,
    cell_h: f32,
    current_player: Symbol,
    game_over: bool,
    winner: Option<Symbol>,
}

impl Board {
    /// Create a board laid out for the given logical screen size.
    ///
    /// Insets are subtracted before dividing into 3 equal columns/rows, with
    /// truncation to whole pixels, matching the rendered grid.
    pub fn new(width: f32, height: f32) -> Self {
        let cell_w = ((width - BOARD_INSET_X) / GRID_SIZE as f32).floor();
        let cell_h = ((height - BOARD_INSET_Y) / GRID_SIZE as f32).floor();

        let mut cells = [Cell::new(Point::default()); CELL_COUNT];
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let anchor = Point::new(
                    (col as f32 + ANCHOR_BIAS) * cell_w,
                    (row as f32 + ANCHOR_BIAS) * cell_h,
                );
                cells[Self::index(row, col)] = Cell::new(anchor);
            }
        }

        Self {
            cells,
            cell_w,
            cell_h,
            current_player: Symbol::X,
            game_over: false,
            winner: None,
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        row * GRID_SIZE + col
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[Self::index(row, col)]
    }

    /// Occupant of the cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cells[Self::index(row, col)].occupant()
    }

    pub fn current_player(&self) -> Symbol {
        self.current_player
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Symbol> {
        self.winner
    }

    pub fn cell_size(&self) -> (f32, f32) {
        (self.cell_w, self.cell_h)
    }

    /// Human-readable status line, derived from the state machine
    pub fn status_message(&self) -> String {
        match self.winner {
            Some(symbol) => format!("Player {} Wins!", symbol),
            None if self.game_over => "Game Over: It's a Draw!".to_string(),
            None => format!("Player {}'s Turn", self.current_player),
        }
    }

    /// Place `symbol` at (row, col).
    ///
    /// Rejected (a no-op) when the game is over or the cell is occupied. On
    /// success the outcome is re-evaluated; the turn only flips if the game
    /// is still in progress.
    pub fn place(&mut self, row: usize, col: usize, symbol: Symbol) -> Placement {
        if self.game_over {
            return Placement::Rejected;
        }
        let idx = Self::index(row, col);
        if self.cells[idx].occupant().is_some() {
            return Placement::Rejected;
        }

        self.cells[idx].occupy(symbol);

        match rules::evaluate(&self.occupancy()) {
            Outcome::Won(winner) => {
                self.game_over = true;
                self.winner = Some(winner);
                debug!(winner = %winner, "game won");
            }
            Outcome::Draw => {
                self.game_over = true;
                debug!("game drawn");
            }
            Outcome::InProgress => {
                self.current_player = self.current_player.opponent();
            }
        }

        Placement::Placed
    }

    /// Hit-test a logical screen position against the unoccupied cells.
    ///
    /// Scans in row-major order and returns the first match. The hit box is
    /// asymmetric around the anchor: it extends `HIT_MARGIN` above/left and
    /// half a cell plus `HIT_MARGIN` below/right, because anchors are offset
    /// from the true cell centers. Bounds are strict. Occupied cells are not
    /// retargetable.
    pub fn find_cell_at(&self, pos: Point) -> Option<(usize, usize)> {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell = &self.cells[Self::index(row, col)];
                if cell.occupant().is_some() {
                    continue;
                }
                let anchor = cell.anchor();
                if pos.x > anchor.x - HIT_MARGIN
                    && pos.x < anchor.x + self.cell_w / 2.0 + HIT_MARGIN
                    && pos.y > anchor.y - HIT_MARGIN
                    && pos.y < anchor.y + self.cell_h / 2.0 + HIT_MARGIN
                {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Handle a primary-button press at a logical screen position.
    ///
    /// While the game is over, only a press inside the restart button does
    /// anything. Otherwise the position is resolved to a cell and the current
    /// player's symbol is placed there.
    pub fn pointer_down(&mut self, pos: Point) {
        debug!(?pos, "pointer down");
        if self.game_over {
            if RESTART_BUTTON.contains(pos) {
                self.reset();
            }
            return;
        }
        if let Some((row, col)) = self.find_cell_at(pos) {
            let symbol = self.current_player;
            let _ = self.place(row, col, symbol);
        }
    }

    /// Apply a mapped input action
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::PointerDown(pos) => self.pointer_down(pos),
            GameAction::Restart => {
                if self.game_over {
                    self.reset();
                }
            }
        }
    }

    /// Return to the initial state: X to move, no winner, all cells empty.
    ///
    /// Anchors are never recomputed. Idempotent.
    pub fn reset(&mut self) {
        self.current_player = Symbol::X;
        self.game_over = false;
        self.winner = None;
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Occupancy grid in row-major order, for rule evaluation
    pub fn occupancy(&self) -> [Option<Symbol>; CELL_COUNT] {
        let mut grid = [None; CELL_COUNT];
        for (slot, cell) in grid.iter_mut().zip(self.cells.iter()) {
            *slot = cell.occupant();
        }
        grid
    }

    /// Read-only view of everything the renderer needs
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self.occupancy(),
            current_player: self.current_player,
            game_over: self.game_over,
            winner: self.winner,
            status: self.status_message(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}
