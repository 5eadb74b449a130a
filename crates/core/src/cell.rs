//! A single board position: a fixed on-screen anchor plus an optional occupant

use tui_tictactoe_types::{Point, Symbol};

/// One of the nine board positions.
///
/// The anchor is fixed at construction and never moves; only the occupant
/// changes, and once set it stays set until the board is reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    anchor: Point,
    occupant: Option<Symbol>,
}

impl Cell {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            occupant: None,
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn occupant(&self) -> Option<Symbol> {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Set the occupant. Callers must check `is_empty` first; the board's
    /// `place` is the only writer and rejects occupied cells.
    pub(crate) fn occupy(&mut self, symbol: Symbol) {
        self.occupant = Some(symbol);
    }

    pub(crate) fn clear(&mut self) {
        self.occupant = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new(Point::new(45.9, 42.9));
        assert!(cell.is_empty());
        assert_eq!(cell.occupant(), None);
        assert_eq!(cell.anchor(), Point::new(45.9, 42.9));
    }

    #[test]
    fn test_occupy_and_clear_leave_anchor_untouched() {
        let anchor = Point::new(198.9, 185.9);
        let mut cell = Cell::new(anchor);
        cell.occupy(Symbol::O);
        assert_eq!(cell.occupant(), Some(Symbol::O));
        assert_eq!(cell.anchor(), anchor);
        cell.clear();
        assert!(cell.is_empty());
        assert_eq!(cell.anchor(), anchor);
    }
}
