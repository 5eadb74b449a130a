//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Logical screen dimensions (the coordinate space the core hit-tests in)
pub const SCREEN_WIDTH: f32 = 480.0;
pub const SCREEN_HEIGHT: f32 = 480.0;

/// Board dimensions
pub const GRID_SIZE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Board inset margins, subtracted from the screen before dividing into
/// 3 equal columns/rows
pub const BOARD_INSET_X: f32 = 20.0;
pub const BOARD_INSET_Y: f32 = 50.0;

/// Hit boxes are inflated by this margin on all sides of the anchor
pub const HIT_MARGIN: f32 = 20.0;

/// Cell anchors sit at `(index + 0.3) * cell size`, offset from the true
/// cell center so a checker drawn at the anchor lands inside the grid lines
pub const ANCHOR_BIAS: f32 = 0.3;

/// Restart button, shown and hit-tested only while the game is over
pub const RESTART_BUTTON: Rect = Rect::new(350.0, 50.0, 120.0, 40.0);

/// Where the status line is drawn
pub const STATUS_POS: Point = Point::new(150.0, 10.0);

/// A player's marker. Exactly two values; an empty cell is represented by
/// `Option::<Symbol>::None`, never by a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// The other player's symbol
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point in logical screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in logical screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// Game actions, produced by input mapping and consumed by the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Primary button pressed at a logical screen position
    PointerDown(Point),
    /// Restart request; ignored unless the game is over
    Restart,
}
