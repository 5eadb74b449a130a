//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board model, turn management, placement
//! validation, and win/draw evaluation. It has **zero dependencies** on UI
//! or I/O, making it:
//!
//! - **Deterministic**: the same click sequence always produces the same game
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: can run headless or behind any frontend
//!
//! # Module Structure
//!
//! - [`board`]: the 3x3 board state machine with hit-testing and restart
//! - [`cell`]: a single board position (fixed anchor + optional occupant)
//! - [`rules`]: win/draw evaluation over the occupancy grid
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - X always moves first; turns alternate strictly while the game is in
//!   progress
//! - A line of three identical symbols (row, column, or diagonal) wins;
//!   a full board with no line is a draw
//! - Terminal states only leave via reset (restart button or key)
//! - Clicking an occupied cell or a finished board is a rejected no-op,
//!   not an error
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{Board, Placement};
//! use tui_tictactoe_types::Symbol;
//!
//! let mut board = Board::default();
//! assert_eq!(board.place(0, 0, Symbol::X), Placement::Placed);
//! assert_eq!(board.place(0, 0, Symbol::O), Placement::Rejected);
//! assert_eq!(board.current_player(), Symbol::O);
//! ```

pub mod board;
pub mod cell;
pub mod rules;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Placement};
pub use cell::Cell;
pub use rules::{evaluate, Outcome};
pub use snapshot::BoardSnapshot;
