//! Terminal input module (core-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into game actions; raw terminal mouse
//! coordinates are handed back to the host, which knows the view geometry
//! needed to turn them into logical screen positions.

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, pointer_down, should_quit};
