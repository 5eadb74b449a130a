//! Terminal frontend: framebuffer, renderer, sprites, and the game view.
//!
//! Everything here reads [`tui_tictactoe_core::BoardSnapshot`]; the frontend
//! can never mutate game state.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprites;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use sprites::{Sprite, SpriteSet};
