//! Mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
///
/// Everything unmapped is ignored; ignored input is normal, not an error.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Restart (the board ignores this unless the game is over)
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Extract a primary-button press from a mouse event.
///
/// Returns the terminal cell coordinates of the press; drag, release, move,
/// and scroll events are ignored.
pub fn pointer_down(mouse: MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
