//! Terminal tic-tac-toe runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input
//! (including mouse capture) and a framebuffer-based renderer. The loop is
//! single-threaded and synchronous: render a frame, drain one event, apply
//! it to the board, repeat.

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_tictactoe::core::Board;
use tui_tictactoe::input::{handle_key_event, pointer_down, should_quit};
use tui_tictactoe::term::{GameView, TerminalRenderer, Viewport};
use tui_tictactoe::types::GameAction;

/// How long to wait for input before redrawing anyway.
const POLL_MS: u64 = 50;

/// Log file written when `TUI_TICTACTOE_LOG` is set. Logging must not go to
/// stdout/stderr while the terminal is in raw mode.
const LOG_FILE: &str = "tui-tictactoe.log";

fn main() -> Result<()> {
    init_tracing()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing() -> Result<()> {
    let Ok(filter) = std::env::var("TUI_TICTACTOE_LOG") else {
        return Ok(());
    };
    let file = File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut board = Board::default();
    let view = GameView::default();

    loop {
        // Render every pass, whether or not state changed.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&board.snapshot(), viewport);
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    board.apply_action(action);
                }
            }
            Event::Mouse(mouse) => {
                if let Some((col, row)) = pointer_down(mouse) {
                    if let Some(pos) = view.screen_to_logical(viewport, col, row) {
                        board.apply_action(GameAction::PointerDown(pos));
                    }
                }
            }
            Event::Resize(..) => {
                // Next pass re-renders at the new size.
            }
            _ => {}
        }
    }
}
