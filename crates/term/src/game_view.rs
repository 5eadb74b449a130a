//! GameView: maps `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The view presents the board in a fixed logical space (480x480, the same
//! space the core hit-tests in) scaled onto a region of terminal cells. It
//! also provides the inverse mapping so the host can turn terminal mouse
//! coordinates back into logical positions.

use tracing::warn;

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprites::{fallback_color, SpriteSet, CHECKER_O, CHECKER_X};

use tui_tictactoe_core::BoardSnapshot;
use tui_tictactoe_types::{
    Point, Symbol, ANCHOR_BIAS, BOARD_INSET_X, BOARD_INSET_Y, GRID_SIZE, RESTART_BUTTON,
    SCREEN_HEIGHT, SCREEN_WIDTH, STATUS_POS,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the tic-tac-toe board.
pub struct GameView {
    /// Board region width in terminal columns.
    cols: u16,
    /// Board region height in terminal rows.
    rows: u16,
    sprites: SpriteSet,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 compensates for typical terminal glyph aspect ratio.
        Self {
            cols: 64,
            rows: 32,
            sprites: SpriteSet::builtin(),
        }
    }
}

impl GameView {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            sprites: SpriteSet::builtin(),
        }
    }

    pub fn with_sprites(mut self, sprites: SpriteSet) -> Self {
        self.sprites = sprites;
        self
    }

    /// Top-left corner of the board region, centered in the viewport.
    fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let ox = viewport.width.saturating_sub(self.cols) / 2;
        let oy = viewport.height.saturating_sub(self.rows) / 2;
        (ox, oy)
    }

    /// Logical pixels per terminal column/row.
    fn scale(&self) -> (f32, f32) {
        (
            SCREEN_WIDTH / self.cols.max(1) as f32,
            SCREEN_HEIGHT / self.rows.max(1) as f32,
        )
    }

    fn to_screen(&self, viewport: Viewport, p: Point) -> (u16, u16) {
        let (ox, oy) = self.origin(viewport);
        let (sx, sy) = self.scale();
        (
            ox.saturating_add((p.x / sx) as u16),
            oy.saturating_add((p.y / sy) as u16),
        )
    }

    /// Map a terminal cell back into logical screen space.
    ///
    /// Returns `None` for positions outside the board region; such clicks
    /// cannot hit a cell or the restart button.
    pub fn screen_to_logical(&self, viewport: Viewport, x: u16, y: u16) -> Option<Point> {
        let (ox, oy) = self.origin(viewport);
        if x < ox || y < oy || x >= ox + self.cols || y >= oy + self.rows {
            return None;
        }
        let (sx, sy) = self.scale();
        // Sample the center of the terminal cell.
        Some(Point::new(
            ((x - ox) as f32 + 0.5) * sx,
            ((y - oy) as f32 + 0.5) * sy,
        ))
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (ox, oy) = self.origin(viewport);

        // Board background: the flat grey placeholder plus grid lines.
        let bg = CellStyle {
            fg: Rgb::new(90, 90, 90),
            bg: Rgb::new(40, 40, 40),
            bold: false,
        };
        fb.fill_rect(ox, oy, self.cols, self.rows, ' ', bg);
        self.draw_grid(viewport, fb, bg);

        // Checkers at their anchors.
        let (cell_w, cell_h) = cell_size();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if let Some(symbol) = snap.get(row, col) {
                    let anchor = Point::new(
                        (col as f32 + ANCHOR_BIAS) * cell_w,
                        (row as f32 + ANCHOR_BIAS) * cell_h,
                    );
                    self.draw_checker(viewport, fb, symbol, anchor);
                }
            }
        }

        // Status line, green on a win.
        let status_style = if snap.winner.is_some() {
            CellStyle {
                fg: Rgb::new(0, 200, 0),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            }
        } else {
            CellStyle::default()
        };
        let (tx, ty) = self.to_screen(viewport, STATUS_POS);
        fb.put_str(tx, ty, &snap.status, status_style);

        // Restart button only exists while the game is over.
        if snap.game_over {
            self.draw_restart_button(viewport, fb);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, viewport: Viewport, fb: &mut FrameBuffer, style: CellStyle) {
        let (cell_w, cell_h) = cell_size();
        let grid_w = cell_w * GRID_SIZE as f32;
        let grid_h = cell_h * GRID_SIZE as f32;

        for k in 1..GRID_SIZE {
            let lx = k as f32 * cell_w;
            let (x0, y0) = self.to_screen(viewport, Point::new(lx, 0.0));
            let (_, y1) = self.to_screen(viewport, Point::new(lx, grid_h));
            for y in y0..=y1 {
                fb.put_char(x0, y, '│', style);
            }

            let ly = k as f32 * cell_h;
            let (gx0, gy) = self.to_screen(viewport, Point::new(0.0, ly));
            let (gx1, _) = self.to_screen(viewport, Point::new(grid_w, ly));
            for x in gx0..=gx1 {
                fb.put_char(x, gy, '─', style);
            }
        }
    }

    fn draw_checker(&self, viewport: Viewport, fb: &mut FrameBuffer, symbol: Symbol, anchor: Point) {
        let name = match symbol {
            Symbol::X => CHECKER_X,
            Symbol::O => CHECKER_O,
        };
        let (px, py) = self.to_screen(viewport, anchor);

        match self.sprites.get(name) {
            Some(sprite) => {
                let style = CellStyle {
                    fg: sprite.fg,
                    bg: Rgb::new(40, 40, 40),
                    bold: true,
                };
                for (dy, line) in sprite.rows.iter().enumerate() {
                    for (dx, ch) in line.chars().enumerate() {
                        if ch != ' ' {
                            fb.put_char(px + dx as u16, py + dy as u16, ch, style);
                        }
                    }
                }
            }
            None => {
                // Placeholder block instead of artwork; recovered locally,
                // never surfaced to the core.
                warn!(sprite = name, "sprite missing, drawing placeholder");
                let color = fallback_color(name);
                let style = CellStyle {
                    fg: color,
                    bg: color,
                    bold: false,
                };
                fb.fill_rect(px, py, 5, 3, ' ', style);
            }
        }
    }

    fn draw_restart_button(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let (sx, sy) = self.scale();
        let (bx, by) = self.to_screen(viewport, Point::new(RESTART_BUTTON.x, RESTART_BUTTON.y));
        let bw = (RESTART_BUTTON.w / sx).ceil() as u16;
        let bh = (RESTART_BUTTON.h / sy).ceil() as u16;

        let button = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 128, 0),
            bold: false,
        };
        fb.fill_rect(bx, by, bw, bh, ' ', button);

        let label = CellStyle { bold: true, ..button };
        let (lx, ly) = self.to_screen(
            viewport,
            Point::new(RESTART_BUTTON.x + 20.0, RESTART_BUTTON.y + 10.0),
        );
        fb.put_str(lx, ly, "Restart", label);
    }
}

/// Cell size in logical pixels, matching the core's default layout.
fn cell_size() -> (f32, f32) {
    (
        ((SCREEN_WIDTH - BOARD_INSET_X) / GRID_SIZE as f32).floor(),
        ((SCREEN_HEIGHT - BOARD_INSET_Y) / GRID_SIZE as f32).floor(),
    )
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
