//! Checker artwork, looked up by logical name.
//!
//! The game view asks for `"checker_x"` / `"checker_o"`. When a name is
//! missing the caller falls back to a flat-colored block (blue for X, red
//! for O, grey otherwise) instead of failing; the miss is logged once per
//! draw for diagnostics and never reaches the core.

use crate::fb::Rgb;

pub const CHECKER_X: &str = "checker_x";
pub const CHECKER_O: &str = "checker_o";

/// Fixed-size glyph art for one checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub rows: &'static [&'static str],
    pub fg: Rgb,
}

impl Sprite {
    pub fn width(&self) -> u16 {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u16
    }

    pub fn height(&self) -> u16 {
        self.rows.len() as u16
    }
}

const X_SPRITE: Sprite = Sprite {
    rows: &[
        r"#   #",
        r" # # ",
        r"  #  ",
        r" # # ",
        r"#   #",
    ],
    fg: Rgb::new(80, 120, 255),
};

const O_SPRITE: Sprite = Sprite {
    rows: &[
        r" ### ",
        r"#   #",
        r"#   #",
        r"#   #",
        r" ### ",
    ],
    fg: Rgb::new(230, 70, 70),
};

/// Named sprite lookup with a fallback color for misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSet {
    entries: &'static [(&'static str, Sprite)],
}

const BUILTIN: &[(&str, Sprite)] = &[(CHECKER_X, X_SPRITE), (CHECKER_O, O_SPRITE)];

impl SpriteSet {
    pub fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    /// A set with no artwork at all; every lookup takes the fallback path.
    pub fn empty() -> Self {
        Self { entries: &[] }
    }

    pub fn get(&self, name: &str) -> Option<&Sprite> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, sprite)| sprite)
    }
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Flat placeholder color used when a sprite is unavailable.
pub fn fallback_color(name: &str) -> Rgb {
    match name {
        CHECKER_X => Rgb::new(0, 0, 255),
        CHECKER_O => Rgb::new(255, 0, 0),
        _ => Rgb::new(128, 128, 128),
    }
}
