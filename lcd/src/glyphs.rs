//! 5x8 character bitmaps.

use std::fmt;

/// Pixel columns per glyph row.
pub const GLYPH_WIDTH: usize = 5;

/// Pixel rows per glyph.
pub const GLYPH_HEIGHT: usize = 8;

const ROW_MASK: u8 = 0b1_1111;

/// A custom character: eight rows, low five bits each, bit 4 leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Display name
    pub name: &'static str,
    /// Pixel rows, top to bottom
    pub rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// Creates a new glyph.
    pub const fn new(name: &'static str, rows: [u8; GLYPH_HEIGHT]) -> Self {
        Self { name, rows }
    }

    /// Returns row `row` as a `0`/`1` string, leftmost column first.
    ///
    /// Bits above the low five are not displayed and are ignored.
    pub fn bit_row(&self, row: usize) -> Option<String> {
        let bits = self.rows.get(row)? & ROW_MASK;
        Some(format!("{:05b}", bits))
    }

    /// Returns all rows as `0`/`1` strings.
    pub fn bit_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|bits| format!("{:05b}", bits & ROW_MASK))
            .collect()
    }

    /// Returns whether the pixel at (`row`, `col`) is lit.
    pub fn pixel(&self, row: usize, col: usize) -> bool {
        if col >= GLYPH_WIDTH {
            return false;
        }
        match self.rows.get(row) {
            Some(bits) => bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0,
            None => false,
        }
    }

    /// Returns a glyph by name, ignoring case.
    pub fn by_name(name: &str) -> Option<&'static Glyph> {
        ALL_GLYPHS
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// Returns all glyph names.
    pub fn names() -> Vec<&'static str> {
        ALL_GLYPHS.iter().map(|g| g.name).collect()
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                f.write_str(if self.pixel(row, col) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub const SKULL: Glyph = Glyph::new(
    "Skull",
    [
        0b00000, 0b01110, 0b10101, 0b11011, 0b01110, 0b01110, 0b00000, 0b00000,
    ],
);

pub const UP_DOWN_ARROW: Glyph = Glyph::new(
    "UpDownArrow",
    [
        0b00100, 0b01110, 0b10101, 0b00100, 0b00100, 0b10101, 0b01110, 0b00100,
    ],
);

pub const MUSIC_NOTE: Glyph = Glyph::new(
    "MusicNote",
    [
        0b00111, 0b00110, 0b00100, 0b00111, 0b00110, 0b11100, 0b11100, 0b11100,
    ],
);

/// Speaker with sound waves.
pub const GAME_SOUND: Glyph = Glyph::new(
    "GameSound",
    [
        0b00001, 0b00101, 0b10101, 0b10101, 0b10101, 0b10101, 0b00101, 0b00001,
    ],
);

pub const HEART: Glyph = Glyph::new(
    "Heart",
    [
        0b00000, 0b01010, 0b11111, 0b11111, 0b01110, 0b00100, 0b00000, 0b00000,
    ],
);

pub const ALIEN: Glyph = Glyph::new(
    "Alien",
    [
        0b11111, 0b10101, 0b11111, 0b11111, 0b01110, 0b01010, 0b11011, 0b00000,
    ],
);

pub const CHECK: Glyph = Glyph::new(
    "Check",
    [
        0b00000, 0b00001, 0b00011, 0b10110, 0b11100, 0b01000, 0b00000, 0b00000,
    ],
);

pub const UP_ARROW: Glyph = Glyph::new(
    "UpArrow",
    [
        0b00100, 0b01110, 0b10101, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100,
    ],
);

pub const DOWN_ARROW: Glyph = Glyph::new(
    "DownArrow",
    [
        0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b10101, 0b01110, 0b00100,
    ],
);

/// Glyphs registered at startup, in slot order.
pub static DEFAULT_GLYPHS: [Glyph; 4] = [SKULL, UP_DOWN_ARROW, MUSIC_NOTE, GAME_SOUND];

/// Every known glyph.
pub static ALL_GLYPHS: &[&Glyph] = &[
    &SKULL,
    &UP_DOWN_ARROW,
    &MUSIC_NOTE,
    &GAME_SOUND,
    &HEART,
    &ALIEN,
    &CHECK,
    &UP_ARROW,
    &DOWN_ARROW,
];
