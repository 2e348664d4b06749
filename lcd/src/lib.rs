//! Custom LCD characters for the race timer display.
//!
//! HD44780-style controllers hold up to eight user-defined 5x8 characters.
//! This crate ships the glyph bitmaps and a [`CharGenerator`] seam that
//! registers them into slots.

pub mod glyphs;

pub use glyphs::{Glyph, ALL_GLYPHS, DEFAULT_GLYPHS};

use thiserror::Error;

/// Number of custom-character slots on the controller.
pub const SLOT_COUNT: usize = 8;

/// Errors that can occur while registering glyphs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcdError {
    #[error("lcd: {0} glyphs given, only 8 slots available")]
    TooManyGlyphs(usize),
}

/// Result type for LCD operations.
pub type LcdResult<T> = Result<T, LcdError>;

/// A display that accepts custom character bitmaps.
pub trait CharGenerator {
    /// Stores `rows` in custom-character slot `slot` (0-7).
    fn create_char(&mut self, slot: u8, rows: &[u8; 8]);
}

/// Registers `glyphs` into slots `0..glyphs.len()`, in order.
pub fn load_glyphs<G: CharGenerator + ?Sized>(driver: &mut G, glyphs: &[Glyph]) -> LcdResult<()> {
    if glyphs.len() > SLOT_COUNT {
        return Err(LcdError::TooManyGlyphs(glyphs.len()));
    }

    for (slot, glyph) in glyphs.iter().enumerate() {
        tracing::debug!(slot, glyph = glyph.name, "registering glyph");
        driver.create_char(slot as u8, &glyph.rows);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::SKULL;

    #[derive(Default)]
    struct Cgram {
        slots: [[u8; 8]; SLOT_COUNT],
        writes: Vec<u8>,
    }

    impl CharGenerator for Cgram {
        fn create_char(&mut self, slot: u8, rows: &[u8; 8]) {
            self.slots[slot as usize] = *rows;
            self.writes.push(slot);
        }
    }

    #[test]
    fn test_load_default_glyphs() {
        let mut cgram = Cgram::default();
        load_glyphs(&mut cgram, &DEFAULT_GLYPHS).unwrap();
        assert_eq!(cgram.writes, vec![0, 1, 2, 3]);
        assert_eq!(cgram.slots[0], SKULL.rows);
        assert_eq!(cgram.slots[3], DEFAULT_GLYPHS[3].rows);
    }

    #[test]
    fn test_load_fills_all_slots() {
        let glyphs: Vec<Glyph> = ALL_GLYPHS.iter().take(SLOT_COUNT).map(|g| **g).collect();
        let mut cgram = Cgram::default();
        assert!(load_glyphs(&mut cgram, &glyphs).is_ok());
        assert_eq!(cgram.writes.len(), SLOT_COUNT);
    }

    #[test]
    fn test_load_too_many() {
        let glyphs: Vec<Glyph> = ALL_GLYPHS.iter().map(|g| **g).collect();
        let mut cgram = Cgram::default();
        assert_eq!(
            load_glyphs(&mut cgram, &glyphs),
            Err(LcdError::TooManyGlyphs(ALL_GLYPHS.len()))
        );
        assert!(cgram.writes.is_empty());
    }
}
