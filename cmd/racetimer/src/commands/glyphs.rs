//! Glyph commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use racetimer_lcd::{load_glyphs, CharGenerator, Glyph, ALL_GLYPHS, DEFAULT_GLYPHS, SLOT_COUNT};

use super::output_result;
use crate::Cli;

/// Custom LCD characters.
#[derive(Args)]
pub struct GlyphsCommand {
    #[command(subcommand)]
    command: GlyphsSubcommand,
}

#[derive(Subcommand)]
enum GlyphsSubcommand {
    /// List every glyph and the slot it loads into
    List,
    /// Show a glyph's rows and pixel art
    Show {
        /// Glyph name (case-insensitive)
        name: String,
    },
}

#[derive(Serialize)]
struct GlyphSummary {
    name: &'static str,
    /// Slot at startup, none if not loaded
    slot: Option<u8>,
}

#[derive(Serialize)]
struct GlyphDetail {
    name: &'static str,
    slot: Option<u8>,
    rows: Vec<String>,
    bytes: [u8; 8],
    art: Vec<String>,
}

/// Records the slot each glyph is registered into at startup.
#[derive(Default)]
struct SlotMap {
    slots: Vec<(u8, [u8; 8])>,
}

impl CharGenerator for SlotMap {
    fn create_char(&mut self, slot: u8, rows: &[u8; 8]) {
        self.slots.push((slot, *rows));
    }
}

impl SlotMap {
    fn startup() -> anyhow::Result<SlotMap> {
        let mut map = SlotMap::default();
        load_glyphs(&mut map, &DEFAULT_GLYPHS)?;
        Ok(map)
    }

    fn slot_of(&self, glyph: &Glyph) -> Option<u8> {
        self.slots
            .iter()
            .find(|(_, rows)| *rows == glyph.rows)
            .map(|(slot, _)| *slot)
    }
}

impl GlyphsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            GlyphsSubcommand::List => self.list(cli),
            GlyphsSubcommand::Show { name } => self.show(cli, name),
        }
    }

    fn list(&self, cli: &Cli) -> anyhow::Result<()> {
        let slots = SlotMap::startup()?;
        let glyphs: Vec<GlyphSummary> = ALL_GLYPHS
            .iter()
            .map(|g| GlyphSummary {
                name: g.name,
                slot: slots.slot_of(g),
            })
            .collect();

        tracing::debug!(total = glyphs.len(), slots = SLOT_COUNT, "listing glyphs");
        output_result(&glyphs, cli.output.as_deref(), cli.json)
    }

    fn show(&self, cli: &Cli, name: &str) -> anyhow::Result<()> {
        let glyph = Glyph::by_name(name).ok_or_else(|| {
            anyhow::anyhow!(
                "glyph '{}' not found, known glyphs: {}",
                name,
                Glyph::names().join(", ")
            )
        })?;

        let detail = GlyphDetail {
            name: glyph.name,
            slot: SlotMap::startup()?.slot_of(glyph),
            rows: glyph.bit_rows(),
            bytes: glyph.rows,
            art: glyph.to_string().lines().map(str::to_string).collect(),
        };
        output_result(&detail, cli.output.as_deref(), cli.json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_slots() {
        let slots = SlotMap::startup().unwrap();
        let skull = Glyph::by_name("Skull").unwrap();
        let heart = Glyph::by_name("Heart").unwrap();
        assert_eq!(slots.slot_of(skull), Some(0));
        assert_eq!(slots.slot_of(heart), None);
    }
}
