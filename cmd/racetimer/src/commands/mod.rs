//! CLI commands module.

mod glyphs;
mod settings;
mod songs;
mod util;

pub use glyphs::GlyphsCommand;
pub use settings::SettingsCommand;
pub use songs::SongsCommand;

// Re-export utils for use in commands
pub(crate) use util::*;
