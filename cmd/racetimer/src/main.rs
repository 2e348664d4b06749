//! Race timer CLI - inspect the tune, glyph and settings data.

use clap::{Parser, Subcommand};

mod commands;

use commands::{GlyphsCommand, SettingsCommand, SongsCommand};

/// Race timer CLI - inspect the data shipped with the race timer.
///
/// This tool lets you:
///   - List, check and preview the RTTTL tunes and melodies
///   - Show the custom LCD glyphs
///   - Print the effective settings after local overrides
///
/// Local overrides are read from ~/.racetimer/localSettings.yaml.
#[derive(Parser)]
#[command(name = "racetimer")]
#[command(about = "Race timer data tool")]
#[command(version)]
pub struct Cli {
    /// Override file (default is ~/.racetimer/localSettings.yaml)
    #[arg(long, global = true)]
    pub settings: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// RTTTL tunes and melodies
    Songs(SongsCommand),
    /// Custom LCD characters
    Glyphs(GlyphsCommand),
    /// Effective settings
    Settings(SettingsCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    match &cli.command {
        Commands::Songs(cmd) => cmd.run(&cli),
        Commands::Glyphs(cmd) => cmd.run(&cli),
        Commands::Settings(cmd) => cmd.run(&cli),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["racetimer", "songs", "list", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Songs(_)));
    }
}
