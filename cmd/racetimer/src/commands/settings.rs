//! Settings commands.

use std::path::Path;

use clap::{Args, Subcommand};
use serde::Serialize;

use racetimer_settings::{load_overrides, settings_path, Settings};

use super::{get_settings, output_result, print_verbose};
use crate::Cli;

/// Effective settings.
#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand)]
enum SettingsSubcommand {
    /// Show the effective settings (defaults plus overrides)
    Show,
    /// Show the shipped defaults
    Defaults,
    /// Show the override file location and which keys it sets
    Path,
}

#[derive(Serialize)]
struct PathInfo {
    path: String,
    exists: bool,
    overridden: Vec<String>,
}

impl SettingsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            SettingsSubcommand::Show => self.show(cli),
            SettingsSubcommand::Defaults => self.defaults(cli),
            SettingsSubcommand::Path => self.path(cli),
        }
    }

    fn show(&self, cli: &Cli) -> anyhow::Result<()> {
        let settings = get_settings(cli)?;
        print_verbose(
            cli,
            &format!("{} racers selectable", settings.racer_list_size()),
        );
        output_result(&settings, cli.output.as_deref(), cli.json)
    }

    fn defaults(&self, cli: &Cli) -> anyhow::Result<()> {
        output_result(&Settings::default(), cli.output.as_deref(), cli.json)
    }

    fn path(&self, cli: &Cli) -> anyhow::Result<()> {
        let path = settings_path(cli.settings.as_deref().map(Path::new))?;
        let overrides = load_overrides(&path)?;

        let info = PathInfo {
            path: path.display().to_string(),
            exists: overrides.is_some(),
            overridden: overrides.map(|o| o.keys()).unwrap_or_default(),
        };
        output_result(&info, cli.output.as_deref(), cli.json)
    }
}
