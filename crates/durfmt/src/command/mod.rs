use std::error::Error;

use clap::Subcommand;
use durfmt_common::config::{Config, load_config};
use durfmt_printer::{PrettyError, Settings};
use log::warn;

mod cli;

#[derive(Subcommand)]
#[command(infer_subcommands = true)]
pub enum DurfmtCmd {
    #[command(flatten)]
    Cli(cli::Cmd),
}

impl DurfmtCmd {
    pub fn run(self, settings: &Settings) {
        match self {
            Self::Cli(cli) => cli.run(settings),
        }
    }
}

/// Fetch the settings for the current user configuration.
///
/// An unreadable config file is logged and replaced by the defaults.
///
/// # Errors
///
/// Will return `Err` if the configuration names unknown or unsupported units or policies.
pub fn current_settings() -> Result<Settings, PrettyError> {
    settings_from(load_config())
}

fn settings_from(loaded: Result<Config, Box<dyn Error>>) -> Result<Settings, PrettyError> {
    let config = loaded.unwrap_or_else(|err| {
        warn!("could not load config, using defaults: {err}");
        Config::default()
    });
    Settings::from_config(&config)
}
