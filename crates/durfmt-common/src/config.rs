use std::{
    error::Error,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;

use crate::utils::get_config_dir;

const CONFIG_FILE: &str = "config.toml";

/// Represents the main application configuration structure.
///
/// Holds settings related to different parts of the application.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub units: Vec<UnitConfig>,
}

/// Base formatting parameters, applied before any command line overrides.
///
/// Every field is optional; unset fields keep the library defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    pub units: Option<Vec<String>>,
    pub cap: Option<usize>,
    pub policy: Option<String>,
    pub separator: Option<String>,
}

/// A user defined unit of time.
///
/// * `id`: unique identifier, also accepted wherever a unit name is expected.
/// * `seconds`: whole seconds part of the unit length.
/// * `nanos`: nanosecond part of the unit length. Only one of `seconds`/`nanos` may be non-zero.
/// * `singular`: display name used for a count of exactly one.
/// * `plural`: display name used for every other count.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UnitConfig {
    pub id: String,
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i64,
    pub singular: String,
    pub plural: String,
}

/// Path of the `config.toml` file inside the platform config directory, if one can be located.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the application configuration from a `config.toml` file.
///
/// The configuration file is expected to be located in the platform-specific
/// configuration directory retrieved via `get_config_dir()`.
/// If the configuration file is not found at the expected path, a default
/// `Config` instance is returned.
///
/// # Errors
/// - `Err(Box<dyn std::error::Error>)`: An error occurred during file reading or TOML parsing.
pub fn load_config() -> Result<Config, Box<dyn Error>> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            debug!("Could not determine a config directory, using default config.");
            Ok(Config::default())
        }
    }
}

/// Loads the configuration stored at `path`, or the default `Config` if no file exists there.
///
/// # Errors
/// - `Err(Box<dyn std::error::Error>)`: An error occurred during file reading or TOML parsing.
pub fn load_config_from(path: &Path) -> Result<Config, Box<dyn Error>> {
    if !path.exists() {
        debug!("Could not find config at {}, using default config.", path.display());
        return Ok(Config::default());
    }

    debug!("loading config from {}", path.display());
    let config_str = std::fs::read_to_string(path)?;
    Ok(parse_config(&config_str)?)
}

/// Parse a TOML document into a `Config`.
///
/// # Errors
/// Will return `Err` if the document is not valid TOML or does not match the config layout.
pub fn parse_config(config_str: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}
