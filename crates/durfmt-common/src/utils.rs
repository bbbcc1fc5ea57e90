use std::{env, path::PathBuf};

/// Fetch the home directory on unix systems via the $HOME env variable.
///
/// Returns `None` if $HOME is not set.
#[must_use]
pub fn get_home_dir() -> Option<PathBuf> {
    env::var("HOME").ok().map(PathBuf::from)
}

/// Fetch the config directory for locating any user set durfmt configuration.
///
/// Defaults to `$XDG_CONFIG_HOME/durfmt` or `$HOME/.config/durfmt` if `$XDG_CONFIG_HOME` cannot
/// be found. Returns `None` when neither variable is set.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    let config_dir = match env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir()?.join(".config"),
    };
    Some(config_dir.join("durfmt"))
}
