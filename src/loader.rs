//! Config file discovery and loading.
//!
//! Handles finding the config file across different platforms and loading it.
//! The search order is:
//!
//! 1. `$XDG_CONFIG_HOME/termgrid/config.toml`
//! 2. `~/.config/termgrid/config.toml`
//! 3. Platform default (e.g., `~/Library/Application Support` on macOS)
//!
//! Unlike an explicit `--config` path, a missing default config is not an
//! error: termgrid works without one.

use crate::config::Config;
use crate::error::{Result, TermgridError};
use std::path::{Path, PathBuf};

/// Determine the config file path.
///
/// Checks locations in order of preference:
/// 1. `$XDG_CONFIG_HOME/termgrid/config.toml` (if XDG_CONFIG_HOME is set)
/// 2. `~/.config/termgrid/config.toml`
/// 3. Platform default via `dirs::config_dir()`
///
/// If no existing config is found, returns `~/.config/termgrid/config.toml`.
///
/// # Errors
///
/// Returns [`TermgridError::NoConfigDir`] if the home directory cannot be determined.
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("termgrid").join("config.toml");
        if path.exists() {
            return Ok(path);
        }
    }

    let home = dirs::home_dir().ok_or(TermgridError::NoConfigDir)?;
    let dot_config = home.join(".config").join("termgrid").join("config.toml");
    if dot_config.exists() {
        return Ok(dot_config);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("termgrid").join("config.toml");
        if path.exists() {
            return Ok(path);
        }
    }

    Ok(dot_config)
}

/// Load and parse a config file from the given path.
///
/// # Errors
///
/// - [`TermgridError::ConfigNotFound`] if the file doesn't exist
/// - [`TermgridError::IoError`] if reading fails
/// - [`TermgridError::ParseError`] if TOML parsing fails
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(TermgridError::ConfigNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    let config = Config::from_str(&contents)?;
    tracing::debug!(path = %path.display(), groups = config.groups.len(), "loaded config");
    Ok(config)
}

/// Load config from the default path, or defaults if there is none.
pub fn load_default_config() -> Result<Config> {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(TermgridError::NoConfigDir) => return Ok(Config::default()),
        Err(e) => return Err(e),
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load_config(&path)
}

/// Load `explicit` if given, otherwise the default config.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => load_default_config(),
    }
}
