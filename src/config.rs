//! Configuration types for termgrid.
//!
//! This module defines the data structures that map to the TOML configuration
//! format. Two top-level tables are recognized:
//!
//! - `defaults`: templates, layout name and emulator settings
//! - `groups`: named host lists that can be referenced as `@name`
//!
//! # Config Format
//!
//! ```toml
//! [defaults]
//! command = "ssh {host}"
//! shell = "zsh -l"
//! layout_name = "termgrid"
//! terminator = "terminator"
//! base_config = "~/.config/terminator/config"
//!
//! [groups]
//! web = ["web1", "web2"]
//! all = ["@web", "admin@db1"]
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Template used for hosts when neither CLI nor config sets one.
pub const DEFAULT_HOST_COMMAND: &str = "ssh {host}";

/// Shell used for `--num` when neither CLI, config nor `$SHELL` sets one.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Layout name written into the Terminator config.
pub const DEFAULT_LAYOUT_NAME: &str = "termgrid";

/// Emulator binary.
pub const DEFAULT_TERMINATOR: &str = "terminator";

/// Global default settings applied when not overridden on the command line.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Command template for hosts.
    pub command: Option<String>,
    /// Command template for local shells.
    pub shell: Option<String>,
    /// Name of the generated layout.
    pub layout_name: Option<String>,
    /// Terminator binary to launch.
    pub terminator: Option<String>,
    /// Existing Terminator config to merge the layout into.
    pub base_config: Option<String>,
}

/// Top-level configuration structure.
///
/// Parsed from `~/.config/termgrid/config.toml` (or XDG equivalent).
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global default settings.
    pub defaults: Defaults,
    /// Host groups: `name` -> hosts or `@name` references.
    pub groups: HashMap<String, Vec<String>>,
}

impl Config {
    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `toml::de::Error` if the TOML is malformed or doesn't match
    /// the expected structure.
    pub fn from_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Get a host group by name.
    pub fn get_group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// List all group names, sorted alphabetically.
    pub fn list_groups(&self) -> Vec<String> {
        let mut result: Vec<_> = self.groups.keys().cloned().collect();
        result.sort();
        result
    }

    /// Host command template: config value or [`DEFAULT_HOST_COMMAND`].
    pub fn host_command(&self) -> &str {
        self.defaults
            .command
            .as_deref()
            .unwrap_or(DEFAULT_HOST_COMMAND)
    }

    /// Shell template: config value, then `$SHELL`, then [`DEFAULT_SHELL`].
    pub fn shell_command(&self) -> String {
        self.defaults
            .shell
            .clone()
            .or_else(|| std::env::var("SHELL").ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_SHELL.to_string())
    }

    pub fn layout_name(&self) -> &str {
        self.defaults
            .layout_name
            .as_deref()
            .unwrap_or(DEFAULT_LAYOUT_NAME)
    }

    pub fn terminator(&self) -> &str {
        self.defaults
            .terminator
            .as_deref()
            .unwrap_or(DEFAULT_TERMINATOR)
    }

    /// Terminator config to merge into, with `~/` expanded.
    ///
    /// Falls back to Terminator's own config file. The path may not exist.
    pub fn base_config(&self) -> Option<PathBuf> {
        match &self.defaults.base_config {
            Some(path) => Some(expand_home(path)),
            None => dirs::config_dir().map(|dir| dir.join("terminator").join("config")),
        }
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_str(
            r#"
            [defaults]
            command = "mosh {host}"
            shell = "fish"
            layout_name = "cluster"
            terminator = "/usr/bin/terminator"
            base_config = "/etc/terminator/config"

            [groups]
            web = ["web1", "web2"]
            all = ["@web", "db"]
            "#,
        )
        .unwrap();

        assert_eq!(config.host_command(), "mosh {host}");
        assert_eq!(config.shell_command(), "fish");
        assert_eq!(config.layout_name(), "cluster");
        assert_eq!(config.terminator(), "/usr/bin/terminator");
        assert_eq!(
            config.base_config(),
            Some(PathBuf::from("/etc/terminator/config"))
        );
        assert_eq!(config.get_group("web").unwrap(), ["web1", "web2"]);
        assert_eq!(config.list_groups(), vec!["all", "web"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.host_command(), DEFAULT_HOST_COMMAND);
        assert_eq!(config.layout_name(), DEFAULT_LAYOUT_NAME);
        assert_eq!(config.terminator(), DEFAULT_TERMINATOR);
        assert!(config.get_group("web").is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_str("[defaults]\nbogus = 1\n").is_err());
        assert!(Config::from_str("[servers.prod]\nhost = \"x\"\n").is_err());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x/y"), home.join("x/y"));
        }
    }
}
