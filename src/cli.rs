//! Command-line interface for termgrid.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::launch::LaunchMode;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for termgrid.
///
/// # Examples
///
/// ```bash
/// # One SSH session per host, in a single split window
/// termgrid web1 web2 admin@db1
///
/// # Hosts from a config group, with a custom command
/// termgrid -c "ssh -t {host} htop" @web
///
/// # Four local shells
/// termgrid -n 4
/// ```
#[derive(Parser, Debug)]
#[command(name = "termgrid")]
#[command(version)]
#[command(about = "Terminator layout generator - open hosts or shells in split panes")]
#[command(long_about = "Termgrid builds a Terminator layout with one pane per host (or per shell),\n\
    writes it into a Terminator config and launches Terminator with it.\n\n\
    Hosts can be listed directly or pulled from config groups with @name.")]
pub struct Cli {
    /// Hosts to connect to, or `@group` references.
    #[arg(value_name = "HOST", conflicts_with = "num", required_unless_present_any = ["num", "list"])]
    pub hosts: Vec<String>,

    /// Open COUNT local shells instead of connecting to hosts.
    #[arg(short, long, value_name = "COUNT")]
    pub num: Option<u32>,

    /// Command template; `{host}`, `{user}`, `{ip}` and `{index}` are substituted.
    #[arg(short, long, value_name = "TEMPLATE")]
    pub command: Option<String>,

    /// Layout name inside the Terminator config.
    #[arg(short, long, value_name = "NAME")]
    pub layout_name: Option<String>,

    /// Termgrid config file (defaults to ~/.config/termgrid/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the Terminator config here instead of a temporary file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the generated Terminator config and exit.
    #[arg(long)]
    pub print: bool,

    /// Run Terminator in the foreground instead of detaching.
    #[arg(long)]
    pub foreground: bool,

    /// List host groups from the config.
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// How Terminator should be started.
    pub fn launch_mode(&self) -> LaunchMode {
        if self.foreground {
            LaunchMode::Foreground
        } else {
            LaunchMode::Detached
        }
    }

    /// Default log filter for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
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
    fn test_parse_hosts() {
        let cli = Cli::try_parse_from(["termgrid", "-c", "mosh {host}", "web1", "@db"]).unwrap();
        assert_eq!(cli.hosts, vec!["web1", "@db"]);
        assert_eq!(cli.command.as_deref(), Some("mosh {host}"));
        assert_eq!(cli.launch_mode(), LaunchMode::Detached);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_parse_shells() {
        let cli = Cli::try_parse_from(["termgrid", "-n", "4", "--foreground", "-vv"]).unwrap();
        assert_eq!(cli.num, Some(4));
        assert!(cli.hosts.is_empty());
        assert_eq!(cli.launch_mode(), LaunchMode::Foreground);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_hosts_and_num_conflict() {
        assert!(Cli::try_parse_from(["termgrid", "-n", "2", "web1"]).is_err());
    }

    #[test]
    fn test_requires_hosts_num_or_list() {
        assert!(Cli::try_parse_from(["termgrid"]).is_err());
        assert!(Cli::try_parse_from(["termgrid", "--list"]).is_ok());
    }
}
