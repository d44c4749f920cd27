//! Termgrid CLI entry point.
//!
//! This binary provides the `termgrid` command: it resolves hosts or shells
//! into pane commands, builds the split layout, writes a Terminator config
//! and launches Terminator with it.

use clap::Parser;
use termgrid::cli::Cli;
use termgrid::config::Config;
use termgrid::error::Result;
use termgrid::layout::{self, Cells};
use termgrid::{interpolate, launch, loader, resolver, terminator};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = loader::load(cli.config.as_deref())?;

    if cli.list {
        print_groups(&config);
        return Ok(());
    }

    let cells = build_cells(cli, &config)?;
    let layout = layout::build(&cells);
    let layout_name = cli
        .layout_name
        .as_deref()
        .unwrap_or_else(|| config.layout_name());

    let base = read_base_config(&config)?;
    let document = terminator::render_document(base.as_deref(), layout_name, &layout)?;

    if cli.print {
        print!("{}", document);
        return Ok(());
    }

    let path = launch::write_config(&document, cli.output.as_deref())?;
    launch::launch(config.terminator(), &path, layout_name, cli.launch_mode())
}

/// Print all host groups and their members.
fn print_groups(config: &Config) {
    if config.groups.is_empty() {
        println!("No host groups defined.");
        return;
    }
    println!("Groups:");
    for name in config.list_groups() {
        let members = config.get_group(&name).unwrap_or_default();
        println!("  {} = {}", name, members.join(" "));
    }
}

/// Resolve the pane commands from hosts or `--num`.
///
/// Template precedence: CLI flag > config defaults > built-in default.
fn build_cells(cli: &Cli, config: &Config) -> Result<Cells> {
    let commands = match cli.num {
        Some(count) => {
            let shell = config.shell_command();
            let template = cli.command.as_deref().unwrap_or(&shell);
            interpolate::shell_cells(template, count)
        }
        None => {
            let hosts = resolver::resolve_hosts(config, &cli.hosts)?;
            let template = cli.command.as_deref().unwrap_or_else(|| config.host_command());
            interpolate::host_cells(template, &hosts)
        }
    };
    Cells::new(commands)
}

/// Read the Terminator config to merge into, if there is one.
fn read_base_config(config: &Config) -> Result<Option<String>> {
    match config.base_config() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "merging into existing terminator config");
            Ok(Some(std::fs::read_to_string(path)?))
        }
        _ => Ok(None),
    }
}
