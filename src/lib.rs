//! # Termgrid
//!
//! Opens many SSH sessions (or local shells) at once in a single Terminator
//! window, one split pane per host.
//!
//! Termgrid computes a recursive split layout for the requested panes,
//! writes it into a Terminator config and launches Terminator with that
//! layout. The layout is static: termgrid does not manage panes after
//! launch.
//!
//! ## Features
//!
//! - **Layouts**: Deterministic horizontal/vertical splits for any pane count
//! - **Groups**: Named host lists in the config, referenced with `@name`
//! - **Templates**: `{host}`, `{user}`, `{ip}` and `{index}` substitution
//! - **Config merge**: The layout is merged into your existing Terminator config
//!
//! ## Quick Example
//!
//! ```toml
//! # ~/.config/termgrid/config.toml
//!
//! [defaults]
//! command = "ssh {host}"
//!
//! [groups]
//! web = ["web1", "web2", "admin@web3"]
//! ```
//!
//! ```bash
//! termgrid @web db1
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`layout`]: The split layout builder
//! - [`config`]: TOML configuration data structures
//! - [`cli`]: Command-line argument parsing with clap
//! - [`loader`]: Config file discovery and loading
//! - [`resolver`]: Host group (`@name`) expansion
//! - [`interpolate`]: Command template substitution
//! - [`terminator`]: Terminator config rendering and merging
//! - [`launch`]: Config file output and emulator launch
//! - [`error`]: Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod launch;
pub mod layout;
pub mod loader;
pub mod resolver;
pub mod terminator;

pub use config::{Config, Defaults};
pub use error::{Result, TermgridError};
pub use layout::{Cells, Layout, LayoutBuilder, Node, NodeType};
