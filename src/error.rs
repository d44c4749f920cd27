//! Error types for termgrid.
//!
//! All errors in termgrid are represented by [`TermgridError`], which covers
//! configuration issues, host group resolution, empty input and launch
//! failures. The layout core itself cannot fail.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in termgrid.
#[derive(Error, Debug)]
pub enum TermgridError {
    /// Config file does not exist at the given path.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Could not determine the user's config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing failed.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A referenced host group does not exist in config.
    #[error("Host group not found: {0}")]
    GroupNotFound(String),

    /// Group reference (`@name`) has invalid syntax.
    #[error("Invalid group reference: {0}")]
    InvalidRef(String),

    /// Group references form a cycle (A -> B -> A).
    #[error("Circular reference detected: {0}")]
    CircularRef(String),

    /// Nothing to lay out: no hosts and no shells.
    #[error("Nothing to open: at least one host or shell is required")]
    NoCells,

    /// A command holds both triple-quote styles and cannot be written.
    #[error("Command cannot be quoted for the Terminator config: {0}")]
    Unquotable(String),

    /// The terminal emulator could not be started.
    #[error("Failed to launch {program}: {reason}")]
    Launch {
        /// Binary that was being started.
        program: String,
        /// Underlying failure.
        reason: String,
    },
}

/// Convenient Result type alias for termgrid operations.
pub type Result<T> = std::result::Result<T, TermgridError>;
