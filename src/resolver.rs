//! Host group reference resolution.
//!
//! Hosts passed on the command line may use `@name` to pull in a group
//! defined in the config. Groups may reference other groups; references are
//! expanded recursively, in order, with cycle detection.
//!
//! # Example
//!
//! ```toml
//! [groups]
//! web = ["web1", "web2"]
//! db = ["db1"]
//! all = ["@web", "@db"]  # Expands to web1, web2, db1
//! ```

use crate::config::Config;
use crate::error::{Result, TermgridError};
use std::collections::HashSet;

/// A parsed host argument.
#[derive(Debug, Clone, PartialEq)]
pub enum HostRef {
    /// A plain host, used as is.
    Host(String),
    /// Reference to a group: `@name`
    Group(String),
}

/// Parse a string into a [`HostRef`].
///
/// # Errors
///
/// Returns [`TermgridError::InvalidRef`] for a bare `@` or a name that
/// contains whitespace.
pub fn parse_ref(s: &str) -> Result<HostRef> {
    match s.strip_prefix('@') {
        Some(name) if name.is_empty() || name.contains(char::is_whitespace) => {
            Err(TermgridError::InvalidRef(s.to_string()))
        }
        Some(name) => Ok(HostRef::Group(name.to_string())),
        None => Ok(HostRef::Host(s.to_string())),
    }
}

/// Expand all `@group` references in `args` into a flat host list.
///
/// Order is preserved and duplicates are kept.
///
/// # Errors
///
/// - [`TermgridError::GroupNotFound`] if a referenced group doesn't exist
/// - [`TermgridError::CircularRef`] if references form a cycle
/// - [`TermgridError::InvalidRef`] for malformed references
pub fn resolve_hosts(config: &Config, args: &[String]) -> Result<Vec<String>> {
    let mut visited = HashSet::new();
    let mut hosts = Vec::new();
    for arg in args {
        resolve_inner(config, arg, &mut visited, &mut hosts)?;
    }
    tracing::debug!(args = args.len(), hosts = hosts.len(), "resolved hosts");
    Ok(hosts)
}

fn resolve_inner(
    config: &Config,
    arg: &str,
    visited: &mut HashSet<String>,
    hosts: &mut Vec<String>,
) -> Result<()> {
    let name = match parse_ref(arg)? {
        HostRef::Host(host) => {
            hosts.push(host);
            return Ok(());
        }
        HostRef::Group(name) => name,
    };

    if visited.contains(&name) {
        return Err(TermgridError::CircularRef(name));
    }

    let members = config
        .get_group(&name)
        .ok_or_else(|| TermgridError::GroupNotFound(name.clone()))?;

    visited.insert(name.clone());
    for member in members {
        resolve_inner(config, member, visited, hosts)?;
    }
    visited.remove(&name);

    Ok(())
}
