//! Command template substitution.
//!
//! Turns a command template plus a list of hosts (or a shell count) into the
//! resolved commands that become terminal panes. Supported placeholders:
//!
//! - `{host}` (or bare `{}`): the host as given, e.g. `admin@10.0.0.1`
//! - `{user}`: the part before `@`, empty if there is none
//! - `{ip}`: the part after `@`, or the whole host
//! - `{index}`: 1-based position of the pane
//!
//! # Example
//!
//! ```
//! use termgrid::interpolate::interpolate;
//!
//! let cmd = interpolate("ssh -l {user} {ip}", "admin@192.168.1.100", 1);
//! assert_eq!(cmd, "ssh -l admin 192.168.1.100");
//! ```

/// Parse a host string into (user, ip) components.
///
/// Expects format `user@ip` and returns `None` if the `@` is missing.
///
/// # Examples
///
/// ```
/// use termgrid::interpolate::parse_host;
///
/// assert_eq!(parse_host("admin@192.168.1.1"), Some(("admin", "192.168.1.1")));
/// assert_eq!(parse_host("no-at-sign"), None);
/// ```
pub fn parse_host(host: &str) -> Option<(&str, &str)> {
    host.split_once('@')
}

/// Whether `template` mentions the host in any form.
pub fn has_host_placeholder(template: &str) -> bool {
    ["{host}", "{}", "{user}", "{ip}"]
        .iter()
        .any(|p| template.contains(p))
}

/// Replace every placeholder in `template`.
///
/// # Examples
///
/// ```
/// use termgrid::interpolate::interpolate;
///
/// assert_eq!(interpolate("ssh {}", "web1", 3), "ssh web1");
/// assert_eq!(interpolate("echo pane {index}", "", 3), "echo pane 3");
/// ```
pub fn interpolate(template: &str, host: &str, index: usize) -> String {
    let (user, ip) = parse_host(host).unwrap_or(("", host));
    let index = index.to_string();
    let placeholders = [
        ("{host}", host),
        ("{}", host),
        ("{user}", user),
        ("{ip}", ip),
        ("{index}", index.as_str()),
    ];

    // Single pass, so substituted text is never scanned again.
    let mut out = String::with_capacity(template.len() + host.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match placeholders.iter().find(|(p, _)| tail.starts_with(p)) {
            Some((p, value)) => {
                out.push_str(value);
                rest = &tail[p.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Resolve one command per host.
///
/// A template with no host placeholder gets the host appended, so a plain
/// `ssh` or `mosh` works as a template.
pub fn host_cells(template: &str, hosts: &[String]) -> Vec<String> {
    let template = if has_host_placeholder(template) {
        template.to_string()
    } else {
        tracing::debug!(template, "no host placeholder, appending host");
        format!("{} {{host}}", template)
    };

    hosts
        .iter()
        .enumerate()
        .map(|(i, host)| interpolate(&template, host, i + 1))
        .collect()
}

/// Resolve `count` copies of a shell template.
pub fn shell_cells(template: &str, count: u32) -> Vec<String> {
    (1..=count as usize)
        .map(|i| template.replace("{index}", &i.to_string()))
        .collect()
}
