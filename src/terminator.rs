//! Terminator config rendering.
//!
//! Terminator reads an INI-like nested config (ConfigObj). A layout lives
//! under the top-level `[layouts]` section, one sub-section per layout and
//! one sub-sub-section per node:
//!
//! ```text
//! [layouts]
//!   [[termgrid]]
//!     [[[child0]]]
//!       type = Window
//!       parent = ""
//!     [[[child1]]]
//!       type = Terminal
//!       parent = "child0"
//!       command = "ssh web1"
//! ```
//!
//! The generated section is merged into the user's existing config so
//! profiles, keybindings and plugins keep working in the launched window.

use crate::error::{Result, TermgridError};
use crate::layout::{Layout, NodeType};
use std::fmt::{self, Write};

/// Config used when the user has no Terminator config of their own.
pub const SKELETON: &str = "\
[global_config]
[keybindings]
[profiles]
  [[default]]
[layouts]
[plugins]
";

const LAYOUTS: &str = "layouts";

/// Quote a value so ConfigObj reads it back verbatim.
///
/// Unquoted values with commas would be parsed as lists, so everything is
/// quoted. Double quotes are preferred, then single, then triple quotes.
/// A triple-quoted value may not end with its own quote character, since
/// ConfigObj stops at the first closing triple.
///
/// # Errors
///
/// Returns [`TermgridError::Unquotable`] if no quoting style can hold the
/// value.
///
/// # Examples
///
/// ```
/// use termgrid::terminator::quote_value;
///
/// assert_eq!(quote_value("ssh web1").unwrap(), "\"ssh web1\"");
/// assert_eq!(quote_value(r#"bash -c "top""#).unwrap(), r#"'bash -c "top"'"#);
/// ```
pub fn quote_value(value: &str) -> Result<String> {
    let multiline = value.contains('\n');
    if !multiline && !value.contains('"') {
        Ok(format!("\"{}\"", value))
    } else if !multiline && !value.contains('\'') {
        Ok(format!("'{}'", value))
    } else if !value.contains(r#"""""#) && !value.ends_with('"') {
        Ok(format!(r#""""{}""""#, value))
    } else if !value.contains("'''") && !value.ends_with('\'') {
        Ok(format!("'''{}'''", value))
    } else {
        Err(TermgridError::Unquotable(value.to_string()))
    }
}

struct QuotedNode<'a> {
    id: &'a str,
    node_type: NodeType,
    parent: String,
    command: Option<String>,
}

/// Render the complete `[layouts]` section holding one layout.
///
/// # Errors
///
/// Returns [`TermgridError::Unquotable`] if a command cannot be quoted.
pub fn render_layouts_section(name: &str, layout: &Layout) -> Result<String> {
    let nodes = layout
        .iter()
        .map(|node| -> Result<QuotedNode<'_>> {
            Ok(QuotedNode {
                id: &node.id,
                node_type: node.node_type,
                parent: quote_value(&node.parent)?,
                command: node.command.as_deref().map(quote_value).transpose()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_layouts_section(&mut out, name, &nodes);
    Ok(out)
}

fn write_layouts_section(out: &mut String, name: &str, nodes: &[QuotedNode<'_>]) -> fmt::Result {
    writeln!(out, "[{}]", LAYOUTS)?;
    writeln!(out, "  [[{}]]", name)?;
    for node in nodes {
        writeln!(out, "    [[[{}]]]", node.id)?;
        writeln!(out, "      type = {}", node.node_type)?;
        writeln!(out, "      parent = {}", node.parent)?;
        if let Some(command) = &node.command {
            writeln!(out, "      command = {}", command)?;
        }
    }
    Ok(())
}

/// Parse a ConfigObj section header into (depth, name).
///
/// Accepts spaces inside the brackets, a quoted name and a trailing
/// `#` comment, e.g. `[ layouts ]  # mine`.
fn section_header(line: &str) -> Option<(usize, &str)> {
    let mut rest = line.trim_start();
    let mut depth = 0;
    while let Some(after) = rest.strip_prefix('[') {
        depth += 1;
        rest = after.trim_start();
    }
    if depth == 0 {
        return None;
    }

    let close = rest.find(']')?;
    let name = rest[..close].trim();
    let mut tail = &rest[close..];
    let mut closing = 0;
    while let Some(after) = tail.strip_prefix(']') {
        closing += 1;
        tail = after.trim_start();
    }

    if closing != depth || name.is_empty() || !(tail.is_empty() || tail.starts_with('#')) {
        return None;
    }

    let name = ['"', '\'']
        .iter()
        .find_map(|q| name.strip_prefix(*q).and_then(|n| n.strip_suffix(*q)))
        .map_or(name, str::trim);
    Some((depth, name))
}

/// Replace the top-level `[layouts]` section of `base` with `section`.
///
/// Every other section is copied through untouched. If `base` has no
/// `[layouts]` section, `section` is appended.
pub fn merge_into(base: &str, section: &str) -> String {
    let mut out = String::with_capacity(base.len() + section.len());
    let mut skipping = false;
    let mut inserted = false;

    for line in base.lines() {
        if let Some((1, name)) = section_header(line) {
            skipping = name == LAYOUTS;
            if skipping && !inserted {
                out.push_str(section);
                inserted = true;
            }
        }
        if !skipping {
            out.push_str(line);
            out.push('\n');
        }
    }

    if !inserted {
        out.push_str(section);
    }
    out
}

/// Render a full config: `base` (or [`SKELETON`]) with the layout merged in.
///
/// # Errors
///
/// Returns [`TermgridError::Unquotable`] if a command cannot be quoted.
pub fn render_document(base: Option<&str>, name: &str, layout: &Layout) -> Result<String> {
    let section = render_layouts_section(name, layout)?;
    Ok(merge_into(base.unwrap_or(SKELETON), &section))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{build, Cells};

    fn layout(commands: &[&str]) -> Layout {
        build(&Cells::new(commands.iter().map(|s| s.to_string()).collect()).unwrap())
    }

    #[test]
    fn test_quote_value() {
        assert_eq!(quote_value("").unwrap(), "\"\"");
        assert_eq!(quote_value("ssh a, b").unwrap(), "\"ssh a, b\"");
        assert_eq!(quote_value("echo 'hi'").unwrap(), "\"echo 'hi'\"");
        assert_eq!(quote_value("say \"hi\"").unwrap(), "'say \"hi\"'");
        assert_eq!(
            quote_value(r#"say "it's" now"#).unwrap(),
            r#""""say "it's" now""""#
        );
    }

    #[test]
    fn test_quote_value_ending_in_double_quote() {
        assert_eq!(
            quote_value(r#"bash -c "echo it's""#).unwrap(),
            r#"'''bash -c "echo it's"'''"#
        );
    }

    #[test]
    fn test_quote_value_multiline() {
        assert_eq!(quote_value("a\nb").unwrap(), "\"\"\"a\nb\"\"\"");
    }

    #[test]
    fn test_quote_value_impossible() {
        let value = r#"a """ b ''' c"#;
        assert!(matches!(
            quote_value(value),
            Err(TermgridError::Unquotable(v)) if v == value
        ));
    }

    #[test]
    fn test_unquotable_command_fails_render() {
        let result = render_layouts_section("l", &layout(&[r#"a """ b'"#]));
        assert!(matches!(result, Err(TermgridError::Unquotable(_))));
    }

    #[test]
    fn test_render_single_terminal() {
        let section = render_layouts_section("cluster", &layout(&["ssh web1"])).unwrap();
        assert_eq!(
            section,
            "[layouts]\n\
             \x20 [[cluster]]\n\
             \x20   [[[child0]]]\n\
             \x20     type = Window\n\
             \x20     parent = \"\"\n\
             \x20   [[[child1]]]\n\
             \x20     type = Terminal\n\
             \x20     parent = \"child0\"\n\
             \x20     command = \"ssh web1\"\n"
        );
    }

    #[test]
    fn test_render_split_has_no_command() {
        let section = render_layouts_section("l", &layout(&["a", "b", "c"])).unwrap();
        assert!(section.contains("[[[child2]]]\n      type = VPaned\n      parent = \"child1\"\n    [[[child3]]]"));
        assert_eq!(section.matches("command = ").count(), 3);
    }

    #[test]
    fn test_section_header() {
        assert_eq!(section_header("[layouts]"), Some((1, "layouts")));
        assert_eq!(section_header("  [[default]]"), Some((2, "default")));
        assert_eq!(section_header("[ layouts ]  # mine"), Some((1, "layouts")));
        assert_eq!(section_header("[ [ child1 ] ]"), Some((2, "child1")));
        assert_eq!(section_header("[\"layouts\"]"), Some((1, "layouts")));
        assert_eq!(section_header("type = Window"), None);
        assert_eq!(section_header("[[unbalanced]"), None);
        assert_eq!(section_header("[layouts] trailing"), None);
    }

    #[test]
    fn test_merge_replaces_existing_layouts() {
        let base = "\
[global_config]
  title_hide_sizetext = True
[layouts]
  [[default]]
    [[[child1]]]
      type = Terminal
[plugins]
";
        let merged = merge_into(base, "[layouts]\n  [[new]]\n");
        assert_eq!(
            merged,
            "\
[global_config]
  title_hide_sizetext = True
[layouts]
  [[new]]
[plugins]
"
        );
    }

    #[test]
    fn test_merge_replaces_commented_header() {
        let base = "[global_config]\n[layouts]  # mine\n  [[default]]\n[plugins]\n";
        let merged = merge_into(base, "[layouts]\n  [[new]]\n");
        assert_eq!(merged, "[global_config]\n[layouts]\n  [[new]]\n[plugins]\n");
    }

    #[test]
    fn test_merge_replaces_spaced_header() {
        let base = "[ layouts ]\n  [[default]]\n[ plugins ]\n";
        let merged = merge_into(base, "[layouts]\n  [[new]]\n");
        assert_eq!(merged, "[layouts]\n  [[new]]\n[ plugins ]\n");
        assert!(!merged.contains("[[default]]"));
    }

    #[test]
    fn test_merge_appends_when_missing() {
        let merged = merge_into("[profiles]\n  [[default]]\n", "[layouts]\n  [[new]]\n");
        assert_eq!(merged, "[profiles]\n  [[default]]\n[layouts]\n  [[new]]\n");
    }

    #[test]
    fn test_render_document_uses_skeleton() {
        let doc = render_document(None, "termgrid", &layout(&["zsh"])).unwrap();
        let layouts = doc.find("[layouts]").unwrap();
        assert!(doc.find("[profiles]").unwrap() < layouts);
        assert!(doc.find("[[termgrid]]").unwrap() > layouts);
        assert!(doc.ends_with("[plugins]\n"));
        assert_eq!(doc.matches("[layouts]").count(), 1);
    }
}
