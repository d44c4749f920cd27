//! Recursive split layout construction.
//!
//! Turns an ordered list of resolved commands into a tree of Terminator
//! layout nodes. Every layout has a single `Window` root (`child0`); below
//! it, cells are partitioned into horizontal and vertical splits:
//!
//! | cells | shape                                                        |
//! |-------|--------------------------------------------------------------|
//! | 1     | a single terminal                                            |
//! | 2     | one `HPaned` holding two terminals                           |
//! | 3     | `HPaned` holding a `VPaned` (first cell) and two terminals   |
//! | 4     | `HPaned` holding two `VPaned`s with two terminals each       |
//! | > 4   | `HPaned` holding both recursively split halves               |
//!
//! Node ids are handed out by a counter owned by [`LayoutBuilder`] in the
//! exact order nodes are created (depth first), so the resulting ids are
//! stable for a given input.
//!
//! # Example
//!
//! ```
//! use termgrid::layout::{build, Cells, NodeType};
//!
//! let cells = Cells::new(vec!["ssh web1".into(), "ssh web2".into()]).unwrap();
//! let layout = build(&cells);
//!
//! assert_eq!(layout.len(), 4);
//! assert_eq!(layout.get("child1").unwrap().node_type, NodeType::HPaned);
//! assert_eq!(layout.terminal_commands(), vec!["ssh web1", "ssh web2"]);
//! ```

use crate::error::{Result, TermgridError};
use indexmap::IndexMap;
use std::fmt;

/// Node kinds understood by Terminator's layout loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Top-level window; always the root.
    Window,
    /// Horizontal split container.
    HPaned,
    /// Vertical split container.
    VPaned,
    /// Leaf pane running one command.
    Terminal,
}

impl NodeType {
    /// The tag written to the `type` key of the config.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Window => "Window",
            NodeType::HPaned => "HPaned",
            NodeType::VPaned => "VPaned",
            NodeType::Terminal => "Terminal",
        }
    }

    /// Whether this node can hold children.
    pub fn is_container(&self) -> bool {
        !matches!(self, NodeType::Terminal)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique id (`child0`, `child1`, ...).
    pub id: String,
    /// Node kind.
    pub node_type: NodeType,
    /// Id of the owning node, empty for the root window.
    pub parent: String,
    /// Command to run; only set on terminals.
    pub command: Option<String>,
}

/// An ordered, non-empty list of resolved commands, one per pane.
///
/// This is the only way to feed the builder, so an empty layout request is
/// rejected here rather than inside the partitioning code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cells(Vec<String>);

impl Cells {
    /// Wrap a list of commands.
    ///
    /// # Errors
    ///
    /// Returns [`TermgridError::NoCells`] if `commands` is empty.
    pub fn new(commands: Vec<String>) -> Result<Self> {
        if commands.is_empty() {
            return Err(TermgridError::NoCells);
        }
        Ok(Cells(commands))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// A finished layout: nodes keyed by id, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    nodes: IndexMap<String, Node>,
}

impl Layout {
    /// Number of nodes, including the root window.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The root window.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first().map(|(_, node)| node)
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Direct children of `id`, in creation order.
    pub fn children<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Node> {
        self.nodes.values().filter(move |node| node.parent == id)
    }

    /// Terminal commands in leftmost-first, depth-first order.
    ///
    /// For every layout produced by [`LayoutBuilder`] this equals the input
    /// cells in their original order.
    pub fn terminal_commands(&self) -> Vec<&str> {
        let mut out = Vec::new();
        if let Some(root) = self.root() {
            self.collect_commands(&root.id, &mut out);
        }
        out
    }

    fn collect_commands<'a>(&'a self, id: &str, out: &mut Vec<&'a str>) {
        for child in self.children(id) {
            match &child.command {
                Some(cmd) => out.push(cmd),
                None => self.collect_commands(&child.id, out),
            }
        }
    }
}

/// Builds a [`Layout`] from [`Cells`].
///
/// The builder owns the id counter, so each builder produces exactly one
/// layout and two builders never share ids.
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    next_id: usize,
    nodes: IndexMap<String, Node>,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the root window and partition `cells` beneath it.
    pub fn build(mut self, cells: &Cells) -> Layout {
        let root = self.add(NodeType::Window, "", None);
        self.split(&root, cells.as_slice());
        tracing::debug!(
            cells = cells.len(),
            nodes = self.nodes.len(),
            "built layout"
        );
        Layout { nodes: self.nodes }
    }

    fn allocate_id(&mut self) -> String {
        let id = format!("child{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn add(&mut self, node_type: NodeType, parent: &str, command: Option<String>) -> String {
        let id = self.allocate_id();
        self.nodes.insert(
            id.clone(),
            Node {
                id: id.clone(),
                node_type,
                parent: parent.to_string(),
                command,
            },
        );
        id
    }

    fn terminals(&mut self, parent: &str, cells: &[String]) {
        for cell in cells {
            self.add(NodeType::Terminal, parent, Some(cell.clone()));
        }
    }

    fn split(&mut self, parent: &str, cells: &[String]) {
        debug_assert!(!cells.is_empty(), "split called with no cells");

        // Upper half takes the extra cell when the count is odd.
        let split_index = cells.len().div_ceil(2);
        let (head, tail) = cells.split_at(split_index);

        match cells.len() {
            1 => self.terminals(parent, cells),
            2 => {
                let new_parent = self.add(NodeType::HPaned, parent, None);
                self.terminals(&new_parent, cells);
            }
            3 => {
                let new_parent = self.add(NodeType::HPaned, parent, None);
                let left_parent = self.add(NodeType::VPaned, &new_parent, None);
                self.terminals(&left_parent, head);
                self.terminals(&new_parent, tail);
            }
            4 => {
                let new_parent = self.add(NodeType::HPaned, parent, None);
                let left_parent = self.add(NodeType::VPaned, &new_parent, None);
                let right_parent = self.add(NodeType::VPaned, &new_parent, None);
                self.terminals(&left_parent, head);
                self.terminals(&right_parent, tail);
            }
            _ => {
                let new_parent = self.add(NodeType::HPaned, parent, None);
                self.split(&new_parent, head);
                self.split(&new_parent, tail);
            }
        }
    }
}

/// Build a layout with a fresh [`LayoutBuilder`].
pub fn build(cells: &Cells) -> Layout {
    LayoutBuilder::new().build(cells)
}
