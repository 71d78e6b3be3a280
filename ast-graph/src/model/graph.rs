//! Graph-related types shared by the renderer, the graph builder and exporters.
//!
//! Node kinds and edge labels serialize to snake_case strings so exported
//! artifacts stay stable and grep-friendly.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Coarse node kind. Avoid renaming variants, they appear in exported artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    File,
    Category,
    Package,
    Import,
    StaticImport,
    Class,
    Body,
    Conditional,
    Condition,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use NodeKind::*;
        let s = match self {
            File => "file",
            Category => "category",
            Package => "package",
            Import => "import",
            StaticImport => "static_import",
            Class => "class",
            Body => "body",
            Conditional => "conditional",
            Condition => "condition",
        };
        f.write_str(s)
    }
}

/// Edge label between a parent node and one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphEdgeLabel {
    /// File → category node.
    Category,
    /// Category or body → declaration it contains.
    Declares,
    /// Class or conditional → its body.
    Body,
    /// Conditional → its condition expression.
    Condition,
}

impl Display for GraphEdgeLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use GraphEdgeLabel::*;
        let s = match self {
            Category => "category",
            Declares => "declares",
            Body => "body",
            Condition => "condition",
        };
        f.write_str(s)
    }
}

/// A single rendered graph vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub kind: NodeKind,
    pub label: String,
}

impl GraphNode {
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}

/// Owned node/edge tree handed from the declaration model to the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTree {
    pub node: GraphNode,
    pub children: Vec<(GraphEdgeLabel, NodeTree)>,
}

impl NodeTree {
    pub fn leaf(node: GraphNode) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, label: GraphEdgeLabel, child: NodeTree) -> Self {
        self.children.push((label, child));
        self
    }

    /// Children reached through `label`, in insertion order.
    pub fn children_by(&self, label: GraphEdgeLabel) -> impl Iterator<Item = &NodeTree> {
        self.children
            .iter()
            .filter(move |(l, _)| *l == label)
            .map(|(_, c)| c)
    }

    /// First direct child whose label equals `label`.
    pub fn child_labeled(&self, label: &str) -> Option<&NodeTree> {
        self.children
            .iter()
            .map(|(_, c)| c)
            .find(|c| c.node.label == label)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, c)| c.node_count())
            .sum::<usize>()
    }
}
