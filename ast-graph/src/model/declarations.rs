//! Declaration entities produced by the segmenter, class extractor and body parser.
//!
//! Every entity is exclusively owned by its parent container. Rendering goes
//! through the borrowed [`Declaration`] view so each variant is handled by one
//! exhaustive match instead of per-type graph code.

use crate::model::graph::{GraphEdgeLabel, GraphNode, NodeKind, NodeTree};
use serde::{Deserialize, Serialize};

/// Label used for conditional nodes.
pub const CONDITIONAL_LABEL: &str = "if";
/// Label used for body nodes.
pub const BODY_LABEL: &str = "body";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDeclaration {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticImportDeclaration {
    pub name: String,
}

/// Raw condition text of a conditional construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub text: String,
}

/// Raw body text plus the conditionals discovered inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Starts at the opening `{` when produced by the class or conditional splitter.
    pub text: String,
    pub conditionals: Vec<Conditional>,
}

/// An `if`-like construct: `condition` is the text between the first `(` and
/// the first `)`, `body` runs from the following `{` to the end of the span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditional {
    pub condition: Expression,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    /// Text between the class keyword and the first `{`, leading whitespace removed.
    pub name: String,
    /// Modifier and annotation tokens in source order.
    pub modifiers: Vec<String>,
    pub body: Body,
}

/// Borrowed view over any renderable entity.
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Package(&'a PackageDeclaration),
    Import(&'a ImportDeclaration),
    StaticImport(&'a StaticImportDeclaration),
    Class(&'a ClassDeclaration),
    Conditional(&'a Conditional),
}

impl Declaration<'_> {
    /// The single graph node representing this declaration.
    pub fn node(&self) -> GraphNode {
        match self {
            Declaration::Package(p) => GraphNode::new(NodeKind::Package, p.name.as_str()),
            Declaration::Import(i) => GraphNode::new(NodeKind::Import, i.name.as_str()),
            Declaration::StaticImport(i) => {
                GraphNode::new(NodeKind::StaticImport, i.name.as_str())
            }
            Declaration::Class(c) => GraphNode::new(NodeKind::Class, c.name.trim()),
            Declaration::Conditional(_) => GraphNode::new(NodeKind::Conditional, CONDITIONAL_LABEL),
        }
    }

    /// The node plus everything reachable below it.
    pub fn render(&self) -> NodeTree {
        let tree = NodeTree::leaf(self.node());
        match self {
            Declaration::Package(_) | Declaration::Import(_) | Declaration::StaticImport(_) => {
                tree
            }
            Declaration::Class(c) => tree.with_child(GraphEdgeLabel::Body, c.body.render()),
            Declaration::Conditional(c) => tree
                .with_child(GraphEdgeLabel::Condition, c.condition.render())
                .with_child(GraphEdgeLabel::Body, c.body.render()),
        }
    }
}

impl Expression {
    pub fn render(&self) -> NodeTree {
        NodeTree::leaf(GraphNode::new(NodeKind::Condition, self.text.trim()))
    }
}

impl Body {
    pub fn render(&self) -> NodeTree {
        self.conditionals.iter().fold(
            NodeTree::leaf(GraphNode::new(NodeKind::Body, BODY_LABEL)),
            |tree, c| tree.with_child(GraphEdgeLabel::Declares, Declaration::Conditional(c).render()),
        )
    }
}
