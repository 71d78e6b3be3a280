//! Rendered tree → petgraph graph.
//!
//! Every tree node becomes its own vertex, so equal labels (two `if` nodes,
//! two identical imports) never collapse into one.

use crate::model::graph::{GraphEdgeLabel, GraphNode, NodeTree};
use petgraph::graph::{Graph, NodeIndex};
use tracing::debug;

pub type AstGraph = Graph<GraphNode, GraphEdgeLabel>;

/// Build a directed graph from `tree`; the root is always node index 0.
pub fn build_graph(tree: &NodeTree) -> AstGraph {
    let mut g = AstGraph::with_capacity(tree.node_count(), tree.node_count());
    let root = g.add_node(tree.node.clone());

    let mut stack: Vec<(NodeIndex, &NodeTree)> = vec![(root, tree)];
    while let Some((parent, subtree)) = stack.pop() {
        for (label, child) in &subtree.children {
            let idx = g.add_node(child.node.clone());
            g.add_edge(parent, idx, *label);
            stack.push((idx, child));
        }
    }

    debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        "graph: built"
    );
    g
}
