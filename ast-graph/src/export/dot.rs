//! Graphviz DOT exporter.
//!
//! Nodes get positional ids (`n0..nN-1`) and carry their text as `label`, so
//! duplicate labels stay distinct vertices.

use crate::graph::AstGraph;
use std::io::{self, Write};

/// Write `graph` as a `digraph` named after the source file.
pub fn write_dot<W: Write>(w: &mut W, graph_name: &str, graph: &AstGraph) -> io::Result<()> {
    writeln!(w, "digraph \"{}\" {{", escape(graph_name))?;
    for nidx in graph.node_indices() {
        let n = &graph[nidx];
        writeln!(
            w,
            "  n{} [label=\"{}\", kind=\"{}\"];",
            nidx.index(),
            escape(&n.label),
            n.kind
        )?;
    }
    for eidx in graph.edge_indices() {
        let Some((src, dst)) = graph.edge_endpoints(eidx) else {
            continue;
        };
        writeln!(
            w,
            "  n{} -> n{} [label=\"{}\"];",
            src.index(),
            dst.index(),
            graph[eidx]
        )?;
    }
    writeln!(w, "}}")?;
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
