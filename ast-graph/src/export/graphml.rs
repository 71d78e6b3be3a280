//! GraphML exporter for Gephi, yEd and similar tools.
//!
//! Nodes are flattened to `label` + `kind`, edges carry their label. Node ids
//! follow the DOT exporter (`n0..nN-1`) for easy cross-checking.

use crate::graph::AstGraph;
use std::io::{self, Write};

pub fn write_graphml<W: Write>(w: &mut W, graph_name: &str, graph: &AstGraph) -> io::Result<()> {
    writeln!(w, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        w,
        r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns
     http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#
    )?;

    // Node keys
    writeln!(
        w,
        r#"<key id="d0" for="node" attr.name="label" attr.type="string"/>"#
    )?;
    writeln!(
        w,
        r#"<key id="d1" for="node" attr.name="kind" attr.type="string"/>"#
    )?;
    // Edge key
    writeln!(
        w,
        r#"<key id="e0" for="edge" attr.name="label" attr.type="string"/>"#
    )?;

    writeln!(
        w,
        r#"<graph id="{}" edgedefault="directed">"#,
        xml_escape(graph_name)
    )?;

    for nidx in graph.node_indices() {
        let n = &graph[nidx];
        writeln!(w, r#"<node id="n{}">"#, nidx.index())?;
        writeln!(w, r#"  <data key="d0">{}</data>"#, xml_escape(&n.label))?;
        writeln!(w, r#"  <data key="d1">{}</data>"#, n.kind)?;
        writeln!(w, r#"</node>"#)?;
    }

    for (i, eidx) in graph.edge_indices().enumerate() {
        let Some((src, dst)) = graph.edge_endpoints(eidx) else {
            continue;
        };
        writeln!(
            w,
            r#"<edge id="e{}" source="n{}" target="n{}">"#,
            i,
            src.index(),
            dst.index()
        )?;
        writeln!(w, r#"  <data key="e0">{}</data>"#, graph[eidx])?;
        writeln!(w, r#"</edge>"#)?;
    }

    writeln!(w, r#"</graph>"#)?;
    writeln!(w, r#"</graphml>"#)?;
    Ok(())
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
