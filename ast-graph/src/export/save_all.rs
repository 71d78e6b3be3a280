//! Persist artifacts into the output directory.
//!
//! Layout:
//!   output_dir/
//!     AST_<stem>.dot | AST_<stem>.graphml   (one per source file)
//!     summary.json

use crate::{
    config::model::{AstGraphConfig, OutputFormat},
    core::summary::BatchReport,
    errors::Result,
    export::{dot::write_dot, graphml::write_graphml},
    graph::AstGraph,
};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

pub const SUMMARY_FILE: &str = "summary.json";

/// Write the graph of `source_name` in the configured format and return the
/// artifact path. A partially written artifact is removed on failure.
pub fn persist_graph(
    out_dir: &Path,
    cfg: &AstGraphConfig,
    source_name: &str,
    graph: &AstGraph,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(cfg.artifact_name(source_name));

    let written = write_graph_file(&path, cfg.output.format, source_name, graph);
    if written.is_err() {
        let _ = fs::remove_file(&path);
    }
    written?;

    debug!("persist: wrote -> {}", path.display());
    Ok(path)
}

/// Remove an artifact left for `source_name` by an earlier run, so a file
/// that fails now has no artifact.
pub fn discard_artifact(out_dir: &Path, cfg: &AstGraphConfig, source_name: &str) {
    let path = out_dir.join(cfg.artifact_name(source_name));
    match fs::remove_file(&path) {
        Ok(()) => debug!("persist: removed stale -> {}", path.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %path.display(), error = %err, "persist: stale artifact kept"),
    }
}

fn write_graph_file(
    path: &Path,
    format: OutputFormat,
    source_name: &str,
    graph: &AstGraph,
) -> std::io::Result<()> {
    let mut w = BufWriter::new(fs::File::create(path)?);
    match format {
        OutputFormat::Dot => write_dot(&mut w, source_name, graph)?,
        OutputFormat::Graphml => write_graphml(&mut w, source_name, graph)?,
    }
    w.flush()
}

/// Write `summary.json` (pretty) into `out_dir`.
pub fn persist_summary(out_dir: &Path, report: &BatchReport) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(SUMMARY_FILE);
    let w = BufWriter::new(fs::File::create(&path)?);
    serde_json::to_writer_pretty(w, report)?;
    info!("persist: summary -> {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_source;
    use crate::graph::build_graph;

    #[test]
    fn artifact_is_named_after_source() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ASTs");
        let tree = parse_source("Foo.java", "class Foo { }").unwrap();
        let graph = build_graph(&tree.render());

        let mut cfg = AstGraphConfig::default();
        let dot = persist_graph(&out, &cfg, "Foo.java", &graph).unwrap();
        assert_eq!(dot, out.join("AST_Foo.dot"));
        assert!(fs::read_to_string(&dot).unwrap().starts_with("digraph"));

        cfg.output.format = OutputFormat::Graphml;
        let xml = persist_graph(&out, &cfg, "Foo.java", &graph).unwrap();
        assert_eq!(xml, out.join("AST_Foo.graphml"));
        assert!(fs::read_to_string(&xml).unwrap().contains("<graphml"));
    }

    #[test]
    fn discarding_a_missing_artifact_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AstGraphConfig::default();
        let stale = dir.path().join("AST_Old.dot");
        fs::write(&stale, "digraph {}").unwrap();

        discard_artifact(dir.path(), &cfg, "Old.java");
        assert!(!stale.exists());
        discard_artifact(dir.path(), &cfg, "Old.java");
        discard_artifact(&dir.path().join("absent"), &cfg, "Old.java");
    }
}
