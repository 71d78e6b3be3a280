//! Batch summary: per-file outcomes plus totals, serialized to `summary.json`.
//!
//! Field names are lowercase with underscores and kept stable so the file is
//! easy to query downstream.

use crate::config::model::AstGraphConfig;
use crate::graph::AstGraph;
use crate::model::{declarations::Body, file::SourceTree};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Declaration and graph counters for one written file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCounts {
    pub packages: usize,
    pub imports: usize,
    pub static_imports: usize,
    pub classes: usize,
    /// All conditionals, nested ones included.
    pub conditionals: usize,
    pub graph_nodes: usize,
    pub graph_edges: usize,
}

impl FileCounts {
    pub fn from_tree(tree: &SourceTree, graph: &AstGraph) -> Self {
        Self {
            packages: tree.packages.len(),
            imports: tree.imports.len(),
            static_imports: tree.static_imports.len(),
            classes: tree.classes.len(),
            conditionals: tree.classes.iter().map(|c| count_conditionals(&c.body)).sum(),
            graph_nodes: graph.node_count(),
            graph_edges: graph.edge_count(),
        }
    }
}

fn count_conditionals(body: &Body) -> usize {
    body.conditionals
        .iter()
        .map(|c| 1 + count_conditionals(&c.body))
        .sum()
}

/// Result of processing one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Written {
        source: String,
        artifact: String,
        counts: FileCounts,
    },
    Failed {
        source: String,
        /// Short failure kind, see [`crate::AstGraphError::kind`].
        kind: String,
        message: String,
    },
    Skipped {
        source: String,
        reason: String,
    },
}

impl FileOutcome {
    pub fn source(&self) -> &str {
        match self {
            FileOutcome::Written { source, .. }
            | FileOutcome::Failed { source, .. }
            | FileOutcome::Skipped { source, .. } => source,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub files: usize,
    pub written: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Summary of one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// RFC 3339 UTC timestamp when the report was produced.
    pub generated_at: String,
    pub input_dir: String,
    pub output_dir: String,
    pub format: String,
    pub totals: Totals,
    /// One entry per discovered file, in input order.
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn new(cfg: &AstGraphConfig, outcomes: Vec<FileOutcome>) -> Self {
        let mut totals = Totals {
            files: outcomes.len(),
            ..Totals::default()
        };
        for o in &outcomes {
            match o {
                FileOutcome::Written { .. } => totals.written += 1,
                FileOutcome::Failed { .. } => totals.failed += 1,
                FileOutcome::Skipped { .. } => totals.skipped += 1,
            }
        }

        Self {
            generated_at: Utc::now().to_rfc3339(),
            input_dir: cfg.paths.input_dir.to_string_lossy().into_owned(),
            output_dir: cfg.paths.output_dir.to_string_lossy().into_owned(),
            format: cfg.output.format.to_string(),
            totals,
            outcomes,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_source;
    use crate::graph::build_graph;

    #[test]
    fn counts_include_nested_conditionals() {
        let tree = parse_source(
            "A.java",
            "import static x.Y.z; class A { if (a) { if (b) { } } if (c) { } }",
        )
        .unwrap();
        let graph = build_graph(&tree.render());
        let counts = FileCounts::from_tree(&tree, &graph);
        assert_eq!(counts.static_imports, 1);
        assert_eq!(counts.classes, 1);
        assert_eq!(counts.conditionals, 3);
        assert_eq!(counts.graph_edges, counts.graph_nodes - 1);
    }

    #[test]
    fn totals_follow_outcomes() {
        let report = BatchReport::new(
            &AstGraphConfig::default(),
            vec![
                FileOutcome::Skipped {
                    source: "Big.java".into(),
                    reason: "too big".into(),
                },
                FileOutcome::Failed {
                    source: "Bad.java".into(),
                    kind: "structural".into(),
                    message: "no `{`".into(),
                },
            ],
        );
        assert_eq!(report.totals.files, 2);
        assert_eq!(report.totals.failed, 1);
        assert_eq!(report.totals.skipped, 1);
        assert_eq!(report.failures().count(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcomes"][1]["status"], "failed");
        assert_eq!(json["format"], "dot");
    }
}
