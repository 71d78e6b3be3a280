//! High-level orchestration for turning a directory of source files into
//! structural graphs.
//!
//! Each file goes through: read → segment → extract classes → parse bodies →
//! render → build graph → export. Files share nothing, so a failure in one is
//! recorded in the [`BatchReport`] and the batch moves on.

use crate::{
    config::model::AstGraphConfig,
    core::{
        fs_scan::{self, SourceFile},
        parse_source, parse_source_with_limit,
        summary::{BatchReport, FileCounts, FileOutcome},
    },
    errors::{AstGraphError, Result, StructuralError},
    export::save_all,
    graph::build_graph,
    model::file::SourceTree,
};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Main pipeline: process every source file of `cfg.paths.input_dir`.
///
/// # Steps:
/// 1. **Scan** the input directory (non-recursive) for source files.
/// 2. **Process** each file in isolation, sequentially or on the rayon pool.
/// 3. **Export** one graph artifact per successful file.
/// 4. **Summarize** outcomes into `summary.json` when enabled.
///
/// Only setup problems (missing input directory, unwritable summary) return
/// `Err`; per-file problems end up as [`FileOutcome::Failed`].
#[tracing::instrument(level = "info", skip_all, fields(input = %cfg.paths.input_dir.display()))]
pub fn run_batch(cfg: &AstGraphConfig) -> Result<BatchReport> {
    let input_dir = dunce::canonicalize(&cfg.paths.input_dir).map_err(|err| {
        AstGraphError::Config(format!(
            "input directory {}: {err}",
            cfg.paths.input_dir.display()
        ))
    })?;
    let out_dir = cfg.paths.output_dir.as_path();

    let scan = fs_scan::scan_sources(&input_dir, cfg)?;
    info!(files = scan.files.len(), "Scanned input directory");

    let mut outcomes: Vec<FileOutcome> = if cfg.run.parallel {
        scan.files
            .par_iter()
            .map(|f| process_file(f, out_dir, cfg))
            .collect()
    } else {
        scan.files
            .iter()
            .map(|f| process_file(f, out_dir, cfg))
            .collect()
    };
    outcomes.extend(scan.too_big.iter().map(|f| {
        save_all::discard_artifact(out_dir, cfg, &f.name);
        FileOutcome::Skipped {
            source: f.name.clone(),
            reason: format!(
                "file size {} exceeds max_file_bytes {}",
                f.size, cfg.limits.max_file_bytes
            ),
        }
    }));
    outcomes.sort_by(|a, b| a.source().cmp(b.source()));

    let report = BatchReport::new(cfg, outcomes);
    if cfg.output.write_summary {
        save_all::persist_summary(out_dir, &report)?;
    }

    info!(
        written = report.totals.written,
        failed = report.totals.failed,
        skipped = report.totals.skipped,
        "Batch finished"
    );
    Ok(report)
}

/// Process one file and capture any failure as an outcome.
pub fn process_file(file: &SourceFile, out_dir: &Path, cfg: &AstGraphConfig) -> FileOutcome {
    match convert_file(file, out_dir, cfg) {
        Ok((artifact, counts)) => {
            debug!(path = %file.path.display(), artifact = %artifact.display(), "Converted");
            FileOutcome::Written {
                source: file.name.clone(),
                artifact: artifact.to_string_lossy().into_owned(),
                counts,
            }
        }
        Err(err) => {
            warn!(path = %file.path.display(), kind = err.kind(), error = %err, "Failed to convert");
            save_all::discard_artifact(out_dir, cfg, &file.name);
            FileOutcome::Failed {
                source: file.name.clone(),
                kind: err.kind().to_string(),
                message: err.to_string(),
            }
        }
    }
}

fn convert_file(
    file: &SourceFile,
    out_dir: &Path,
    cfg: &AstGraphConfig,
) -> Result<(PathBuf, FileCounts)> {
    let text = fs::read_to_string(&file.path)?;
    let tree = parse_source_with_limit(&file.name, &text, cfg.limits.max_nesting)?;
    let graph = build_graph(&tree.render());
    let artifact = save_all::persist_graph(out_dir, cfg, &file.name, &graph)?;
    Ok((artifact, FileCounts::from_tree(&tree, &graph)))
}

/// In-memory variant over `(file name, full text)` pairs. Results keep input
/// order; one failing source does not affect the others.
pub fn parse_sources(
    sources: &[(String, String)],
    parallel: bool,
) -> Vec<std::result::Result<SourceTree, StructuralError>> {
    if parallel {
        sources
            .par_iter()
            .map(|(name, text)| parse_source(name, text))
            .collect()
    } else {
        sources
            .iter()
            .map(|(name, text)| parse_source(name, text))
            .collect()
    }
}
