//! Input discovery: source files directly inside the input directory.

use crate::config::model::AstGraphConfig;
use crate::errors::{AstGraphError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name without directories, e.g. `Foo.java`.
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub files: Vec<SourceFile>,
    /// Files over `max_file_bytes`, with their size.
    pub too_big: Vec<SourceFile>,
}

/// List files in `dir` (non-recursive) with the configured source extension,
/// sorted by name.
pub fn scan_sources(dir: &Path, cfg: &AstGraphConfig) -> Result<ScanResult> {
    if !dir.is_dir() {
        return Err(AstGraphError::Config(format!(
            "input directory does not exist: {}",
            dir.display()
        )));
    }

    let ignore = build_globset(&cfg.filters.ignore_globs);
    let mut out = ScanResult::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.map_err(|err| warn!("fs_scan: {err}")).ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_extension(path, &cfg.naming.source_extension) {
            continue;
        }
        if ignore.as_ref().is_some_and(|gs| gs.is_match(path)) {
            debug!("fs_scan: ignore (glob) {}", path.display());
            continue;
        }

        let size = match entry.metadata() {
            Ok(m) => m.len(),
            Err(err) => {
                warn!("fs_scan: metadata failed for {}: {}", path.display(), err);
                continue;
            }
        };
        let file = SourceFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: path.to_path_buf(),
            size,
        };

        if size > cfg.limits.max_file_bytes {
            debug!(
                "fs_scan: skip (size {} > max {}) {}",
                size,
                cfg.limits.max_file_bytes,
                path.display()
            );
            out.too_big.push(file);
        } else {
            out.files.push(file);
        }
    }

    info!(
        "fs_scan: done, files={} (too_big={})",
        out.files.len(),
        out.too_big.len()
    );
    Ok(out)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn build_globset(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        match Glob::new(pat) {
            Ok(g) => {
                builder.add(g);
            }
            Err(err) => warn!("fs_scan: bad glob {pat:?}: {err}"),
        }
    }
    builder.build().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_only_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("B.java"), "class B { }").unwrap();
        fs::write(dir.path().join("A.java"), "class A { }").unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/C.java"), "class C { }").unwrap();

        let scan = scan_sources(dir.path(), &AstGraphConfig::default()).unwrap();
        let names: Vec<_> = scan.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A.java", "B.java"]);
    }

    #[test]
    fn oversized_and_ignored_files_are_set_aside() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Big.java"), "class Big { int a; int b; }").unwrap();
        fs::write(dir.path().join("Gen.java"), "class Gen { }").unwrap();
        fs::write(dir.path().join("Ok.java"), "class Ok { }").unwrap();

        let mut cfg = AstGraphConfig::default();
        cfg.limits.max_file_bytes = 16;
        cfg.filters.ignore_globs = vec!["**/Gen.java".to_string()];

        let scan = scan_sources(dir.path(), &cfg).unwrap();
        assert_eq!(scan.files.len(), 1);
        assert_eq!(scan.files[0].name, "Ok.java");
        assert_eq!(scan.too_big.len(), 1);
        assert_eq!(scan.too_big[0].name, "Big.java");
    }

    #[test]
    fn missing_directory_is_a_config_error() {
        let err = scan_sources(Path::new("/definitely/not/here"), &AstGraphConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), "config");
    }
}
