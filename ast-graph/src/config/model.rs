//! Configuration data structures for the source → graph pipeline.
//!
//! Groups:
//! - [`AstGraphConfig`] — top-level container for all config groups
//! - [`Paths`]          — input and output directories
//! - [`Naming`]         — source extension and artifact naming
//! - [`OutputConfig`]   — artifact format and summary toggle
//! - [`Limits`]         — size caps
//! - [`Filters`]        — which files to skip
//! - [`RunConfig`]      — batch execution options
//!
//! All structs are `serde`-friendly and default every missing field, so a
//! YAML file only needs to name what it changes.

use crate::core::DEFAULT_MAX_NESTING;
use crate::errors::{AstGraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstGraphConfig {
    pub paths: Paths,
    pub naming: Naming,
    pub output: OutputConfig,
    pub limits: Limits,
    pub filters: Filters,
    pub run: RunConfig,
}

impl AstGraphConfig {
    /// Reject degenerate values.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_file_bytes == 0 {
            return Err(AstGraphError::Config(
                "`max_file_bytes` must be greater than 0".into(),
            ));
        }
        if self.limits.max_nesting == 0 {
            return Err(AstGraphError::Config(
                "`max_nesting` must be greater than 0".into(),
            ));
        }
        if self.naming.source_extension.trim().is_empty() {
            return Err(AstGraphError::Config(
                "`source_extension` must not be empty".into(),
            ));
        }
        if same_dir(&self.paths.input_dir, &self.paths.output_dir) {
            return Err(AstGraphError::Config(format!(
                "`output_dir` must differ from `input_dir` ({})",
                self.paths.input_dir.display()
            )));
        }
        Ok(())
    }

    /// Artifact file name for a source file: prefix + stem + format extension.
    ///
    /// `Foo.java` → `AST_Foo.dot` with the defaults.
    pub fn artifact_name(&self, source_name: &str) -> String {
        let suffix = format!(".{}", self.naming.source_extension);
        let stem = source_name.strip_suffix(&suffix).unwrap_or(source_name);
        format!(
            "{}{}.{}",
            self.naming.output_prefix,
            stem,
            self.output.format.extension()
        )
    }
}

/// Paths name the same directory, compared canonically when both exist.
fn same_dir(a: &Path, b: &Path) -> bool {
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => {
            let parts = |p: &Path| {
                p.components()
                    .filter(|c| !matches!(c, Component::CurDir))
                    .map(|c| c.as_os_str().to_owned())
                    .collect::<Vec<_>>()
            };
            parts(a) == parts(b)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("java"),
            output_dir: PathBuf::from("ASTs"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Naming {
    /// Extension (without dot) of the files to process.
    pub source_extension: String,
    pub output_prefix: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            source_extension: "java".into(),
            output_prefix: "AST_".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Dot,
    Graphml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Graphml => "graphml",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = AstGraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" => Ok(OutputFormat::Dot),
            "graphml" => Ok(OutputFormat::Graphml),
            other => Err(AstGraphError::Config(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Write `summary.json` next to the artifacts.
    pub write_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Dot,
            write_summary: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum source file size to parse (bytes).
    pub max_file_bytes: u64,
    /// Deepest accepted conditional nesting; deeper files fail.
    pub max_nesting: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_bytes: 2 * 1024 * 1024, // 2 MB
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    /// Glob patterns for source files to skip.
    pub ignore_globs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Process files on the rayon pool instead of one after another.
    pub parallel: bool,
}
