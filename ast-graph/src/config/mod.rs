//! Configuration loader.
//!
//! Order: defaults → YAML file named by `AST_GRAPH_CONFIG` (if set) →
//! individual `AST_GRAPH_*` environment overrides → validation.

pub mod model;

use crate::config::model::{AstGraphConfig, OutputFormat};
use crate::errors::{AstGraphError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_FILE_ENV: &str = "AST_GRAPH_CONFIG";
pub const INPUT_DIR_ENV: &str = "AST_GRAPH_INPUT_DIR";
pub const OUTPUT_DIR_ENV: &str = "AST_GRAPH_OUTPUT_DIR";
pub const FORMAT_ENV: &str = "AST_GRAPH_FORMAT";
pub const PARALLEL_ENV: &str = "AST_GRAPH_PARALLEL";
pub const MAX_FILE_BYTES_ENV: &str = "AST_GRAPH_MAX_FILE_BYTES";
pub const MAX_NESTING_ENV: &str = "AST_GRAPH_MAX_NESTING";

/// Load [`AstGraphConfig`] from the process environment.
pub fn load_from_env_or_default() -> Result<AstGraphConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Same as [`load_from_env_or_default`] with an explicit variable lookup.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<AstGraphConfig> {
    let mut cfg = match lookup(CONFIG_FILE_ENV) {
        Some(path) => {
            info!(path = %path, "config: loading file");
            load_yaml(Path::new(&path))?
        }
        None => AstGraphConfig::default(),
    };
    apply_overrides(&mut cfg, &lookup)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parse a YAML config file. Missing fields take their defaults.
pub fn load_yaml(path: &Path) -> Result<AstGraphConfig> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yml::from_str(&text)?)
}

fn apply_overrides(
    cfg: &mut AstGraphConfig,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(v) = lookup(INPUT_DIR_ENV) {
        cfg.paths.input_dir = PathBuf::from(v);
    }
    if let Some(v) = lookup(OUTPUT_DIR_ENV) {
        cfg.paths.output_dir = PathBuf::from(v);
    }
    if let Some(v) = lookup(FORMAT_ENV) {
        cfg.output.format = v.parse::<OutputFormat>()?;
    }
    if let Some(v) = lookup(PARALLEL_ENV) {
        cfg.run.parallel = v.eq_ignore_ascii_case("true") || v == "1";
    }
    if let Some(v) = lookup(MAX_FILE_BYTES_ENV) {
        cfg.limits.max_file_bytes = v.trim().parse().map_err(|_| {
            AstGraphError::Config(format!("{MAX_FILE_BYTES_ENV} is not a number: {v}"))
        })?;
    }
    if let Some(v) = lookup(MAX_NESTING_ENV) {
        cfg.limits.max_nesting = v.trim().parse().map_err(|_| {
            AstGraphError::Config(format!("{MAX_NESTING_ENV} is not a number: {v}"))
        })?;
    }
    Ok(())
}
