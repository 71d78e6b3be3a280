//! Artifact writers: DOT, GraphML and the batch `summary.json`.

pub mod dot;
pub mod graphml;
pub mod save_all;
