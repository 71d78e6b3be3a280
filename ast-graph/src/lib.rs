//! Structural graphs for curly-brace, semicolon-terminated source files.
//!
//! The pipeline is a chain of pure text transformations:
//!
//! ```text
//! source text
//!     │
//!     ├──> Segmenter            split on `;`, classify package/import/static/other
//!     ├──> Class extractor      cut at `class` and `}}`, reattach modifiers
//!     ├──> Body parser          nested `if` constructs, recursively
//!     │
//!     ├──> SourceTree::render   File → Package/Import/Import Static/Classes
//!     ├──> build_graph          petgraph `Graph<GraphNode, GraphEdgeLabel>`
//!     └──> export               DOT / GraphML artifact + summary.json
//! ```
//!
//! The delimiter rules are heuristics, not a grammar: well-formed
//! conventional sources are modelled, unusual ones may be modelled wrongly
//! without an error, and a missing delimiter fails that one file only.

pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod graph;
pub mod model;
pub mod run;

pub use crate::core::{parse_source, parse_source_with_limit};
pub use config::model::{AstGraphConfig, OutputFormat};
pub use errors::{AstGraphError, Result, StructuralError};
pub use graph::{AstGraph, build_graph};
pub use model::file::SourceTree;
pub use run::{parse_sources, run_batch};
