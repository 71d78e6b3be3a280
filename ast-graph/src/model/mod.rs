//! Plain data model: declarations parsed from a source file and the
//! node/edge tree they render into.

pub mod declarations;
pub mod file;
pub mod graph;
