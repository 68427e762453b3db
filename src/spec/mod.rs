//! Spec layer: JSON export shape + validated in-memory records.
//!
//! This module is intentionally separate from table reshaping and CSV output.
//! It owns:
//! - GraphExport (the `{ "nodes": [...], "edges": [...] }` document)
//! - NodeRecord / EdgeRecord (records whose required fields were checked)

pub mod export;

pub use export::{EdgeRecord, GraphExport, NodeRecord, ValidatedExport};

/// Required node attributes.
pub const NODE_ID: &str = "ID";
pub const NODE_TYPE: &str = "TYPE";

/// Required edge attributes.
pub const EDGE_OUT: &str = "outV";
pub const EDGE_IN: &str = "inV";
pub const EDGE_TYPE: &str = "TYPE";
