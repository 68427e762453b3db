//! Graph export document (export.json).
//!
//! JSON shape:
//! {
//!   "nodes": [
//!     { "ID": 1, "TYPE": "METHOD", "NAME": "main", ... },
//!     ...
//!   ],
//!   "edges": [
//!     { "outV": 1, "inV": 2, "TYPE": "AST", ... },
//!     ...
//!   ]
//! }
//!
//! Attributes other than the required ones vary per record; an absent key and
//! an explicit `null` both count as missing. We check every record up front so
//! nothing is written for a document that fails validation.

use crate::error::{Collection, ConvertError, Result};
use crate::spec::{EDGE_IN, EDGE_OUT, EDGE_TYPE, NODE_ID, NODE_TYPE};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Raw document as it appears on disk. Extra top-level keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphExport {
    #[serde(default)]
    pub nodes: Option<Value>,

    #[serde(default)]
    pub edges: Option<Value>,
}

/// A node whose `ID` and `TYPE` were checked.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub label: String,
    pub fields: Map<String, Value>,
}

/// An edge whose `outV`, `inV` and `TYPE` were checked.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatedExport {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphExport {
    /// Read and parse an export file. Structure is not checked here.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConvertError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check both collections and every record's required fields.
    pub fn validate_and_build(self) -> Result<ValidatedExport> {
        let raw_nodes = take_list(self.nodes, Collection::Nodes)?;
        let raw_edges = take_list(self.edges, Collection::Edges)?;

        let mut nodes = Vec::with_capacity(raw_nodes.len());
        for (index, raw) in raw_nodes.into_iter().enumerate() {
            let fields = into_object(raw, Collection::Nodes, index)?;
            check_id(&fields, Collection::Nodes, index, NODE_ID)?;
            let label = check_label(&fields, index)?;
            nodes.push(NodeRecord { label, fields });
        }

        let mut edges = Vec::with_capacity(raw_edges.len());
        for (index, raw) in raw_edges.into_iter().enumerate() {
            let fields = into_object(raw, Collection::Edges, index)?;
            check_id(&fields, Collection::Edges, index, EDGE_OUT)?;
            check_id(&fields, Collection::Edges, index, EDGE_IN)?;
            match required(&fields, Collection::Edges, index, EDGE_TYPE)? {
                Value::String(_) => {}
                other => {
                    return Err(ConvertError::InvalidField {
                        collection: Collection::Edges,
                        index,
                        field: EDGE_TYPE,
                        reason: format!("expected a string, got {}", kind(other)),
                    });
                }
            }
            edges.push(EdgeRecord { fields });
        }

        Ok(ValidatedExport { nodes, edges })
    }
}

fn take_list(value: Option<Value>, collection: Collection) -> Result<Vec<Value>> {
    match value {
        None | Some(Value::Null) => Err(ConvertError::MissingCollection {
            name: collection.as_str(),
        }),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ConvertError::NotAList {
            name: collection.as_str(),
        }),
    }
}

fn into_object(raw: Value, collection: Collection, index: usize) -> Result<Map<String, Value>> {
    match raw {
        Value::Object(map) => Ok(map),
        _ => Err(ConvertError::NotAnObject { collection, index }),
    }
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    collection: Collection,
    index: usize,
    field: &'static str,
) -> Result<&'a Value> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(ConvertError::MissingField {
            collection,
            index,
            field,
        }),
        Some(v) => Ok(v),
    }
}

/// Identifiers (node `ID`, edge endpoints) are strings or numbers.
fn check_id(
    fields: &Map<String, Value>,
    collection: Collection,
    index: usize,
    field: &'static str,
) -> Result<()> {
    match required(fields, collection, index, field)? {
        Value::String(_) | Value::Number(_) => Ok(()),
        other => Err(ConvertError::InvalidField {
            collection,
            index,
            field,
            reason: format!("expected a string or number, got {}", kind(other)),
        }),
    }
}

/// The node type ends up in a file name, so it has to be usable as one.
fn check_label(fields: &Map<String, Value>, index: usize) -> Result<String> {
    let invalid = |reason: String| ConvertError::InvalidField {
        collection: Collection::Nodes,
        index,
        field: NODE_TYPE,
        reason,
    };

    let label = match required(fields, Collection::Nodes, index, NODE_TYPE)? {
        Value::String(s) => s,
        other => return Err(invalid(format!("expected a string, got {}", kind(other)))),
    };

    if label.is_empty() {
        return Err(invalid("type label is empty".to_string()));
    }
    if label == "." || label == ".." || label.contains(['/', '\\', '\0']) {
        return Err(invalid(format!(
            "type label {:?} cannot be used in a file name",
            label
        )));
    }
    Ok(label.clone())
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
