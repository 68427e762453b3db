//! Error taxonomy for the converter.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which top-level collection a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Nodes,
    Edges,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Nodes => "nodes",
            Collection::Edges => "edges",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("read input file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("input document has no `{name}` collection")]
    MissingCollection { name: &'static str },

    #[error("`{name}` must be a JSON array")]
    NotAList { name: &'static str },

    #[error("{collection}[{index}] is not a JSON object")]
    NotAnObject { collection: Collection, index: usize },

    #[error("{collection}[{index}] is missing required field `{field}`")]
    MissingField {
        collection: Collection,
        index: usize,
        field: &'static str,
    },

    #[error("{collection}[{index}] has invalid `{field}`: {reason}")]
    InvalidField {
        collection: Collection,
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
