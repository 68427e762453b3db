//! Convert a graph export (`{"nodes": [...], "edges": [...]}`) into CSV files
//! for a graph database bulk loader: one `vertex_<TYPE>.csv` per node type and
//! one `edge.csv`.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod render;
pub mod spec;

pub use config::ConvertOptions;
pub use convert::{Manifest, PartitionSummary, convert, convert_with};
pub use error::{Collection, ConvertError, Result};
