//! The converter: export.json in, loader CSV files + manifest out.

use crate::config::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::model::{edge_table, node_partitions};
use crate::render::write_csv_file;
use crate::spec::GraphExport;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Files written by one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// One vertex file per node type, in first-seen type order.
    pub nodes: Vec<PathBuf>,
    pub relationships: PathBuf,

    /// Per-type detail, parallel to `nodes`.
    #[serde(skip)]
    pub partitions: Vec<PartitionSummary>,
    #[serde(skip)]
    pub edge_columns: Vec<String>,
    #[serde(skip)]
    pub edge_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSummary {
    pub label: String,
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: usize,
}

impl Manifest {
    /// Vertex file for a node type, if that type was present.
    pub fn node_file(&self, label: &str) -> Option<&Path> {
        self.partitions
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.path.as_path())
    }
}

/// Convert with default options.
pub fn convert(input: impl AsRef<Path>) -> Result<Manifest> {
    convert_with(input, &ConvertOptions::default())
}

/// Convert `input`, writing into `<dirname(input)>/<opts.output_dir_name>`.
///
/// The whole document is parsed and checked before the first CSV is written;
/// I/O errors during writing may leave a partial set of files behind.
pub fn convert_with(input: impl AsRef<Path>, opts: &ConvertOptions) -> Result<Manifest> {
    let input = input.as_ref();

    let out_dir = opts.output_dir_for(input);
    fs::create_dir_all(&out_dir).map_err(|source| ConvertError::CreateDir {
        path: out_dir.clone(),
        source,
    })?;

    let export = GraphExport::load(input)?.validate_and_build()?;
    info!(
        input = %input.display(),
        nodes = export.nodes.len(),
        edges = export.edges.len(),
        "loaded graph export"
    );

    let mut nodes = Vec::new();
    let mut partitions = Vec::new();
    for part in node_partitions(&export.nodes, opts) {
        let path = out_dir.join(opts.vertex_file_name(&part.label));
        write_csv_file(&part.table, &path)?;
        info!(
            path = %path.display(),
            rows = part.table.rows.len(),
            columns = part.table.columns.len(),
            "wrote vertex file"
        );

        nodes.push(path.clone());
        partitions.push(PartitionSummary {
            label: part.label,
            path,
            rows: part.table.rows.len(),
            columns: part.table.columns,
        });
    }

    let edges = edge_table(&export.edges, opts);
    let relationships = out_dir.join(&opts.edge_file_name);
    write_csv_file(&edges, &relationships)?;
    info!(
        path = %relationships.display(),
        rows = edges.rows.len(),
        columns = edges.columns.len(),
        "wrote edge file"
    );

    Ok(Manifest {
        nodes,
        relationships,
        partitions,
        edge_rows: edges.rows.len(),
        edge_columns: edges.columns,
    })
}
