//! Converter options: output location, file naming and loader header markers.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory created next to the input file.
    pub output_dir_name: String,
    pub vertex_file_prefix: String,
    pub edge_file_name: String,

    /// Replaces the node `TYPE` header.
    pub label_marker: String,
    /// Replaces the edge `inV` header.
    pub start_id_marker: String,
    /// Replaces the edge `outV` header.
    pub end_id_marker: String,
    /// Replaces the edge `TYPE` header.
    pub type_marker: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir_name: "csv".to_string(),
            vertex_file_prefix: "vertex_".to_string(),
            edge_file_name: "edge.csv".to_string(),
            label_marker: ":LABEL".to_string(),
            start_id_marker: ":START_ID".to_string(),
            end_id_marker: ":END_ID".to_string(),
            type_marker: ":TYPE".to_string(),
        }
    }
}

impl ConvertOptions {
    /// `<dirname(input)>/<output_dir_name>`; a bare file name resolves against `.`.
    pub fn output_dir_for(&self, input: &Path) -> PathBuf {
        let base = match input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        base.join(&self.output_dir_name)
    }

    pub fn vertex_file_name(&self, label: &str) -> String {
        format!("{}{}.csv", self.vertex_file_prefix, label)
    }

    /// Header for the identifier column of a node partition.
    pub fn id_header(&self, label: &str) -> String {
        format!("{}:ID", label)
    }
}
