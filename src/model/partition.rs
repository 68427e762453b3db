//! Reshape validated records into loader-ready tables.
//!
//! Nodes: one table per distinct `TYPE`, in first-seen order, each restricted
//! to the columns that have a value somewhere in that partition.
//! Edges: one table, same column rule.
//! Identifier and type columns are renamed to the loader's header markers.

use crate::config::ConvertOptions;
use crate::model::{Table, column_order};
use crate::spec::{EDGE_IN, EDGE_OUT, EDGE_TYPE, EdgeRecord, NODE_ID, NODE_TYPE, NodeRecord};
use std::collections::HashMap;
use tracing::debug;

/// Nodes sharing one type label, reshaped for output.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub label: String,
    pub table: Table,
}

/// Group nodes by label and shape each group.
///
/// Column order is the first-seen key order over *all* nodes, so every
/// partition lists its columns in the same relative order. Each partition's
/// table is built from its own records only.
pub fn node_partitions(nodes: &[NodeRecord], opts: &ConvertOptions) -> Vec<Partition> {
    let order = column_order(nodes.iter().map(|n| &n.fields));

    // label -> row indices, labels kept in first-seen order.
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();
    for (i, node) in nodes.iter().enumerate() {
        let label = node.label.as_str();
        let g = *slot.entry(label).or_insert_with(|| {
            groups.push((label, Vec::new()));
            groups.len() - 1
        });
        groups[g].1.push(i);
    }
    debug!(types = groups.len(), nodes = nodes.len(), "grouped nodes by type");

    groups
        .into_iter()
        .map(|(label, rows)| {
            let mut table =
                Table::with_column_order(&order, rows.iter().map(|&i| &nodes[i].fields));
            let dropped = table.drop_empty_columns();
            if !dropped.is_empty() {
                debug!(label, ?dropped, "dropped empty columns");
            }
            table.rename_column(NODE_ID, &opts.id_header(label));
            table.rename_column(NODE_TYPE, &opts.label_marker);
            Partition {
                label: label.to_string(),
                table,
            }
        })
        .collect()
}

/// Shape all edges into one table.
///
/// With no edges at all the table still carries the three marker headers.
pub fn edge_table(edges: &[EdgeRecord], opts: &ConvertOptions) -> Table {
    let mut table = Table::from_records(edges.iter().map(|e| &e.fields));
    let dropped = table.drop_empty_columns();
    if !dropped.is_empty() {
        debug!(?dropped, "dropped empty edge columns");
    }

    if table.rows.is_empty() {
        table.columns = vec![
            EDGE_OUT.to_string(),
            EDGE_IN.to_string(),
            EDGE_TYPE.to_string(),
        ];
    }

    table.rename_column(EDGE_OUT, &opts.end_id_marker);
    table.rename_column(EDGE_IN, &opts.start_id_marker);
    table.rename_column(EDGE_TYPE, &opts.type_marker);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::GraphExport;
    use serde_json::{Value, json};

    fn validated(doc: Value) -> crate::spec::ValidatedExport {
        serde_json::from_value::<GraphExport>(doc)
            .unwrap()
            .validate_and_build()
            .unwrap()
    }

    #[test]
    fn partitions_in_first_seen_order() {
        let v = validated(json!({
            "nodes": [
                {"ID": 1, "TYPE": "B"},
                {"ID": 2, "TYPE": "A"},
                {"ID": 3, "TYPE": "B"}
            ],
            "edges": []
        }));
        let parts = node_partitions(&v.nodes, &ConvertOptions::default());
        let labels: Vec<&str> = parts.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A"]);
        assert_eq!(parts[0].table.rows, vec![vec![json!(1), json!("B")], vec![json!(3), json!("B")]]);
        assert_eq!(parts[1].table.rows.len(), 1);
    }

    #[test]
    fn headers_are_renamed() {
        let v = validated(json!({
            "nodes": [{"ID": 1, "TYPE": "PERSON", "name": "Alice"}],
            "edges": [{"outV": 1, "inV": 3, "TYPE": "WORKS_AT", "since": 2020}]
        }));
        let opts = ConvertOptions::default();
        let parts = node_partitions(&v.nodes, &opts);
        assert_eq!(parts[0].table.columns, vec!["PERSON:ID", ":LABEL", "name"]);

        let edges = edge_table(&v.edges, &opts);
        assert_eq!(edges.columns, vec![":END_ID", ":START_ID", ":TYPE", "since"]);
        assert_eq!(edges.rows[0], vec![json!(1), json!(3), json!("WORKS_AT"), json!(2020)]);
    }

    #[test]
    fn attribute_of_other_type_is_not_carried_over() {
        let v = validated(json!({
            "nodes": [
                {"ID": 1, "TYPE": "METHOD", "FULL_NAME": "main"},
                {"ID": 2, "TYPE": "LITERAL", "CODE": "42"}
            ],
            "edges": []
        }));
        let parts = node_partitions(&v.nodes, &ConvertOptions::default());
        assert_eq!(parts[0].table.columns, vec!["METHOD:ID", ":LABEL", "FULL_NAME"]);
        assert_eq!(parts[1].table.columns, vec!["LITERAL:ID", ":LABEL", "CODE"]);
    }

    #[test]
    fn partition_columns_follow_order_across_all_nodes() {
        let v = validated(json!({
            "nodes": [
                {"ID": 1, "TYPE": "A", "x": 1, "y": 2},
                {"y": 3, "x": 4, "TYPE": "B", "ID": 2}
            ],
            "edges": []
        }));
        let parts = node_partitions(&v.nodes, &ConvertOptions::default());
        assert_eq!(parts[1].table.columns, vec!["B:ID", ":LABEL", "x", "y"]);
        assert_eq!(parts[1].table.rows, vec![vec![json!(2), json!("B"), json!(4), json!(3)]]);
    }

    #[test]
    fn empty_edge_table_keeps_marker_headers() {
        let t = edge_table(&[], &ConvertOptions::default());
        assert_eq!(t.columns, vec![":END_ID", ":START_ID", ":TYPE"]);
        assert!(t.rows.is_empty());
    }

    #[test]
    fn all_null_edge_attribute_is_dropped() {
        let v = validated(json!({
            "nodes": [],
            "edges": [
                {"outV": 1, "inV": 2, "TYPE": "AST", "VARIABLE": null},
                {"outV": 2, "inV": 3, "TYPE": "CFG"}
            ]
        }));
        let t = edge_table(&v.edges, &ConvertOptions::default());
        assert_eq!(t.columns, vec![":END_ID", ":START_ID", ":TYPE"]);
        assert_eq!(t.rows.len(), 2);
    }
}
