//! Table model: heterogeneous JSON records flattened into aligned columns.

pub mod partition;

pub use partition::{Partition, edge_table, node_partitions};

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Column-aligned rows. `Value::Null` marks a missing cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table whose columns are the union of all record keys, in the
    /// order each key is first seen. Keys a record lacks become null cells.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Map<String, Value>>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();
        let order = column_order(records.clone());
        Self::with_column_order(&order, records)
    }

    /// Build a table over `records` whose columns follow `order`, keeping only
    /// the names at least one of these records carries as a key.
    pub fn with_column_order<'a, I>(order: &[String], records: I) -> Self
    where
        I: IntoIterator<Item = &'a Map<String, Value>>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();

        let present: HashSet<&str> = records
            .clone()
            .flat_map(|record| record.keys().map(String::as_str))
            .collect();
        let columns: Vec<String> = order
            .iter()
            .filter(|c| present.contains(c.as_str()))
            .cloned()
            .collect();

        let rows = records
            .map(|record| {
                columns
                    .iter()
                    .map(|c| record.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Remove every column that is null in all rows. Returns the dropped names.
    pub fn drop_empty_columns(&mut self) -> Vec<String> {
        let keep: Vec<bool> = (0..self.columns.len())
            .map(|i| self.rows.iter().any(|row| !row[i].is_null()))
            .collect();

        let mut dropped = Vec::new();
        let mut kept = Vec::new();
        for (name, &k) in self.columns.drain(..).zip(&keep) {
            if k {
                kept.push(name);
            } else {
                dropped.push(name);
            }
        }
        self.columns = kept;

        for row in &mut self.rows {
            let mut flags = keep.iter();
            row.retain(|_| *flags.next().unwrap_or(&false));
        }

        dropped
    }

    /// Rename a column in place. Returns false if `from` is not a column.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(i) => {
                self.columns[i] = to.to_string();
                true
            }
            None => false,
        }
    }
}

/// Every key across `records`, in the order each is first seen.
pub fn column_order<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    let mut columns: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}
