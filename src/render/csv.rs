use crate::error::{ConvertError, Result};
use crate::model::Table;
use serde_json::Value;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a table as UTF-8 CSV: header row, comma-delimited, no index column.
pub fn render_csv<W: Write>(table: &Table, writer: W) -> std::result::Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(&table.columns)?;

    for row in &table.rows {
        wtr.write_record(row.iter().map(|v| cell(v).into_owned()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the table into it.
pub fn write_csv_file(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    render_csv(table, file).map_err(|source| ConvertError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Text for one CSV field. Missing values are empty; nested values stay JSON.
fn cell(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}
