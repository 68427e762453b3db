//! Output rendering.

pub mod csv;

pub use self::csv::{render_csv, write_csv_file};
