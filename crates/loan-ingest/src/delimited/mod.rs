//! Delimited text reading.

mod header;
mod reader;

pub use reader::{CsvRow, CsvTable, read_csv_table};
