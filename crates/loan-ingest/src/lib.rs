//! Loan data ingestion.
//!
//! Reads the delimited text export of the loan snapshot into a [`CsvTable`]:
//! normalized header names plus one string row per data record. No typing
//! happens here; the transform crate owns all coercion.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use loan_ingest::read_csv_table;
//!
//! let table = read_csv_table(Path::new("data/loans.csv"))?;
//! println!("{} rows, {} columns", table.height(), table.headers.len());
//! ```

mod delimited;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Delimited Text Reading ===
pub use delimited::{CsvRow, CsvTable, read_csv_table};
