//! Output generation for the cleaned loan table.
//!
//! - **frame**: typed polars [`DataFrame`](polars::prelude::DataFrame) in output-schema order
//! - **writer**: atomic CSV write (temp file + rename)

mod frame;
mod writer;

pub use frame::build_output_frame;
pub use writer::{write_csv, write_table_csv};
