//! Data model for the loan feature pipeline.
//!
//! - **table**: typed cells, rows and the in-memory table
//! - **enums**: column types and the closed derived categories
//! - **schema**: the fixed input allow-list, output schema and defaults
//! - **config**: [`PipelineConfig`], the explicit configuration handed to the pipeline

pub mod config;
pub mod enums;
pub mod error;
pub mod ids;
pub mod schema;
pub mod table;

pub use config::{FicoBin, OutputColumn, PipelineConfig};
pub use enums::{Category, ColumnType, FicoBucket, LoanStatusGroup};
pub use error::{ModelError, Result};
pub use ids::ColumnName;
pub use table::{CellValue, Row, Table};
