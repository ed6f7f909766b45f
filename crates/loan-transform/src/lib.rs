//! Cleaning and feature engineering for loan records.
//!
//! [`run_pipeline`] turns the raw [`loan_ingest::CsvTable`] into a typed
//! [`loan_model::Table`] matching the configured output schema, together with
//! a [`PipelineReport`] of parse failures, filled cells and dropped rows.

pub mod derive;
pub mod error;
pub mod finalize;
pub mod missing;
pub mod normalization;
pub mod pipeline;
pub mod project;
pub mod report;
pub mod scalar;

pub use derive::{credit_history_months, emp_length_years, fico_bucket, loan_status_group};
pub use error::{Result, TransformError};
pub use pipeline::{PipelineOutput, run_pipeline};
pub use report::PipelineReport;
