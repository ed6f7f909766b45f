//! Error types for the transform stages.

use thiserror::Error;

use loan_model::{ColumnType, ModelError};

/// Errors that abort a pipeline run.
///
/// Cell-level parse failures are not errors; they become missing cells and
/// are counted in the run report.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Allow-listed columns absent from the input header.
    #[error("input is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// An allow-listed column appears more than once in the input header.
    #[error("input column '{column}' appears {count} times")]
    AmbiguousColumn { column: String, count: usize },

    /// A cell reached the final projection with a type its column does not declare.
    #[error(
        "column '{column}' declares {expected} but record {record_number} holds {actual}"
    )]
    TypeMismatch {
        column: String,
        record_number: u64,
        expected: ColumnType,
        actual: ColumnType,
    },

    /// The configuration handed to the pipeline is inconsistent.
    #[error(transparent)]
    Config(#[from] ModelError),
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_are_listed() {
        let err = TransformError::MissingColumns {
            columns: vec!["term".to_string(), "issue_d".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "input is missing required columns: term, issue_d"
        );
    }
}
