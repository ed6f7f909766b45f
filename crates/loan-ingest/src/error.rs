//! Error types for loan data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort ingestion. All of them are fatal input errors: no
/// output is produced when one occurs.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte-order mark we cannot decode.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Parsing Errors ===
    /// The CSV reader rejected a record.
    #[error("failed to parse {path} at record {record}: {message}")]
    CsvParse {
        path: PathBuf,
        record: u64,
        message: String,
    },

    /// File has no header row.
    #[error("input file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row is present but every name is blank.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
