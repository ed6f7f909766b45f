//! Delimited text file reading into an untyped string table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

use super::header::{normalize_cell, normalize_header};

/// One data record of the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based position among the data records of the file.
    pub record_number: u64,
    /// Normalized cells, padded or truncated to the header width.
    pub values: Vec<String>,
}

/// The source file as strings: a header row plus data rows.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    /// Position of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Number of headers equal to `name`.
    pub fn column_count(&self, name: &str) -> usize {
        self.headers.iter().filter(|header| *header == name).count()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Rejects files that start with a UTF-16 byte-order mark.
///
/// A UTF-8 BOM is fine; it is stripped from the first header.
fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a comma-delimited file with a single header row.
///
/// Short records are padded with empty cells, extra trailing fields are
/// ignored, and records whose cells are all blank are skipped. Repeated
/// header names are kept as they are; only the caller knows which columns
/// it needs.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    validate_encoding(path)?;
    let file = open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let raw_headers = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        record: 0,
        message: e.to_string(),
    })?;
    if raw_headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let headers: Vec<String> = raw_headers.iter().map(normalize_header).collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    let mut rows = Vec::new();
    let mut blank_records = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let record_number = idx as u64 + 1;
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            record: record_number,
            message: e.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            blank_records += 1;
            continue;
        }
        let values = (0..headers.len())
            .map(|col| normalize_cell(record.get(col).unwrap_or("")))
            .collect();
        rows.push(CsvRow {
            record_number,
            values,
        });
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        blank_records,
        "read input table"
    );

    Ok(CsvTable { headers, rows })
}
