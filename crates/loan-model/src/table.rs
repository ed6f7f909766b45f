#![deny(unsafe_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{Category, ColumnName, ColumnType};

/// One typed cell. `Missing` is the null of every column type.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Category(Category),
    Missing,
}

static MISSING: CellValue = CellValue::Missing;

impl CellValue {
    /// Text cell from a raw string; blank input is `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    /// Type of the value, `None` for `Missing` (which fits every column).
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            CellValue::Integer(_) => Some(ColumnType::Integer),
            CellValue::Float(_) => Some(ColumnType::Float),
            CellValue::Text(_) => Some(ColumnType::Text),
            CellValue::Date(_) => Some(ColumnType::Date),
            CellValue::Category(_) => Some(ColumnType::Category),
            CellValue::Missing => None,
        }
    }

    pub fn fits(&self, column_type: ColumnType) -> bool {
        self.column_type().is_none_or(|actual| actual == column_type)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(value) => Some(*value),
            CellValue::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(value) => Some(*value),
            _ => None,
        }
    }
}

/// One loan record. `record_number` is the 1-based data row in the source.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub record_number: u64,
    pub cells: BTreeMap<ColumnName, CellValue>,
}

impl Row {
    pub fn new(record_number: u64) -> Self {
        Self {
            record_number,
            cells: BTreeMap::new(),
        }
    }

    /// Cell for `column`, `Missing` when the row has no such cell.
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&MISSING)
    }

    pub fn set(&mut self, column: ColumnName, value: CellValue) {
        self.cells.insert(column, value);
    }

    pub fn is_missing(&self, column: &str) -> bool {
        self.get(column).is_missing()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<ColumnName>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<ColumnName>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_raw_is_missing() {
        assert_eq!(CellValue::from_raw("   "), CellValue::Missing);
        assert_eq!(
            CellValue::from_raw(" 36 months "),
            CellValue::Text("36 months".to_string())
        );
    }

    #[test]
    fn missing_fits_any_type() {
        assert!(CellValue::Missing.fits(ColumnType::Date));
        assert!(CellValue::Float(1.5).fits(ColumnType::Float));
        assert!(!CellValue::Float(1.5).fits(ColumnType::Integer));
    }

    #[test]
    fn absent_cell_reads_as_missing() {
        let row = Row::new(1);
        assert!(row.is_missing("dti"));
    }
}
