//! Stage 1: restrict the raw table to the allow-listed columns.

use loan_ingest::CsvTable;
use loan_model::{CellValue, PipelineConfig, Row, Table};

use crate::error::{Result, TransformError};

/// Keeps only `config.input_columns`, in allow-list order.
///
/// Every allow-listed column must exist exactly once in the input; all
/// absent columns are reported together. Repeated names outside the
/// allow-list are dropped like any other extra column. Blank cells become
/// `Missing`, everything else is `Text`.
pub fn project(raw: &CsvTable, config: &PipelineConfig) -> Result<Table> {
    let mut indices = Vec::with_capacity(config.input_columns.len());
    let mut missing = Vec::new();
    for name in &config.input_columns {
        let count = raw.column_count(name.as_str());
        if count > 1 {
            return Err(TransformError::AmbiguousColumn {
                column: name.to_string(),
                count,
            });
        }
        match raw.column_index(name.as_str()) {
            Some(idx) => indices.push((name, idx)),
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(TransformError::MissingColumns { columns: missing });
    }

    let ignored = raw.headers.len().saturating_sub(indices.len());
    if ignored > 0 {
        tracing::debug!(ignored, "dropping columns outside the allow-list");
    }

    let mut table = Table::new(config.input_columns.clone());
    for raw_row in &raw.rows {
        let mut row = Row::new(raw_row.record_number);
        for (name, idx) in &indices {
            let value = raw_row.values.get(*idx).map_or("", String::as_str);
            row.set((*name).clone(), CellValue::from_raw(value));
        }
        table.push_row(row);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_ingest::CsvRow;
    use loan_model::ColumnName;

    fn config(columns: &[&str]) -> PipelineConfig {
        PipelineConfig {
            input_columns: columns
                .iter()
                .map(|name| ColumnName::new(*name).unwrap())
                .collect(),
            ..PipelineConfig::default()
        }
    }

    fn raw(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(idx, values)| CsvRow {
                    record_number: idx as u64 + 1,
                    values: values.iter().map(|v| (*v).to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn keeps_allow_list_in_order() {
        let table = project(
            &raw(&["url", "term", "id"], &[&["x", "36 months", "7"]]),
            &config(&["id", "term"]),
        )
        .unwrap();

        let names: Vec<&str> = table.columns.iter().map(ColumnName::as_str).collect();
        assert_eq!(names, vec!["id", "term"]);
        assert_eq!(table.rows[0].get("id"), &CellValue::Text("7".to_string()));
        assert!(table.rows[0].is_missing("url"));
    }

    #[test]
    fn blank_cells_are_missing() {
        let table = project(&raw(&["id", "term"], &[&["7", ""]]), &config(&["id", "term"]))
            .unwrap();

        assert!(table.rows[0].is_missing("term"));
    }

    #[test]
    fn repeated_extra_columns_are_dropped() {
        let table = project(
            &raw(&["url", "id", "url"], &[&["a", "7", "b"]]),
            &config(&["id"]),
        )
        .unwrap();

        assert_eq!(table.width(), 1);
        assert_eq!(table.rows[0].get("id"), &CellValue::Text("7".to_string()));
    }

    #[test]
    fn repeated_allow_listed_column_is_rejected() {
        let err = project(&raw(&["id", "term", "id"], &[]), &config(&["id", "term"])).unwrap_err();

        assert!(matches!(
            err,
            TransformError::AmbiguousColumn { ref column, count: 2 } if column.as_str() == "id"
        ));
    }

    #[test]
    fn reports_every_missing_column() {
        let err = project(&raw(&["id"], &[]), &config(&["id", "term", "dti"])).unwrap_err();

        match err {
            TransformError::MissingColumns { columns } => {
                assert_eq!(columns, vec!["term".to_string(), "dti".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
