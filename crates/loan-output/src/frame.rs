//! DataFrame construction from the cleaned table.

use anyhow::{Context, Result, bail};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use loan_model::{CellValue, ColumnType, OutputColumn, PipelineConfig, Table};

/// Build one typed column per output-schema entry.
///
/// Integer and float columns become numeric series, everything else is
/// written as text: dates as ISO `YYYY-MM-DD`, categories as their label.
/// Missing cells are nulls.
pub fn build_output_frame(table: &Table, config: &PipelineConfig) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(config.output_schema.len());
    for column in &config.output_schema {
        columns.push(build_column(table, column)?);
    }
    let frame = DataFrame::new(columns).context("build output dataframe")?;
    Ok(frame)
}

fn build_column(table: &Table, column: &OutputColumn) -> Result<Column> {
    let name = column.name.as_str();
    let cells = table.rows.iter().map(|row| (row.record_number, row.get(name)));
    let series = match column.column_type {
        ColumnType::Integer => {
            let mut values: Vec<Option<i64>> = Vec::with_capacity(table.height());
            for (record_number, cell) in cells {
                match cell {
                    CellValue::Integer(value) => values.push(Some(*value)),
                    CellValue::Missing => values.push(None),
                    other => {
                        bail!("{name}: record {record_number} holds {other:?}, expected integer")
                    }
                }
            }
            Series::new(name.into(), values)
        }
        ColumnType::Float => {
            let mut values: Vec<Option<f64>> = Vec::with_capacity(table.height());
            for (record_number, cell) in cells {
                match cell {
                    CellValue::Float(value) => values.push(Some(*value)),
                    CellValue::Missing => values.push(None),
                    other => {
                        bail!("{name}: record {record_number} holds {other:?}, expected float")
                    }
                }
            }
            Series::new(name.into(), values)
        }
        ColumnType::Text | ColumnType::Date | ColumnType::Category => {
            let mut values: Vec<Option<String>> = Vec::with_capacity(table.height());
            for (_, cell) in cells {
                values.push(render_text(cell));
            }
            Series::new(name.into(), values)
        }
    };
    Ok(series.into())
}

fn render_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(value) => Some(value.clone()),
        CellValue::Date(value) => Some(value.format("%Y-%m-%d").to_string()),
        CellValue::Category(value) => Some(value.as_str().to_string()),
        CellValue::Integer(value) => Some(value.to_string()),
        CellValue::Float(value) => Some(value.to_string()),
        CellValue::Missing => None,
    }
}
