//! Stage 5: final projection onto the output schema.

use loan_model::{CellValue, PipelineConfig, Row, Table};

use crate::error::{Result, TransformError};

/// Reorders every row to the output schema and checks each cell against the
/// declared column type. Cells outside the schema (`installment`, leftovers
/// from earlier stages) are discarded.
pub fn final_projection(table: Table, config: &PipelineConfig) -> Result<Table> {
    let mut output = Table::new(
        config
            .output_schema
            .iter()
            .map(|column| column.name.clone())
            .collect(),
    );
    for mut source in table.rows {
        let mut row = Row::new(source.record_number);
        for column in &config.output_schema {
            let value = source
                .cells
                .remove(column.name.as_str())
                .unwrap_or(CellValue::Missing);
            if let Some(actual) = value.column_type()
                && actual != column.column_type
            {
                return Err(TransformError::TypeMismatch {
                    column: column.name.to_string(),
                    record_number: source.record_number,
                    expected: column.column_type,
                    actual,
                });
            }
            row.set(column.name.clone(), value);
        }
        output.push_row(row);
    }
    Ok(output)
}
