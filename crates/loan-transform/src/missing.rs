//! Stage 4: default filling, then the required-column filter.

use tracing::trace;

use loan_model::{PipelineConfig, Table};

use crate::report::PipelineReport;

/// Replaces missing cells of every `default_fill` column with its default.
pub fn fill_defaults(table: &mut Table, config: &PipelineConfig, report: &mut PipelineReport) {
    for row in &mut table.rows {
        for (column, default) in &config.default_fill {
            if row.is_missing(column.as_str()) {
                row.set(column.clone(), default.clone());
                report.record_fill(column.as_str());
            }
        }
    }
}

/// Drops rows with a missing cell in any required column. Survivors keep
/// their input order.
pub fn drop_incomplete(table: &mut Table, config: &PipelineConfig, report: &mut PipelineReport) {
    table.rows.retain(|row| {
        let missing: Vec<&str> = config
            .required_columns
            .iter()
            .map(|column| column.as_str())
            .filter(|column| row.is_missing(column))
            .collect();
        if missing.is_empty() {
            return true;
        }
        trace!(record_number = row.record_number, ?missing, "dropping row");
        report.record_drop(&missing);
        false
    });
}
