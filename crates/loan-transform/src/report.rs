//! Diagnostics collected during a pipeline run.

use std::collections::BTreeMap;

use serde::Serialize;

/// Counts gathered by the stages. None of these are errors: parse failures
/// became missing cells and dropped rows were excluded from the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub dropped_rows: usize,
    /// Required column → rows dropped because it was missing. A row missing
    /// several required columns is counted under each of them.
    pub dropped_by_column: BTreeMap<String, usize>,
    /// Column → non-blank cells that failed to parse.
    pub parse_failures: BTreeMap<String, usize>,
    /// Column → missing cells replaced by the configured default.
    pub filled_cells: BTreeMap<String, usize>,
}

impl PipelineReport {
    pub fn new(input_rows: usize) -> Self {
        Self {
            input_rows,
            ..Self::default()
        }
    }

    pub fn record_parse_failure(&mut self, column: &str) {
        *self.parse_failures.entry(column.to_string()).or_insert(0) += 1;
    }

    pub fn record_fill(&mut self, column: &str) {
        *self.filled_cells.entry(column.to_string()).or_insert(0) += 1;
    }

    pub fn record_drop(&mut self, missing: &[&str]) {
        self.dropped_rows += 1;
        for column in missing {
            *self.dropped_by_column.entry((*column).to_string()).or_insert(0) += 1;
        }
    }

    pub fn total_parse_failures(&self) -> usize {
        self.parse_failures.values().sum()
    }

    pub fn total_filled(&self) -> usize {
        self.filled_cells.values().sum()
    }
}
