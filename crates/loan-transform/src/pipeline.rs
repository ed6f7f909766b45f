//! The five cleaning stages in order:
//!
//! 1. **Project**: keep the allow-listed columns
//! 2. **Scalars**: parse `term`, numeric and date columns
//! 3. **Derive**: employment length, status group, vintage, credit history, FICO bucket
//! 4. **Missing**: fill defaults, then drop rows missing a required column
//! 5. **Finalize**: project onto the typed output schema
//!
//! Stages are row-local. Row order is preserved from input to output.

use std::time::Instant;

use tracing::{debug, info, info_span};

use loan_ingest::CsvTable;
use loan_model::{PipelineConfig, Table};

use crate::derive::derive_features;
use crate::error::Result;
use crate::finalize::final_projection;
use crate::missing::{drop_incomplete, fill_defaults};
use crate::project::project;
use crate::report::PipelineReport;
use crate::scalar::normalize_scalars;

/// The cleaned table and what happened on the way.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub table: Table,
    pub report: PipelineReport,
}

/// Runs every stage over `raw`. The configuration is validated first.
pub fn run_pipeline(raw: &CsvTable, config: &PipelineConfig) -> Result<PipelineOutput> {
    config.validate()?;

    let span = info_span!("pipeline", input_rows = raw.height());
    let _guard = span.enter();
    let start = Instant::now();
    let mut report = PipelineReport::new(raw.height());

    let mut table = info_span!("project").in_scope(|| -> Result<Table> {
        let table = project(raw, config)?;
        debug!(columns = table.width(), rows = table.height(), "projection complete");
        Ok(table)
    })?;

    info_span!("scalars").in_scope(|| {
        let stage_start = Instant::now();
        normalize_scalars(&mut table, config, &mut report);
        for (column, failures) in &report.parse_failures {
            debug!(column = %column, failures, "unparsable cells set to missing");
        }
        debug!(
            parse_failures = report.total_parse_failures(),
            duration_ms = stage_start.elapsed().as_millis(),
            "scalar normalization complete"
        );
    });

    info_span!("derive").in_scope(|| {
        let stage_start = Instant::now();
        derive_features(&mut table, config, &mut report);
        debug!(
            duration_ms = stage_start.elapsed().as_millis(),
            "derived features complete"
        );
    });

    info_span!("missing").in_scope(|| {
        fill_defaults(&mut table, config, &mut report);
        drop_incomplete(&mut table, config, &mut report);
        debug!(
            filled_cells = report.total_filled(),
            dropped_rows = report.dropped_rows,
            "missing-value handling complete"
        );
    });

    let table = info_span!("finalize").in_scope(|| final_projection(table, config))?;
    report.output_rows = table.height();

    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows,
        dropped_rows = report.dropped_rows,
        parse_failures = report.total_parse_failures(),
        filled_cells = report.total_filled(),
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(PipelineOutput { table, report })
}
