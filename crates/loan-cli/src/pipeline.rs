//! File-level steps shared by the `build` command and the integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use loan_ingest::read_csv_table;
use loan_model::PipelineConfig;
use loan_model::schema::col;
use loan_transform::{PipelineOutput, PipelineReport, run_pipeline};

use crate::logging::redact_value;

/// Built-in configuration, or the JSON override at `path`.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let json = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    PipelineConfig::from_json_str(&json).with_context(|| format!("parse {}", path.display()))
}

/// `<stem>_clean.csv` in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "loans".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_clean.csv"))
}

/// Read `input` and run every cleaning stage over it.
pub fn clean_file(input: &Path, config: &PipelineConfig) -> Result<PipelineOutput> {
    let raw = info_span!("ingest", path = %input.display()).in_scope(|| -> Result<_> {
        let start = Instant::now();
        let raw = read_csv_table(input).with_context(|| format!("read {}", input.display()))?;
        info!(
            rows = raw.height(),
            columns = raw.headers.len(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(raw)
    })?;

    let output = run_pipeline(&raw, config)
        .with_context(|| format!("clean {}", input.display()))?;
    for row in output.table.rows.iter().take(5) {
        if let Some(id) = row.get(col::ID).as_text() {
            trace!(
                record_number = row.record_number,
                id = redact_value(id),
                "output row"
            );
        }
    }
    Ok(output)
}

/// Write `report` as pretty-printed JSON.
pub fn write_report_json(report: &PipelineReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
