//! CSV output.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use loan_model::{PipelineConfig, Table};

use crate::frame::build_output_frame;

/// Write `frame` as comma-delimited UTF-8 with a header row.
///
/// The data goes to a sibling `.tmp` file first and is renamed over `path`
/// once synced, so a failed run never leaves a partial output behind.
pub fn write_csv(frame: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }

    let temp_path = path.with_extension("csv.tmp");
    let result = write_staged(frame, &temp_path).and_then(|()| {
        fs::rename(&temp_path, path)
            .with_context(|| format!("rename {} to {}", temp_path.display(), path.display()))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    tracing::info!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "wrote output csv"
    );
    Ok(())
}

/// Build the output frame for `table` and write it to `path`.
pub fn write_table_csv(table: &Table, config: &PipelineConfig, path: &Path) -> Result<()> {
    let mut frame = build_output_frame(table, config)?;
    write_csv(&mut frame, path)
}

fn write_staged(frame: &mut DataFrame, temp_path: &Path) -> Result<()> {
    let mut file =
        File::create(temp_path).with_context(|| format!("create {}", temp_path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(frame)
        .with_context(|| format!("write {}", temp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("sync {}", temp_path.display()))?;
    Ok(())
}
