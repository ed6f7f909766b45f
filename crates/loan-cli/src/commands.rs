use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span};

use loan_cli::pipeline::{clean_file, default_output_path, load_config, write_report_json};
use loan_model::schema::output_column_source;
use loan_output::write_table_csv;

use crate::cli::BuildArgs;
use crate::summary::{align_column, apply_table_style, header_cell};
use crate::types::BuildResult;

pub fn run_schema() -> Result<()> {
    let config = load_config(None)?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Source"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, column) in config.output_schema.iter().enumerate() {
        let default = config
            .default_fill
            .get(column.name.as_str())
            .and_then(|value| value.as_f64())
            .map_or_else(|| "-".to_string(), |value| value.to_string());
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(column.name.as_str()),
            Cell::new(column.column_type),
            Cell::new(output_column_source(column.name.as_str())),
            Cell::new(default),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let span = info_span!("build", input = %args.input.display(), dry_run = args.dry_run);
    let _guard = span.enter();
    let start = Instant::now();

    let config = load_config(args.config.as_deref()).context("load configuration")?;
    let cleaned = clean_file(&args.input, &config)?;

    // A report failure must leave no output file.
    if let Some(path) = &args.report {
        write_report_json(&cleaned.report, path)?;
    }

    let output = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        info_span!("output", path = %path.display()).in_scope(|| {
            write_table_csv(&cleaned.table, &config, &path)
                .with_context(|| format!("write {}", path.display()))
        })?;
        Some(path)
    };

    info!(
        output_rows = cleaned.report.output_rows,
        duration_ms = start.elapsed().as_millis(),
        "build complete"
    );

    Ok(BuildResult {
        input: args.input.clone(),
        output,
        report_path: args.report.clone(),
        report: cleaned.report,
    })
}
