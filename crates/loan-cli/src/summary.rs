use std::collections::BTreeSet;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::BuildResult;

pub fn print_summary(result: &BuildResult) {
    let report = &result.report;
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    println!(
        "Rows: {} in, {} out, {} dropped",
        report.input_rows, report.output_rows, report.dropped_rows
    );

    let columns: BTreeSet<&String> = report
        .parse_failures
        .keys()
        .chain(report.filled_cells.keys())
        .chain(report.dropped_by_column.keys())
        .collect();
    if columns.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Parse failures"),
        header_cell("Filled"),
        header_cell("Rows dropped"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in columns {
        table.add_row(vec![
            Cell::new(column),
            count_cell(report.parse_failures.get(column), Color::Yellow),
            count_cell(report.filled_cells.get(column), Color::Cyan),
            count_cell(report.dropped_by_column.get(column), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total_parse_failures()).add_attribute(Attribute::Bold),
        Cell::new(report.total_filled()).add_attribute(Attribute::Bold),
        Cell::new(report.dropped_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: Option<&usize>, color: Color) -> Cell {
    match count {
        Some(&value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        _ => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
