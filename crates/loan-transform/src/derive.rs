//! Stage 3: derived features.
//!
//! Every derivation reads only cells of the same row that earlier stages have
//! already typed. The raw `emp_length` and `loan_status` cells are consumed.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use loan_model::schema::col;
use loan_model::{
    CellValue, Category, ColumnName, FicoBucket, LoanStatusGroup, PipelineConfig, Row, Table,
};

use crate::normalization::{leading_integer, months_between, period_label};
use crate::report::PipelineReport;

/// Years of employment from the free-text field.
///
/// Three labels are mapped literally; anything else falls back to the first
/// integer in the text.
pub fn emp_length_years(raw: Option<&str>) -> Option<f64> {
    match raw?.trim() {
        "< 1 year" | "n/a" => Some(0.0),
        "10+ years" => Some(10.0),
        other => leading_integer(other).map(|years| years as f64),
    }
}

/// Whole months from `earliest` to `issued`. Negative when the credit line
/// postdates the issue date; the value is not clamped.
pub fn credit_history_months(
    earliest: Option<NaiveDate>,
    issued: Option<NaiveDate>,
) -> Option<i64> {
    Some(months_between(earliest?, issued?))
}

pub fn loan_status_group(raw: Option<&str>) -> LoanStatusGroup {
    LoanStatusGroup::from_raw_status(raw)
}

pub fn fico_bucket(config: &PipelineConfig, fico_range_low: Option<f64>) -> Option<FicoBucket> {
    config.fico_bucket(fico_range_low)
}

/// Computes every derived column for one row.
pub fn derive_row(row: &mut Row, config: &PipelineConfig, report: &mut PipelineReport) {
    let emp_length = row.cells.remove(col::EMP_LENGTH).unwrap_or(CellValue::Missing);
    let emp_text = emp_length.as_text();
    let years = emp_length_years(emp_text);
    if years.is_none() && emp_text.is_some() {
        trace!(record_number = row.record_number, "emp_length not recognised");
        report.record_parse_failure(col::EMP_LENGTH_YEARS);
    }
    row.set(
        ColumnName::from_static(col::EMP_LENGTH_YEARS),
        years.map_or(CellValue::Missing, CellValue::Float),
    );

    let status = row.cells.remove(col::LOAN_STATUS).unwrap_or(CellValue::Missing);
    row.set(
        ColumnName::from_static(col::LOAN_STATUS_GROUP),
        CellValue::Category(Category::LoanStatus(loan_status_group(status.as_text()))),
    );

    let issued = row.get(col::ISSUE_DATE).as_date();
    row.set(
        ColumnName::from_static(col::LOAN_VINTAGE_YEAR),
        issued.map_or(CellValue::Missing, |date| {
            CellValue::Integer(i64::from(date.year()))
        }),
    );
    row.set(
        ColumnName::from_static(col::LOAN_VINTAGE_MONTH),
        issued.map_or(CellValue::Missing, |date| CellValue::Text(period_label(date))),
    );

    let earliest = row.get(col::EARLIEST_CREDIT_LINE).as_date();
    row.set(
        ColumnName::from_static(col::CREDIT_HISTORY_MONTHS),
        credit_history_months(earliest, issued).map_or(CellValue::Missing, CellValue::Integer),
    );

    let bucket = fico_bucket(config, row.get(col::FICO_RANGE_LOW).as_f64());
    row.set(
        ColumnName::from_static(col::FICO_BUCKET),
        bucket.map_or(CellValue::Missing, |bucket| {
            CellValue::Category(Category::Fico(bucket))
        }),
    );
}

/// Applies [`derive_row`] to every row and updates the column list.
pub fn derive_features(table: &mut Table, config: &PipelineConfig, report: &mut PipelineReport) {
    for row in &mut table.rows {
        derive_row(row, config, report);
    }
    table.columns.retain(|column| {
        column.as_str() != col::EMP_LENGTH && column.as_str() != col::LOAN_STATUS
    });
    for derived in [
        col::EMP_LENGTH_YEARS,
        col::LOAN_STATUS_GROUP,
        col::LOAN_VINTAGE_YEAR,
        col::LOAN_VINTAGE_MONTH,
        col::CREDIT_HISTORY_MONTHS,
        col::FICO_BUCKET,
    ] {
        table.columns.push(ColumnName::from_static(derived));
    }
}
