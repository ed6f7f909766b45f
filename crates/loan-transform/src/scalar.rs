//! Stage 2: per-column scalar normalization.
//!
//! Each rule reads one raw text column and writes one typed column. A cell
//! that fails its rule becomes `Missing` and is counted in the report; the
//! row itself is never rejected here.

use loan_model::schema::{DATE_COLUMNS, NUMERIC_COLUMNS, col};
use loan_model::{CellValue, ColumnName, PipelineConfig, Row, Table};

use crate::normalization::{leading_integer, parse_date, parse_numeric};
use crate::report::PipelineReport;

/// How a source cell is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// First integer in free text (`"36 months"` → 36).
    LeadingInteger,
    /// Best-effort float coercion.
    Numeric,
    /// Calendar date under the configured format.
    Date,
}

/// One scalar normalization: `source` is consumed, `target` is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarRule {
    pub source: ColumnName,
    pub target: ColumnName,
    pub kind: ScalarKind,
}

impl ScalarRule {
    fn in_place(column: &'static str, kind: ScalarKind) -> Self {
        Self {
            source: ColumnName::from_static(column),
            target: ColumnName::from_static(column),
            kind,
        }
    }
}

/// The fixed rule set: `term`, the numeric list, then the three dates.
pub fn scalar_rules() -> Vec<ScalarRule> {
    let mut rules = vec![ScalarRule::in_place(col::TERM, ScalarKind::LeadingInteger)];
    rules.extend(
        NUMERIC_COLUMNS
            .into_iter()
            .map(|column| ScalarRule::in_place(column, ScalarKind::Numeric)),
    );
    rules.extend(DATE_COLUMNS.into_iter().map(|(source, target)| ScalarRule {
        source: ColumnName::from_static(source),
        target: ColumnName::from_static(target),
        kind: ScalarKind::Date,
    }));
    rules
}

/// Applies every rule whose source column survived projection.
pub fn normalize_scalars(table: &mut Table, config: &PipelineConfig, report: &mut PipelineReport) {
    let rules: Vec<ScalarRule> = scalar_rules()
        .into_iter()
        .filter(|rule| table.columns.contains(&rule.source))
        .collect();

    for row in &mut table.rows {
        for rule in &rules {
            apply_rule(row, rule, &config.date_format, report);
        }
    }

    for rule in &rules {
        if let Some(column) = table.columns.iter_mut().find(|c| **c == rule.source) {
            *column = rule.target.clone();
        }
    }
}

fn apply_rule(row: &mut Row, rule: &ScalarRule, date_format: &str, report: &mut PipelineReport) {
    let Some(cell) = row.cells.remove(rule.source.as_str()) else {
        return;
    };
    let value = match cell {
        CellValue::Text(text) => match parse_cell(&text, rule.kind, date_format) {
            Some(value) => value,
            None => {
                report.record_parse_failure(rule.target.as_str());
                CellValue::Missing
            }
        },
        other => other,
    };
    row.set(rule.target.clone(), value);
}

fn parse_cell(text: &str, kind: ScalarKind, date_format: &str) -> Option<CellValue> {
    match kind {
        ScalarKind::LeadingInteger => leading_integer(text).map(CellValue::Integer),
        ScalarKind::Numeric => parse_numeric(text).map(CellValue::Float),
        ScalarKind::Date => parse_date(text, date_format).map(CellValue::Date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table_with(cells: &[(&'static str, &str)]) -> Table {
        let mut table = Table::new(
            cells
                .iter()
                .map(|(name, _)| ColumnName::from_static(*name))
                .collect(),
        );
        let mut row = Row::new(1);
        for (name, value) in cells {
            row.set(ColumnName::from_static(*name), CellValue::from_raw(value));
        }
        table.push_row(row);
        table
    }

    #[test]
    fn term_without_digits_is_missing() {
        let mut table = table_with(&[(col::TERM, "months")]);
        let mut report = PipelineReport::default();
        normalize_scalars(&mut table, &PipelineConfig::default(), &mut report);

        assert!(table.rows[0].is_missing(col::TERM));
        assert_eq!(report.parse_failures.get(col::TERM), Some(&1));
    }

    #[test]
    fn dates_move_to_target_columns() {
        let mut table = table_with(&[
            (col::ISSUE_D, "15-06-2015"),
            (col::LAST_PYMNT_D, "Jun-2016"),
        ]);
        let mut report = PipelineReport::default();
        normalize_scalars(&mut table, &PipelineConfig::default(), &mut report);

        let row = &table.rows[0];
        assert_eq!(
            row.get(col::ISSUE_DATE).as_date(),
            NaiveDate::from_ymd_opt(2015, 6, 15)
        );
        assert!(row.is_missing(col::ISSUE_D));
        assert!(row.is_missing(col::LAST_PAYMENT_DATE));
        assert!(table.columns.iter().any(|c| c.as_str() == col::ISSUE_DATE));
        assert_eq!(report.parse_failures.get(col::LAST_PAYMENT_DATE), Some(&1));
    }

    #[test]
    fn missing_cells_are_not_failures() {
        let mut table = table_with(&[(col::DTI, ""), (col::INT_RATE, "13.56%")]);
        let mut report = PipelineReport::default();
        normalize_scalars(&mut table, &PipelineConfig::default(), &mut report);

        assert!(table.rows[0].is_missing(col::DTI));
        assert_eq!(table.rows[0].get(col::INT_RATE), &CellValue::Float(13.56));
        assert_eq!(report.total_parse_failures(), 0);
    }

    #[test]
    fn rule_set_covers_numeric_and_date_columns() {
        let rules = scalar_rules();
        assert_eq!(rules.len(), 1 + NUMERIC_COLUMNS.len() + DATE_COLUMNS.len());
        assert_eq!(rules[0].kind, ScalarKind::LeadingInteger);
    }
}
