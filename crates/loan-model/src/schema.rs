//! Fixed schema of the loan feature table.
//!
//! These constants are the defaults behind [`crate::PipelineConfig`]. The
//! column-name constants in [`col`] are used by the transform stages so that
//! each derivation names its inputs and outputs in one place.

use crate::{CellValue, ColumnType, FicoBucket};

/// Column names referenced by the pipeline stages.
pub mod col {
    pub const ID: &str = "id";
    pub const LOAN_AMNT: &str = "loan_amnt";
    pub const FUNDED_AMNT: &str = "funded_amnt";
    pub const TERM: &str = "term";
    pub const INT_RATE: &str = "int_rate";
    pub const INSTALLMENT: &str = "installment";
    pub const GRADE: &str = "grade";
    pub const SUB_GRADE: &str = "sub_grade";
    pub const EMP_LENGTH: &str = "emp_length";
    pub const HOME_OWNERSHIP: &str = "home_ownership";
    pub const ANNUAL_INC: &str = "annual_inc";
    pub const VERIFICATION_STATUS: &str = "verification_status";
    pub const ISSUE_D: &str = "issue_d";
    pub const LOAN_STATUS: &str = "loan_status";
    pub const PURPOSE: &str = "purpose";
    pub const ADDR_STATE: &str = "addr_state";
    pub const DTI: &str = "dti";
    pub const DELINQ_2YRS: &str = "delinq_2yrs";
    pub const EARLIEST_CR_LINE: &str = "earliest_cr_line";
    pub const FICO_RANGE_LOW: &str = "fico_range_low";
    pub const FICO_RANGE_HIGH: &str = "fico_range_high";
    pub const OPEN_ACC: &str = "open_acc";
    pub const PUB_REC: &str = "pub_rec";
    pub const REVOL_UTIL: &str = "revol_util";
    pub const PUB_REC_BANKRUPTCIES: &str = "pub_rec_bankruptcies";
    pub const LAST_PYMNT_D: &str = "last_pymnt_d";

    pub const ISSUE_DATE: &str = "issue_date";
    pub const EARLIEST_CREDIT_LINE: &str = "earliest_credit_line";
    pub const LAST_PAYMENT_DATE: &str = "last_payment_date";
    pub const EMP_LENGTH_YEARS: &str = "emp_length_years";
    pub const LOAN_STATUS_GROUP: &str = "loan_status_group";
    pub const LOAN_VINTAGE_YEAR: &str = "loan_vintage_year";
    pub const LOAN_VINTAGE_MONTH: &str = "loan_vintage_month";
    pub const CREDIT_HISTORY_MONTHS: &str = "credit_history_months";
    pub const FICO_BUCKET: &str = "fico_bucket";
}

/// Source columns the pipeline reads. Anything else in the input is dropped.
pub const INPUT_COLUMNS: [&str; 26] = [
    col::ID,
    col::LOAN_AMNT,
    col::FUNDED_AMNT,
    col::TERM,
    col::INT_RATE,
    col::INSTALLMENT,
    col::GRADE,
    col::SUB_GRADE,
    col::EMP_LENGTH,
    col::HOME_OWNERSHIP,
    col::ANNUAL_INC,
    col::VERIFICATION_STATUS,
    col::ISSUE_D,
    col::LOAN_STATUS,
    col::PURPOSE,
    col::ADDR_STATE,
    col::DTI,
    col::DELINQ_2YRS,
    col::EARLIEST_CR_LINE,
    col::FICO_RANGE_LOW,
    col::FICO_RANGE_HIGH,
    col::OPEN_ACC,
    col::PUB_REC,
    col::REVOL_UTIL,
    col::PUB_REC_BANKRUPTCIES,
    col::LAST_PYMNT_D,
];

/// Source columns coerced to floats during scalar normalization.
pub const NUMERIC_COLUMNS: [&str; 13] = [
    col::LOAN_AMNT,
    col::FUNDED_AMNT,
    col::INT_RATE,
    col::INSTALLMENT,
    col::ANNUAL_INC,
    col::DTI,
    col::DELINQ_2YRS,
    col::FICO_RANGE_LOW,
    col::FICO_RANGE_HIGH,
    col::OPEN_ACC,
    col::PUB_REC,
    col::REVOL_UTIL,
    col::PUB_REC_BANKRUPTCIES,
];

/// Date columns as `(source, target)` pairs.
pub const DATE_COLUMNS: [(&str, &str); 3] = [
    (col::ISSUE_D, col::ISSUE_DATE),
    (col::EARLIEST_CR_LINE, col::EARLIEST_CREDIT_LINE),
    (col::LAST_PYMNT_D, col::LAST_PAYMENT_DATE),
];

/// Day-month-year, e.g. `15-06-2015`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Rows missing any of these after default filling are dropped.
pub const REQUIRED_COLUMNS: [&str; 2] = [col::ISSUE_DATE, col::LOAN_AMNT];

pub const DEFAULT_FILL: [(&str, CellValue); 5] = [
    (col::EMP_LENGTH_YEARS, CellValue::Float(0.0)),
    (col::DTI, CellValue::Float(0.0)),
    (col::REVOL_UTIL, CellValue::Float(0.0)),
    (col::PUB_REC_BANKRUPTCIES, CellValue::Float(0.0)),
    (col::CREDIT_HISTORY_MONTHS, CellValue::Integer(0)),
];

/// `(lower, upper]` score ranges for each bucket.
pub const FICO_BINS: [(f64, f64, FicoBucket); 4] = [
    (0.0, 639.0, FicoBucket::Poor),
    (639.0, 699.0, FicoBucket::Fair),
    (699.0, 749.0, FicoBucket::Good),
    (749.0, 900.0, FicoBucket::Excellent),
];

/// Output columns in file order.
pub const OUTPUT_SCHEMA: [(&str, ColumnType); 29] = [
    (col::ID, ColumnType::Text),
    (col::LOAN_AMNT, ColumnType::Float),
    (col::FUNDED_AMNT, ColumnType::Float),
    (col::TERM, ColumnType::Integer),
    (col::INT_RATE, ColumnType::Float),
    (col::GRADE, ColumnType::Text),
    (col::SUB_GRADE, ColumnType::Text),
    (col::EMP_LENGTH_YEARS, ColumnType::Float),
    (col::HOME_OWNERSHIP, ColumnType::Text),
    (col::ANNUAL_INC, ColumnType::Float),
    (col::VERIFICATION_STATUS, ColumnType::Text),
    (col::ISSUE_DATE, ColumnType::Date),
    (col::LOAN_STATUS_GROUP, ColumnType::Category),
    (col::PURPOSE, ColumnType::Text),
    (col::ADDR_STATE, ColumnType::Text),
    (col::DTI, ColumnType::Float),
    (col::DELINQ_2YRS, ColumnType::Float),
    (col::EARLIEST_CREDIT_LINE, ColumnType::Date),
    (col::CREDIT_HISTORY_MONTHS, ColumnType::Integer),
    (col::FICO_RANGE_LOW, ColumnType::Float),
    (col::FICO_RANGE_HIGH, ColumnType::Float),
    (col::FICO_BUCKET, ColumnType::Category),
    (col::OPEN_ACC, ColumnType::Float),
    (col::PUB_REC, ColumnType::Float),
    (col::REVOL_UTIL, ColumnType::Float),
    (col::PUB_REC_BANKRUPTCIES, ColumnType::Float),
    (col::LAST_PAYMENT_DATE, ColumnType::Date),
    (col::LOAN_VINTAGE_YEAR, ColumnType::Integer),
    (col::LOAN_VINTAGE_MONTH, ColumnType::Text),
];

/// Where an output column comes from, for the schema listing.
pub fn output_column_source(name: &str) -> &'static str {
    match name {
        col::TERM => "term (leading integer)",
        col::ISSUE_DATE => "issue_d",
        col::EARLIEST_CREDIT_LINE => "earliest_cr_line",
        col::LAST_PAYMENT_DATE => "last_pymnt_d",
        col::EMP_LENGTH_YEARS => "emp_length",
        col::LOAN_STATUS_GROUP => "loan_status",
        col::LOAN_VINTAGE_YEAR | col::LOAN_VINTAGE_MONTH => "issue_date",
        col::CREDIT_HISTORY_MONTHS => "earliest_credit_line, issue_date",
        col::FICO_BUCKET => "fico_range_low",
        _ if NUMERIC_COLUMNS.contains(&name) => "numeric coercion",
        _ => "passthrough",
    }
}
