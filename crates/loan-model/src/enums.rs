//! Closed enumerations for column types and derived categories.
//!
//! The derived categorical columns (`loan_status_group`, `fico_bucket`) are
//! modelled as enums rather than free strings so that "always one of N labels"
//! holds by construction. Labels are what gets written to the output file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Declared type of a column in the typed table schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Whole numbers (`term`, `loan_vintage_year`, `credit_history_months`).
    Integer,
    /// Floating point numerics (amounts, rates, counts as read from source).
    Float,
    /// Free text and raw categorical codes passed through unchanged.
    Text,
    /// Calendar dates.
    Date,
    /// Closed derived categories.
    Category,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "Integer",
            ColumnType::Float => "Float",
            ColumnType::Text => "Text",
            ColumnType::Date => "Date",
            ColumnType::Category => "Category",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome grouping of the raw `loan_status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoanStatusGroup {
    /// Raw status "Fully Paid".
    PaidOff,
    /// Raw status "Charged Off".
    Defaulted,
    /// Every other raw status, including a missing one.
    InProgress,
}

impl LoanStatusGroup {
    pub const ALL: [LoanStatusGroup; 3] = [
        LoanStatusGroup::PaidOff,
        LoanStatusGroup::Defaulted,
        LoanStatusGroup::InProgress,
    ];

    /// Groups a raw status value. Matching is exact; there is no
    /// case-folding, so "fully paid" lands in `InProgress`.
    pub fn from_raw_status(status: Option<&str>) -> Self {
        match status {
            Some("Fully Paid") => LoanStatusGroup::PaidOff,
            Some("Charged Off") => LoanStatusGroup::Defaulted,
            _ => LoanStatusGroup::InProgress,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatusGroup::PaidOff => "Paid Off",
            LoanStatusGroup::Defaulted => "Default",
            LoanStatusGroup::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for LoanStatusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal credit-score tier derived from `fico_range_low`.
///
/// Serialized by label; labels parse case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FicoBucket {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl FicoBucket {
    pub const ALL: [FicoBucket; 4] = [
        FicoBucket::Poor,
        FicoBucket::Fair,
        FicoBucket::Good,
        FicoBucket::Excellent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FicoBucket::Poor => "Poor",
            FicoBucket::Fair => "Fair",
            FicoBucket::Good => "Good",
            FicoBucket::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for FicoBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FicoBucket {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FicoBucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownCategory {
                kind: "fico bucket",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for FicoBucket {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FicoBucket> for String {
    fn from(value: FicoBucket) -> Self {
        value.as_str().to_string()
    }
}

/// A value of one of the closed derived categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    LoanStatus(LoanStatusGroup),
    Fico(FicoBucket),
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LoanStatus(group) => group.as_str(),
            Category::Fico(bucket) => bucket.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_grouping_is_exact() {
        assert_eq!(
            LoanStatusGroup::from_raw_status(Some("Fully Paid")),
            LoanStatusGroup::PaidOff
        );
        assert_eq!(
            LoanStatusGroup::from_raw_status(Some("Charged Off")),
            LoanStatusGroup::Defaulted
        );
        assert_eq!(
            LoanStatusGroup::from_raw_status(Some("fully paid")),
            LoanStatusGroup::InProgress
        );
        assert_eq!(
            LoanStatusGroup::from_raw_status(None),
            LoanStatusGroup::InProgress
        );
    }

    #[test]
    fn bucket_labels_parse_back() {
        for bucket in FicoBucket::ALL {
            assert_eq!(bucket.to_string().parse::<FicoBucket>().unwrap(), bucket);
        }
        assert_eq!(" excellent ".parse::<FicoBucket>().unwrap(), FicoBucket::Excellent);
    }

    #[test]
    fn unknown_bucket_label_is_an_error() {
        assert!(matches!(
            "Superb".parse::<FicoBucket>(),
            Err(ModelError::UnknownCategory { kind: "fico bucket", .. })
        ));
    }
}
