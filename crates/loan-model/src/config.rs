//! Pipeline configuration.
//!
//! Everything the pipeline treats as fixed lives here and is handed to the
//! pipeline entry point explicitly. [`PipelineConfig::default`] reproduces the
//! built-in schema from [`crate::schema`]; a JSON file can override any part.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::schema::{
    DATE_FORMAT, DEFAULT_FILL, FICO_BINS, INPUT_COLUMNS, OUTPUT_SCHEMA, REQUIRED_COLUMNS,
};
use crate::{CellValue, ColumnName, ColumnType, FicoBucket, ModelError, Result};

/// One `(lower_exclusive, upper_inclusive]` score range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FicoBin {
    pub lower_exclusive: f64,
    pub upper_inclusive: f64,
    pub bucket: FicoBucket,
}

impl FicoBin {
    pub fn contains(&self, score: f64) -> bool {
        score > self.lower_exclusive && score <= self.upper_inclusive
    }
}

/// A column of the output schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputColumn {
    pub name: ColumnName,
    pub column_type: ColumnType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Allow-list of source columns; each one must be present in the input.
    pub input_columns: Vec<ColumnName>,
    /// `chrono` format string for the three date columns.
    pub date_format: String,
    pub fico_bins: Vec<FicoBin>,
    /// Column → value substituted for missing cells before the required-column filter.
    pub default_fill: BTreeMap<ColumnName, CellValue>,
    /// Columns that must be non-missing for a row to survive.
    pub required_columns: Vec<ColumnName>,
    pub output_schema: Vec<OutputColumn>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_columns: INPUT_COLUMNS
                .into_iter()
                .map(ColumnName::from_static)
                .collect(),
            date_format: DATE_FORMAT.to_string(),
            fico_bins: FICO_BINS
                .into_iter()
                .map(|(lower_exclusive, upper_inclusive, bucket)| FicoBin {
                    lower_exclusive,
                    upper_inclusive,
                    bucket,
                })
                .collect(),
            default_fill: DEFAULT_FILL
                .into_iter()
                .map(|(name, value)| (ColumnName::from_static(name), value))
                .collect(),
            required_columns: REQUIRED_COLUMNS
                .into_iter()
                .map(ColumnName::from_static)
                .collect(),
            output_schema: OUTPUT_SCHEMA
                .into_iter()
                .map(|(name, column_type)| OutputColumn {
                    name: ColumnName::from_static(name),
                    column_type,
                })
                .collect(),
        }
    }
}

impl PipelineConfig {
    /// Parse a JSON override. Fields left out keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Bucket for a score, `None` when the score is missing or outside every bin.
    pub fn fico_bucket(&self, score: Option<f64>) -> Option<FicoBucket> {
        let score = score?;
        self.fico_bins
            .iter()
            .find(|bin| bin.contains(score))
            .map(|bin| bin.bucket)
    }

    pub fn output_column(&self, name: &str) -> Option<&OutputColumn> {
        self.output_schema
            .iter()
            .find(|column| column.name.as_str() == name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_columns.is_empty() {
            return Err(invalid("input column list is empty"));
        }
        if self.date_format.trim().is_empty() {
            return Err(invalid("date format is empty"));
        }
        if self.output_schema.is_empty() {
            return Err(invalid("output schema is empty"));
        }

        let mut seen = BTreeSet::new();
        for column in &self.output_schema {
            if !seen.insert(column.name.as_str()) {
                return Err(invalid(format!(
                    "output column {} is listed twice",
                    column.name
                )));
            }
        }

        let mut bins = self.fico_bins.clone();
        bins.sort_by(|a, b| a.lower_exclusive.total_cmp(&b.lower_exclusive));
        for bin in &bins {
            if bin.lower_exclusive >= bin.upper_inclusive {
                return Err(invalid(format!(
                    "fico bin for {} has lower edge {} not below upper edge {}",
                    bin.bucket, bin.lower_exclusive, bin.upper_inclusive
                )));
            }
        }
        for pair in bins.windows(2) {
            if pair[1].lower_exclusive < pair[0].upper_inclusive {
                return Err(invalid(format!(
                    "fico bins for {} and {} overlap",
                    pair[0].bucket, pair[1].bucket
                )));
            }
        }

        for (name, value) in &self.default_fill {
            let column = self.output_column(name.as_str()).ok_or_else(|| {
                invalid(format!("default-fill column {name} is not an output column"))
            })?;
            if value.is_missing() || !value.fits(column.column_type) {
                return Err(invalid(format!(
                    "default for {name} does not match column type {}",
                    column.column_type
                )));
            }
        }

        for name in &self.required_columns {
            if self.output_column(name.as_str()).is_none() {
                return Err(invalid(format!(
                    "required column {name} is not an output column"
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ModelError {
    ModelError::InvalidConfig(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PipelineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.input_columns.len(), 26);
        assert_eq!(config.output_schema.len(), 29);
        assert_eq!(config.default_fill.len(), 5);
    }

    #[test]
    fn bins_are_left_open_right_closed() {
        let config = PipelineConfig::default();
        assert_eq!(config.fico_bucket(Some(639.0)), Some(FicoBucket::Poor));
        assert_eq!(config.fico_bucket(Some(639.5)), Some(FicoBucket::Fair));
        assert_eq!(config.fico_bucket(Some(0.0)), None);
        assert_eq!(config.fico_bucket(Some(900.0)), Some(FicoBucket::Excellent));
        assert_eq!(config.fico_bucket(Some(900.5)), None);
        assert_eq!(config.fico_bucket(None), None);
    }

    #[test]
    fn overlapping_bins_are_rejected() {
        let mut config = PipelineConfig::default();
        config.fico_bins[1].lower_exclusive = 600.0;
        assert!(matches!(
            config.validate(),
            Err(ModelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn fill_default_must_match_column_type() {
        let mut config = PipelineConfig::default();
        config.default_fill.insert(
            ColumnName::new("dti").unwrap(),
            CellValue::Text("none".to_string()),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PipelineConfig::from_json_str(r#"{"date_format": "%Y-%m-%d"}"#).unwrap();
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.input_columns.len(), 26);
    }

    #[test]
    fn fico_bin_labels_are_case_insensitive() {
        let json = r#"{"fico_bins": [
            {"lower_exclusive": 300.0, "upper_inclusive": 700.0, "bucket": "fair"},
            {"lower_exclusive": 700.0, "upper_inclusive": 850.0, "bucket": "GOOD"}
        ]}"#;
        let config = PipelineConfig::from_json_str(json).unwrap();
        assert_eq!(config.fico_bucket(Some(650.0)), Some(FicoBucket::Fair));
        assert_eq!(config.fico_bucket(Some(800.0)), Some(FicoBucket::Good));

        let unknown = json.replace("GOOD", "Superb");
        let err = PipelineConfig::from_json_str(&unknown).unwrap_err();
        assert!(matches!(err, ModelError::ConfigParse(_)));
        assert!(err.to_string().contains("unknown fico bucket label"));
    }
}
