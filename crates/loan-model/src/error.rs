use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid column name: {0:?}")]
    InvalidColumnName(String),
    #[error("unknown {kind} label: {value:?}")]
    UnknownCategory { kind: &'static str, value: String },
    #[error("invalid pipeline config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse pipeline config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
