use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read summary data from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid summary data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid pattern for field {field}")]
    Pattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid commitment threshold {value}, expected a percentage in (0, 100]")]
    ThresholdOutOfRange { value: f64 },

    #[error("rows per page must be at least 1")]
    ZeroRowsPerPage,

    #[error("invalid monthly income {value:?}")]
    InvalidIncome { value: String },
}
