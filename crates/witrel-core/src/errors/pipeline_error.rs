//! Pipeline errors.

use super::error_code::{self, WitrelErrorCode};
use super::{
    AggregationError, AlignmentError, CacheError, ClassificationError, CollationError,
    ConfigError,
};

/// Errors that can occur during a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Collation error: {0}")]
    Collation(#[from] CollationError),

    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Alignment error: {0}")]
    Alignment(#[from] AlignmentError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Pipeline cancelled")]
    Cancelled,
}

impl PipelineError {
    /// True for the empty-table condition.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::Aggregation(AggregationError::NoData))
    }
}

impl WitrelErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Collation(e) => e.error_code(),
            Self::Classification(e) => e.error_code(),
            Self::Aggregation(e) => e.error_code(),
            Self::Alignment(e) => e.error_code(),
            Self::Cache(e) => e.error_code(),
            Self::Report(_) => error_code::REPORT_ERROR,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
