//! Aggregation errors.

use super::error_code::{self, WitrelErrorCode};

/// Errors raised while turning labels into frequencies.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("No data to classify: the collation table has no segments")]
    NoData,
}

impl WitrelErrorCode for AggregationError {
    fn error_code(&self) -> &'static str {
        error_code::NO_DATA
    }
}
