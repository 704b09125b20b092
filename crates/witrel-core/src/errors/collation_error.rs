//! Collation table errors: malformed input from the alignment collaborator.

use super::error_code::{self, WitrelErrorCode};

/// Errors raised while loading or validating a collation table.
#[derive(Debug, thiserror::Error)]
pub enum CollationError {
    #[error("Segment {index} has {found} cells, expected {expected}")]
    MalformedSegment {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Table declares {expected} witnesses but {found} were supplied")]
    WitnessCountMismatch { expected: usize, found: usize },

    #[error("Collation JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read collation {path}: {message}")]
    Io { path: String, message: String },
}

impl WitrelErrorCode for CollationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedSegment { .. } => error_code::MALFORMED_SEGMENT,
            Self::WitnessCountMismatch { .. } => error_code::WITNESS_MISMATCH,
            Self::Parse(_) => error_code::COLLATION_PARSE_ERROR,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
