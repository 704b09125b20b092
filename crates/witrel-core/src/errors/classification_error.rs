//! Classification errors.

use super::error_code::{self, WitrelErrorCode};

/// Errors raised by the alphabet generator and segment classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("Witness count {count} is outside the supported range {min}..={max}")]
    InvalidWitnessCount { count: usize, min: usize, max: usize },

    #[error("Segment has {found} readings, expected {expected}")]
    SegmentWidth { expected: usize, found: usize },

    #[error("Invalid pattern label {label:?}: {message}")]
    InvalidLabel { label: String, message: String },

    /// Internal invariant violation: classification always yields a label
    /// inside the alphabet, so reaching this is a defect.
    #[error("Pattern label {label} is not part of the alphabet for {witnesses} witnesses")]
    UnmappedLabel { label: String, witnesses: usize },
}

impl WitrelErrorCode for ClassificationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidWitnessCount { .. } => error_code::INVALID_WITNESS_COUNT,
            Self::SegmentWidth { .. } => error_code::MALFORMED_SEGMENT,
            Self::InvalidLabel { .. } => error_code::INVALID_LABEL,
            Self::UnmappedLabel { .. } => error_code::UNMAPPED_LABEL,
        }
    }
}
