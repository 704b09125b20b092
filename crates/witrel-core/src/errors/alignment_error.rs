//! Alignment collaborator errors.

use super::error_code::{self, WitrelErrorCode};

/// Errors raised while preparing witness text for alignment or while the
/// aligner runs.
#[derive(Debug, thiserror::Error)]
pub enum AlignmentError {
    #[error("No witnesses supplied for alignment")]
    EmptyWitnessSet,

    #[error("Witness {siglum} has {found} paragraphs, expected {expected}")]
    ParagraphCountMismatch {
        siglum: String,
        expected: usize,
        found: usize,
    },

    #[error("Paragraph range {first}..{last} is invalid for {available} paragraphs")]
    InvalidRange {
        first: usize,
        last: usize,
        available: usize,
    },

    #[error("Aligner failed on paragraph {paragraph}: {message}")]
    AlignerFailed { paragraph: usize, message: String },
}

impl WitrelErrorCode for AlignmentError {
    fn error_code(&self) -> &'static str {
        error_code::ALIGNMENT_ERROR
    }
}
