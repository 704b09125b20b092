//! Collation cache errors.

use super::error_code::{self, WitrelErrorCode};

/// Errors raised while reading or writing cached collation tables.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache I/O failed at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Cached table at {path} could not be (de)serialized: {message}")]
    Serialization { path: String, message: String },
}

impl WitrelErrorCode for CacheError {
    fn error_code(&self) -> &'static str {
        error_code::CACHE_ERROR
    }
}
