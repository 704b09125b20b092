//! WitrelErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait WitrelErrorCode {
    /// Returns the error code string (e.g., "NO_DATA").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MALFORMED_SEGMENT: &str = "MALFORMED_SEGMENT";
pub const WITNESS_MISMATCH: &str = "WITNESS_MISMATCH";
pub const COLLATION_PARSE_ERROR: &str = "COLLATION_PARSE_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const INVALID_WITNESS_COUNT: &str = "INVALID_WITNESS_COUNT";
pub const INVALID_LABEL: &str = "INVALID_LABEL";
pub const UNMAPPED_LABEL: &str = "UNMAPPED_LABEL";
pub const NO_DATA: &str = "NO_DATA";
pub const ALIGNMENT_ERROR: &str = "ALIGNMENT_ERROR";
pub const CACHE_ERROR: &str = "CACHE_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const CANCELLED: &str = "CANCELLED";
