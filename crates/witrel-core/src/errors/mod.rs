//! Error handling for the witness relationship engine.
//! One error enum per subsystem, `thiserror` only.

pub mod aggregation_error;
pub mod alignment_error;
pub mod cache_error;
pub mod classification_error;
pub mod collation_error;
pub mod config_error;
pub mod error_code;
pub mod pipeline_error;

pub use aggregation_error::AggregationError;
pub use alignment_error::AlignmentError;
pub use cache_error::CacheError;
pub use classification_error::ClassificationError;
pub use collation_error::CollationError;
pub use config_error::ConfigError;
pub use error_code::WitrelErrorCode;
pub use pipeline_error::PipelineError;
