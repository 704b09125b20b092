//! # witrel-core
//!
//! Foundation crate for the witness relationship engine.
//! Defines the collation data model, errors, config, events, tracing, and
//! constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{RunConfig, WitrelConfig};
pub use errors::{PipelineError, WitrelErrorCode};
pub use types::{Cell, CollationTable, PatternLabel, Reading, Segment, Witness};
