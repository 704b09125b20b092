//! Observability: `tracing` with an `EnvFilter` read from `WITREL_LOG`.

pub mod metrics;
pub mod setup;

pub use setup::{init_tracing, init_tracing_with_default, verbosity_filter};
