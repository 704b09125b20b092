//! Progress event system: an observational side channel for pipeline runs.
//! Handlers never influence results.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::PipelineEventHandler;
pub use types::*;
