//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::PipelineEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// With no handlers registered, `emit` iterates over an empty Vec.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn PipelineEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn PipelineEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not stop later handlers from receiving the event.
    fn emit<F: Fn(&dyn PipelineEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!("event handler panicked; continuing");
            }
        }
    }

    // ---- Run Lifecycle ----
    pub fn emit_run_started(&self, event: &RunStartedEvent) {
        self.emit(|h| h.on_run_started(event));
    }

    pub fn emit_classification_progress(&self, event: &ClassificationProgressEvent) {
        self.emit(|h| h.on_classification_progress(event));
    }

    pub fn emit_pattern_observed(&self, event: &PatternObservedEvent) {
        self.emit(|h| h.on_pattern_observed(event));
    }

    pub fn emit_run_complete(&self, event: &RunCompleteEvent) {
        self.emit(|h| h.on_run_complete(event));
    }

    // ---- Cache ----
    pub fn emit_cache_hit(&self, event: &CacheHitEvent) {
        self.emit(|h| h.on_cache_hit(event));
    }

    pub fn emit_cache_miss(&self, event: &CacheMissEvent) {
        self.emit(|h| h.on_cache_miss(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
