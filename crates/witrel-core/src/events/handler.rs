//! PipelineEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing pipeline runs.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. `Send + Sync` because parallel
/// classification reports progress from worker threads.
pub trait PipelineEventHandler: Send + Sync {
    // ---- Run Lifecycle ----
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_classification_progress(&self, _event: &ClassificationProgressEvent) {}
    fn on_pattern_observed(&self, _event: &PatternObservedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}

    // ---- Cache ----
    fn on_cache_hit(&self, _event: &CacheHitEvent) {}
    fn on_cache_miss(&self, _event: &CacheMissEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
