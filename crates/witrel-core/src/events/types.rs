//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub witness_count: usize,
    pub segment_count: usize,
}

/// Payload for `on_classification_progress`.
#[derive(Debug, Clone)]
pub struct ClassificationProgressEvent {
    pub processed: usize,
    pub total: usize,
}

/// Payload for `on_pattern_observed`, fired the first time a label is seen.
#[derive(Debug, Clone)]
pub struct PatternObservedEvent {
    pub label: String,
    pub segment_index: usize,
}

/// Payload for `on_run_complete`.
#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub total_segments: usize,
    pub agreeing_segments: usize,
    pub distinct_patterns: usize,
    pub duration_ms: u64,
}

/// Payload for `on_cache_hit`.
#[derive(Debug, Clone)]
pub struct CacheHitEvent {
    pub key: String,
    pub path: PathBuf,
}

/// Payload for `on_cache_miss`.
#[derive(Debug, Clone)]
pub struct CacheMissEvent {
    pub key: String,
    pub forced: bool,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
