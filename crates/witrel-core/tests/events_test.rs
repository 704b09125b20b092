//! Tests for the event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use witrel_core::events::*;

#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    progress: AtomicUsize,
    observed: AtomicUsize,
    complete: AtomicUsize,
}

impl PipelineEventHandler for CountingHandler {
    fn on_run_started(&self, _event: &RunStartedEvent) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_classification_progress(&self, _event: &ClassificationProgressEvent) {
        self.progress.fetch_add(1, Ordering::Relaxed);
    }

    fn on_pattern_observed(&self, _event: &PatternObservedEvent) {
        self.observed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_run_complete(&self, _event: &RunCompleteEvent) {
        self.complete.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn test_handler_noop_defaults() {
    struct NoopHandler;
    impl PipelineEventHandler for NoopHandler {}

    let handler = NoopHandler;
    handler.on_run_started(&RunStartedEvent { witness_count: 4, segment_count: 10 });
    handler.on_error(&ErrorEvent { message: "x".into(), error_code: "NO_DATA".into() });
}

#[test]
fn test_dispatcher_fans_out() {
    let a = Arc::new(CountingHandler::default());
    let b = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_run_started(&RunStartedEvent { witness_count: 4, segment_count: 10 });
    dispatcher.emit_classification_progress(&ClassificationProgressEvent { processed: 5, total: 10 });
    dispatcher.emit_pattern_observed(&PatternObservedEvent { label: "AABB".into(), segment_index: 2 });
    dispatcher.emit_run_complete(&RunCompleteEvent {
        total_segments: 10,
        agreeing_segments: 6,
        distinct_patterns: 2,
        duration_ms: 1,
    });

    for handler in [&a, &b] {
        assert_eq!(handler.started.load(Ordering::Relaxed), 1);
        assert_eq!(handler.progress.load(Ordering::Relaxed), 1);
        assert_eq!(handler.observed.load(Ordering::Relaxed), 1);
        assert_eq!(handler.complete.load(Ordering::Relaxed), 1);
    }
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    struct PanickingHandler;
    impl PipelineEventHandler for PanickingHandler {
        fn on_run_started(&self, _event: &RunStartedEvent) {
            panic!("boom");
        }
    }

    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_run_started(&RunStartedEvent { witness_count: 2, segment_count: 1 });
    assert_eq!(counter.started.load(Ordering::Relaxed), 1);
}

#[test]
fn test_empty_dispatcher_is_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_cache_miss(&CacheMissEvent { key: "k".into(), forced: true });
}
