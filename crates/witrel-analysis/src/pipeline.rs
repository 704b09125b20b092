//! End-to-end run: classify every segment, tally labels, rank them.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};
use witrel_core::constants::PROGRESS_INTERVAL;
use witrel_core::errors::{AggregationError, CollationError, PipelineError, WitrelErrorCode};
use witrel_core::events::types::{
    ClassificationProgressEvent, ErrorEvent, PatternObservedEvent, RunCompleteEvent,
    RunStartedEvent,
};
use witrel_core::events::EventDispatcher;
use witrel_core::tracing::metrics;
use witrel_core::traits::{Cancellable, CancellationToken};
use witrel_core::{CollationTable, RunConfig, Segment, WitrelConfig};

use crate::patterns::{
    Classification, FrequencyAggregator, FrequencyTable, PatternTally, RankedResult, Ranker,
    SegmentClassifier,
};

/// Counts describing one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    pub total_segments: usize,
    pub agreeing_segments: usize,
    pub informative_segments: usize,
    pub distinct_patterns: usize,
}

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantReport {
    pub run: RunConfig,
    pub ranked: RankedResult,
    pub frequencies: FrequencyTable,
    pub statistics: RunStatistics,
}

impl VariantReport {
    /// Copy of the report with the ranking cut to its `top` entries.
    /// Statistics and frequencies still describe the whole table.
    pub fn truncated(&self, top: Option<usize>) -> VariantReport {
        let mut report = self.clone();
        if let Some(k) = top {
            report.ranked = report.ranked.top(k);
        }
        report
    }
}

/// Runs the variant-pattern engine over a collation table.
///
/// Sequential and sharded runs produce identical reports: shard tallies are
/// merged in shard order, so first-observed order survives.
#[derive(Debug, Clone)]
pub struct VariantPipeline {
    run: RunConfig,
    classifier: SegmentClassifier,
    aggregator: FrequencyAggregator,
    ranker: Ranker,
    shard_size: Option<usize>,
    events: EventDispatcher,
    cancellation: CancellationToken,
}

impl VariantPipeline {
    pub fn new(run: RunConfig) -> Result<Self, PipelineError> {
        let classifier = SegmentClassifier::for_run(&run)?;
        let aggregator = FrequencyAggregator::new(run.precision());
        Ok(Self {
            run,
            classifier,
            aggregator,
            ranker: Ranker::new(),
            shard_size: None,
            events: EventDispatcher::new(),
            cancellation: CancellationToken::new(),
        })
    }

    /// Pipeline for `table` under the resolved configuration.
    pub fn from_config(config: &WitrelConfig, table: &CollationTable) -> Result<Self, PipelineError> {
        if table.is_empty() {
            return Err(AggregationError::NoData.into());
        }
        let pipeline = Self::new(RunConfig::for_table(config, table)?)?;
        if config.ranking.effective_parallel() {
            Ok(pipeline.with_parallel(config.ranking.effective_shard_size()))
        } else {
            Ok(pipeline)
        }
    }

    /// Classify in shards of `shard_size` segments on the rayon pool.
    pub fn with_parallel(mut self, shard_size: usize) -> Self {
        self.shard_size = Some(shard_size.max(1));
        self
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn run_config(&self) -> &RunConfig {
        &self.run
    }

    pub fn is_parallel(&self) -> bool {
        self.shard_size.is_some()
    }

    /// Label every segment of `table`, in document order.
    pub fn classify_table(&self, table: &CollationTable) -> Result<Vec<Classification>, PipelineError> {
        self.check_width(table)?;
        let sentinel = self.run.absent_sentinel();
        let labeled = table
            .segments()
            .iter()
            .map(|s| self.classifier.classify_segment(s, sentinel))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(labeled)
    }

    /// Classify, aggregate and rank `table`.
    pub fn run(&self, table: &CollationTable) -> Result<VariantReport, PipelineError> {
        let result = self.run_inner(table);
        if let Err(e) = &result {
            self.events.emit_error(&ErrorEvent {
                message: e.to_string(),
                error_code: e.error_code().to_string(),
            });
        }
        result
    }

    fn run_inner(&self, table: &CollationTable) -> Result<VariantReport, PipelineError> {
        if table.is_empty() {
            warn!("collation table has no segments");
            return Err(AggregationError::NoData.into());
        }
        self.check_width(table)?;

        let start = Instant::now();
        let total = table.len();
        info!(
            { metrics::WITNESS_COUNT } = self.run.witness_count(),
            { metrics::SEGMENT_COUNT } = total,
            { metrics::PARALLEL } = self.is_parallel(),
            "classifying collation"
        );
        self.events.emit_run_started(&RunStartedEvent {
            witness_count: self.run.witness_count(),
            segment_count: total,
        });

        let tally = match self.shard_size {
            Some(shard_size) => self.tally_sharded(table.segments(), shard_size)?,
            None => self.tally_sequential(table.segments())?,
        };

        let frequencies = self.aggregator.from_tally(tally)?;
        for pattern in &frequencies.patterns {
            self.events.emit_pattern_observed(&PatternObservedEvent {
                label: pattern.label.to_string(),
                segment_index: pattern.first_seen,
            });
        }
        let ranked = self.ranker.rank(&frequencies);

        let statistics = RunStatistics {
            total_segments: frequencies.total_segments,
            agreeing_segments: frequencies.agreeing_segments,
            informative_segments: frequencies.informative_segments(),
            distinct_patterns: frequencies.patterns.len(),
        };
        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            { metrics::AGREEING_SEGMENTS } = statistics.agreeing_segments,
            { metrics::DISTINCT_PATTERNS } = statistics.distinct_patterns,
            { metrics::DURATION_MS } = duration_ms,
            "classification complete"
        );
        self.events.emit_run_complete(&RunCompleteEvent {
            total_segments: statistics.total_segments,
            agreeing_segments: statistics.agreeing_segments,
            distinct_patterns: statistics.distinct_patterns,
            duration_ms,
        });

        Ok(VariantReport {
            run: self.run.clone(),
            ranked,
            frequencies,
            statistics,
        })
    }

    fn check_width(&self, table: &CollationTable) -> Result<(), PipelineError> {
        let expected = self.run.witness_count();
        if table.witness_count() != expected {
            return Err(CollationError::WitnessCountMismatch {
                expected,
                found: table.witness_count(),
            }
            .into());
        }
        Ok(())
    }

    fn tally_sequential(&self, segments: &[Segment]) -> Result<PatternTally, PipelineError> {
        let sentinel = self.run.absent_sentinel();
        let total = segments.len();
        let mut tally = PatternTally::new();
        for (i, segment) in segments.iter().enumerate() {
            if i % PROGRESS_INTERVAL == 0 {
                self.cancellation.check()?;
                if i > 0 {
                    self.progress(i, total);
                }
            }
            let classification = self.classifier.classify_segment(segment, sentinel)?;
            tally.record(i, classification);
        }
        self.progress(total, total);
        Ok(tally)
    }

    fn tally_sharded(
        &self,
        segments: &[Segment],
        shard_size: usize,
    ) -> Result<PatternTally, PipelineError> {
        let sentinel = self.run.absent_sentinel();
        let total = segments.len();
        debug!(
            { metrics::SHARD_SIZE } = shard_size,
            { metrics::SHARD_COUNT } = total.div_ceil(shard_size),
            "sharding segments"
        );

        let shards = segments
            .par_chunks(shard_size)
            .enumerate()
            .map(|(shard, chunk)| -> Result<PatternTally, PipelineError> {
                self.cancellation.check()?;
                let offset = shard * shard_size;
                let mut tally = PatternTally::new();
                for (i, segment) in chunk.iter().enumerate() {
                    let classification = self.classifier.classify_segment(segment, sentinel)?;
                    tally.record(offset + i, classification);
                }
                Ok(tally)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut merged = PatternTally::new();
        for shard in shards {
            merged.merge(shard);
            self.progress(merged.classified(), total);
        }
        Ok(merged)
    }

    fn progress(&self, processed: usize, total: usize) {
        self.events
            .emit_classification_progress(&ClassificationProgressEvent { processed, total });
    }
}
