//! Frequency aggregation: occurrence counts and prevalence per label.
//!
//! All-agree segments are pruned before counting but stay in the
//! denominator, so percentages describe the whole work rather than only
//! its informative part.

use serde::Serialize;
use witrel_core::errors::AggregationError;
use witrel_core::types::FxHashMap;
use witrel_core::PatternLabel;

use super::classifier::Classification;

/// Running count of one label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LabelCount {
    label: PatternLabel,
    index: u128,
    occurrences: usize,
    first_seen: usize,
}

/// Label counts in first-observed order, mergeable across shards.
///
/// Merging tallies of consecutive shards in shard order yields the same
/// tally as one pass over the concatenated segments.
#[derive(Debug, Clone, Default)]
pub struct PatternTally {
    counts: Vec<LabelCount>,
    positions: FxHashMap<u128, usize>,
    agreeing: usize,
    classified: usize,
}

impl PatternTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the classification of segment `segment_index`. All-agree
    /// segments only count towards the total.
    pub fn record(&mut self, segment_index: usize, classification: Classification) -> bool {
        self.classified += 1;
        if classification.is_all_agree() {
            self.agreeing += 1;
            return false;
        }
        match self.positions.get(&classification.index) {
            Some(&pos) => {
                self.counts[pos].occurrences += 1;
                false
            }
            None => {
                self.positions.insert(classification.index, self.counts.len());
                self.counts.push(LabelCount {
                    label: classification.label,
                    index: classification.index,
                    occurrences: 1,
                    first_seen: segment_index,
                });
                true
            }
        }
    }

    /// Fold in the tally of a later shard.
    pub fn merge(&mut self, other: PatternTally) {
        self.classified += other.classified;
        self.agreeing += other.agreeing;
        for count in other.counts {
            match self.positions.get(&count.index) {
                Some(&pos) => self.counts[pos].occurrences += count.occurrences,
                None => {
                    self.positions.insert(count.index, self.counts.len());
                    self.counts.push(count);
                }
            }
        }
    }

    /// Segments recorded, agreeing ones included.
    pub fn classified(&self) -> usize {
        self.classified
    }

    pub fn agreeing(&self) -> usize {
        self.agreeing
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

/// Prevalence of one non-trivial label across the work.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternFrequency {
    pub label: PatternLabel,
    #[serde(skip)]
    pub index: u128,
    pub occurrences: usize,
    /// Index of the first segment carrying this label.
    pub first_seen: usize,
    pub percentage: f64,
}

/// Aggregated label frequencies, one entry per distinct label in
/// first-observed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    pub total_segments: usize,
    pub agreeing_segments: usize,
    pub patterns: Vec<PatternFrequency>,
}

impl FrequencyTable {
    /// Segments that carry comparative information.
    pub fn informative_segments(&self) -> usize {
        self.total_segments - self.agreeing_segments
    }

    pub fn get(&self, label: &PatternLabel) -> Option<&PatternFrequency> {
        self.patterns.iter().find(|p| &p.label == label)
    }
}

/// Turns labeled segments into a [`FrequencyTable`].
#[derive(Debug, Clone, Copy)]
pub struct FrequencyAggregator {
    precision: u32,
}

impl FrequencyAggregator {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// Aggregate the full labeled sequence of a table, in document order.
    pub fn aggregate<I>(&self, labeled: I) -> Result<FrequencyTable, AggregationError>
    where
        I: IntoIterator<Item = Classification>,
    {
        let mut tally = PatternTally::new();
        for (segment_index, classification) in labeled.into_iter().enumerate() {
            tally.record(segment_index, classification);
        }
        self.from_tally(tally)
    }

    /// Finish a tally. The denominator is every recorded segment.
    pub fn from_tally(&self, tally: PatternTally) -> Result<FrequencyTable, AggregationError> {
        let total = tally.classified;
        if total == 0 {
            return Err(AggregationError::NoData);
        }
        let patterns = tally
            .counts
            .into_iter()
            .map(|c| PatternFrequency {
                percentage: percentage(c.occurrences, total, self.precision),
                label: c.label,
                index: c.index,
                occurrences: c.occurrences,
                first_seen: c.first_seen,
            })
            .collect();
        Ok(FrequencyTable {
            total_segments: total,
            agreeing_segments: tally.agreeing,
            patterns,
        })
    }
}

/// `count / total * 100`, rounded to `precision` decimal places.
///
/// Rounding goes through the decimal formatter, which rounds the exact
/// binary value with ties to even: `1/32` is `3.12`, not `3.13`.
pub fn percentage(count: usize, total: usize, precision: u32) -> f64 {
    let raw = count as f64 / total as f64 * 100.0;
    format!("{:.*}", precision as usize, raw)
        .parse()
        .unwrap_or(raw)
}
