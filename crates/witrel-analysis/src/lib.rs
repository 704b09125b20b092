//! # witrel-analysis
//!
//! Classifies every aligned segment of a collation by which witnesses agree
//! with which, tallies the resulting pattern labels across the whole work,
//! and ranks them by prevalence.
//!
//! - `patterns`: alphabet generator, segment classifier, frequency
//!   aggregator, ranker
//! - `pipeline`: the end-to-end run over a collation table
//! - `collation`: JSON interchange for collation tables
//! - `alignment`: witness preparation, the aligner seam, and its cache
//! - `report`: text, JSON, and plot-data renderings of a ranked result

pub mod alignment;
pub mod collation;
pub mod patterns;
pub mod pipeline;
pub mod report;

pub use patterns::{
    Alphabet, Classification, FrequencyAggregator, FrequencyEntry, FrequencyTable, RankedResult,
    Ranker, SegmentClassifier,
};
pub use pipeline::{RunStatistics, VariantPipeline, VariantReport};
