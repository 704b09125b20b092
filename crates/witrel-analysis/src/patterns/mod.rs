//! Variant-pattern engine.
//!
//! Leaves first: the alphabet fixes the label index space, the classifier
//! maps a segment to one label, the aggregator counts labels over the whole
//! table, and the ranker orders them by percentage.

pub mod alphabet;
pub mod classifier;
pub mod frequency;
pub mod ranking;

pub use alphabet::{bell_number, Alphabet, AlphabetIter, PatternSpaceIter};
pub use classifier::{Classification, SegmentClassifier};
pub use frequency::{FrequencyAggregator, FrequencyTable, PatternFrequency, PatternTally};
pub use ranking::{FrequencyEntry, PlotData, RankedResult, Ranker};
