//! Ranking labels by prevalence.

use serde::{Deserialize, Serialize};
use witrel_core::types::FxHashSet;
use witrel_core::PatternLabel;

use super::frequency::FrequencyTable;

/// One ranked label and its rounded percentage of all segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub label: PatternLabel,
    pub percentage: f64,
}

/// Labels ordered by descending percentage. Ties keep the order in which
/// the labels were first observed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    entries: Vec<FrequencyEntry>,
}

/// Parallel label/value arrays for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl RankedResult {
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the rounded percentages; 100 minus the all-agree share, up
    /// to rounding.
    pub fn total_percentage(&self) -> f64 {
        self.entries.iter().map(|e| e.percentage).sum()
    }

    /// The `k` most prevalent labels. Order is unchanged.
    pub fn top(&self, k: usize) -> RankedResult {
        RankedResult {
            entries: self.entries.iter().take(k).cloned().collect(),
        }
    }

    pub fn to_plot_data(&self) -> PlotData {
        PlotData {
            labels: self.entries.iter().map(|e| e.label.to_string()).collect(),
            values: self.entries.iter().map(|e| e.percentage).collect(),
        }
    }
}

impl IntoIterator for RankedResult {
    type Item = FrequencyEntry;
    type IntoIter = std::vec::IntoIter<FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Orders a [`FrequencyTable`] into a [`RankedResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Rank every label of `table`. The sort is stable, so equal
    /// percentages stay in first-observed order.
    pub fn rank(&self, table: &FrequencyTable) -> RankedResult {
        let mut seen = FxHashSet::default();
        let mut entries: Vec<FrequencyEntry> = table
            .patterns
            .iter()
            .filter(|p| seen.insert(p.index))
            .map(|p| FrequencyEntry {
                label: p.label.clone(),
                percentage: p.percentage,
            })
            .collect();
        entries.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        RankedResult { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{Alphabet, FrequencyAggregator, SegmentClassifier};

    fn ranked(rows: &[&[&str]]) -> RankedResult {
        let n = rows[0].len();
        let classifier = SegmentClassifier::new(Alphabet::new(n).unwrap());
        let labeled = rows.iter().map(|r| classifier.classify(*r).unwrap());
        let table = FrequencyAggregator::new(2).aggregate(labeled).unwrap();
        Ranker::new().rank(&table)
    }

    fn labels(result: &RankedResult) -> Vec<String> {
        result.entries().iter().map(|e| e.label.to_string()).collect()
    }

    #[test]
    fn descending_by_percentage() {
        let result = ranked(&[
            &["a", "a", "b", "b"],
            &["a", "b", "b", "b"],
            &["a", "b", "b", "b"],
            &["a", "b", "b", "b"],
        ]);
        assert_eq!(labels(&result), vec!["ABBB", "AABB"]);
        assert_eq!(result.entries()[0].percentage, 75.0);
        assert_eq!(result.entries()[1].percentage, 25.0);
    }

    #[test]
    fn ties_keep_first_observed_order() {
        let result = ranked(&[
            &["a", "b", "c", "d"],
            &["a", "a", "b", "b"],
            &["a", "b", "a", "b"],
            &["a", "b", "b", "a"],
            &["a", "a", "a", "b"],
        ]);
        assert_eq!(labels(&result), vec!["ABCD", "AABB", "ABAB", "ABBA", "AAAB"]);
        assert!(result.entries().iter().all(|e| e.percentage == 20.0));
    }

    #[test]
    fn all_agree_table_ranks_empty() {
        let result = ranked(&[&["x", "x", "x"], &["y", "y", "y"]]);
        assert!(result.is_empty());
        assert_eq!(result.total_percentage(), 0.0);
    }

    #[test]
    fn top_and_plot_data() {
        let result = ranked(&[
            &["a", "b", "b"],
            &["a", "b", "b"],
            &["a", "a", "b"],
            &["a", "b", "c"],
        ]);
        let top = result.top(2);
        assert_eq!(labels(&top), vec!["ABB", "AAB"]);
        assert_eq!(result.top(10), result);

        let plot = top.to_plot_data();
        assert_eq!(plot.labels, vec!["ABB", "AAB"]);
        assert_eq!(plot.values, vec![50.0, 25.0]);
    }

    #[test]
    fn total_percentage_excludes_agreement() {
        let result = ranked(&[&["a", "a"], &["a", "b"], &["a", "b"], &["a", "a"]]);
        assert_eq!(result.total_percentage(), 50.0);
    }
}
