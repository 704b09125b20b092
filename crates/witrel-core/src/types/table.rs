//! Segments, collation tables, and witness views.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::errors::CollationError;

/// One aligned position: a cell per witness, in witness order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Segment {
    pub cells: Vec<Cell>,
}

impl Segment {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Segment of plain readings, `None` meaning absent.
    pub fn from_readings<'a, I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        Self {
            cells: readings.into_iter().map(Cell::from).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Normalize every cell to the string used for comparison.
    pub fn normalized<'a>(&'a self, sentinel: &'a str) -> Vec<Cow<'a, str>> {
        self.cells.iter().map(|c| c.normalized(sentinel)).collect()
    }
}

/// A witness as seen through the table: its siglum and one reading per
/// aligned position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Witness {
    pub siglum: String,
    pub readings: Vec<String>,
}

/// Every segment of the work, across all paragraphs, in document order.
///
/// Immutable once built: every segment has exactly `witness_count` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationTable {
    witness_count: usize,
    sigla: Vec<String>,
    segments: Vec<Segment>,
}

impl CollationTable {
    /// Build a table, rejecting any segment whose width is not `witness_count`.
    pub fn new(witness_count: usize, segments: Vec<Segment>) -> Result<Self, CollationError> {
        if let Some((index, segment)) = segments
            .iter()
            .enumerate()
            .find(|(_, s)| s.width() != witness_count)
        {
            return Err(CollationError::MalformedSegment {
                index,
                expected: witness_count,
                found: segment.width(),
            });
        }
        Ok(Self {
            witness_count,
            sigla: Vec::new(),
            segments,
        })
    }

    /// Concatenate per-paragraph segment lists in document order.
    pub fn from_paragraphs<I>(witness_count: usize, paragraphs: I) -> Result<Self, CollationError>
    where
        I: IntoIterator<Item = Vec<Segment>>,
    {
        let segments = paragraphs.into_iter().flatten().collect();
        Self::new(witness_count, segments)
    }

    /// Attach witness sigla; their count must match the witness count.
    pub fn with_sigla(mut self, sigla: Vec<String>) -> Result<Self, CollationError> {
        if sigla.len() != self.witness_count {
            return Err(CollationError::WitnessCountMismatch {
                expected: self.witness_count,
                found: sigla.len(),
            });
        }
        self.sigla = sigla;
        Ok(self)
    }

    pub fn witness_count(&self) -> usize {
        self.witness_count
    }

    /// Sigla in witness order; empty when the source carried none.
    pub fn sigla(&self) -> &[String] {
        &self.sigla
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Column view of one witness, absent cells replaced by `sentinel`.
    pub fn witness(&self, index: usize, sentinel: &str) -> Option<Witness> {
        if index >= self.witness_count {
            return None;
        }
        let siglum = self
            .sigla
            .get(index)
            .cloned()
            .unwrap_or_else(|| default_siglum(index));
        let readings = self
            .segments
            .iter()
            .map(|s| s.cells[index].normalized(sentinel).into_owned())
            .collect();
        Some(Witness { siglum, readings })
    }
}

/// Placeholder siglum for witness `index` when the source has none.
pub fn default_siglum(index: usize) -> String {
    format!("W{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_width() {
        let segments = vec![
            Segment::from_readings([Some("a"), Some("b")]),
            Segment::from_readings([Some("a")]),
        ];
        let err = CollationTable::new(2, segments).unwrap_err();
        assert!(matches!(
            err,
            CollationError::MalformedSegment { index: 1, expected: 2, found: 1 }
        ));
    }

    #[test]
    fn paragraphs_concatenate_in_order() {
        let p1 = vec![Segment::from_readings([Some("a"), Some("a")])];
        let p2 = vec![
            Segment::from_readings([Some("b"), None]),
            Segment::from_readings([Some("c"), Some("c")]),
        ];
        let table = CollationTable::from_paragraphs(2, [p1, p2]).unwrap();
        assert_eq!(table.len(), 3);
        let second = table.witness(1, "---").unwrap();
        assert_eq!(second.siglum, "W2");
        assert_eq!(second.readings, vec!["a", "---", "c"]);
    }

    #[test]
    fn sigla_must_match_witness_count() {
        let table = CollationTable::new(2, vec![]).unwrap();
        assert!(table.clone().with_sigla(vec!["#M".into()]).is_err());
        let table = table.with_sigla(vec!["#M".into(), "#P".into()]).unwrap();
        assert_eq!(table.sigla(), &["#M".to_string(), "#P".to_string()]);
    }
}
