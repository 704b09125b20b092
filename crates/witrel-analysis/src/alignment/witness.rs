//! Paragraph-split witness texts.

use std::ops::Range;

use witrel_core::config::CollationConfig;
use witrel_core::errors::AlignmentError;

/// One witness as extracted from its source: a siglum and its paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessText {
    pub siglum: String,
    pub paragraphs: Vec<String>,
}

impl WitnessText {
    pub fn new(siglum: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            siglum: siglum.into(),
            paragraphs,
        }
    }
}

/// What one witness says in one paragraph, as handed to the aligner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphRow<'a> {
    pub siglum: &'a str,
    pub text: &'a str,
}

/// Witnesses that can be aligned paragraph by paragraph.
///
/// Every witness has the same number of paragraphs.
#[derive(Debug, Clone)]
pub struct WitnessSet {
    witnesses: Vec<WitnessText>,
    paragraph_count: usize,
}

impl WitnessSet {
    pub fn new(witnesses: Vec<WitnessText>) -> Result<Self, AlignmentError> {
        let Some(first) = witnesses.first() else {
            return Err(AlignmentError::EmptyWitnessSet);
        };
        let paragraph_count = first.paragraphs.len();
        if let Some(odd) = witnesses
            .iter()
            .find(|w| w.paragraphs.len() != paragraph_count)
        {
            return Err(AlignmentError::ParagraphCountMismatch {
                siglum: odd.siglum.clone(),
                expected: paragraph_count,
                found: odd.paragraphs.len(),
            });
        }
        Ok(Self {
            witnesses,
            paragraph_count,
        })
    }

    pub fn len(&self) -> usize {
        self.witnesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.witnesses.is_empty()
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    pub fn witnesses(&self) -> &[WitnessText] {
        &self.witnesses
    }

    /// Sigla in witness order.
    pub fn sigla(&self) -> Vec<String> {
        self.witnesses.iter().map(|w| w.siglum.clone()).collect()
    }

    pub fn sorted_sigla(&self) -> Vec<String> {
        let mut sigla = self.sigla();
        sigla.sort();
        sigla
    }

    /// Rows for each paragraph in `range`, witnesses in set order.
    pub fn paragraph_rows(
        &self,
        range: Range<usize>,
    ) -> Result<Vec<Vec<ParagraphRow<'_>>>, AlignmentError> {
        if range.start > range.end || range.end > self.paragraph_count {
            return Err(AlignmentError::InvalidRange {
                first: range.start,
                last: range.end,
                available: self.paragraph_count,
            });
        }
        Ok(range
            .map(|p| {
                self.witnesses
                    .iter()
                    .map(|w| ParagraphRow {
                        siglum: &w.siglum,
                        text: &w.paragraphs[p],
                    })
                    .collect()
            })
            .collect())
    }
}

/// Requested paragraph window, first inclusive and last exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParagraphRange {
    pub first: usize,
    pub last: Option<usize>,
}

impl ParagraphRange {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CollationConfig) -> Self {
        Self {
            first: config.effective_first_paragraph(),
            last: config.last_paragraph,
        }
    }

    /// Concrete range over `available` paragraphs.
    pub fn resolve(&self, available: usize) -> Result<Range<usize>, AlignmentError> {
        let last = self.last.unwrap_or(available);
        if self.first > last || last > available {
            return Err(AlignmentError::InvalidRange {
                first: self.first,
                last,
                available,
            });
        }
        Ok(self.first..last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn witness(siglum: &str, paragraphs: &[&str]) -> WitnessText {
        WitnessText::new(siglum, paragraphs.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(
            WitnessSet::new(Vec::new()),
            Err(AlignmentError::EmptyWitnessSet)
        ));
    }

    #[test]
    fn paragraph_counts_must_agree() {
        let err = WitnessSet::new(vec![
            witness("#M", &["a", "b"]),
            witness("#P", &["a"]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::ParagraphCountMismatch { ref siglum, expected: 2, found: 1 } if siglum == "#P"
        ));
    }

    #[test]
    fn rows_follow_witness_order() {
        let set = WitnessSet::new(vec![
            witness("#V", &["v0", "v1", "v2"]),
            witness("#M", &["m0", "m1", "m2"]),
        ])
        .unwrap();
        let rows = set.paragraph_rows(1..3).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], ParagraphRow { siglum: "#V", text: "v1" });
        assert_eq!(rows[1][1], ParagraphRow { siglum: "#M", text: "m2" });
        assert_eq!(set.sorted_sigla(), vec!["#M", "#V"]);
    }

    #[test]
    fn range_resolution() {
        assert_eq!(ParagraphRange::all().resolve(4).unwrap(), 0..4);
        let window = ParagraphRange { first: 1, last: Some(3) };
        assert_eq!(window.resolve(4).unwrap(), 1..3);
        assert!(window.resolve(2).is_err());
        let backwards = ParagraphRange { first: 3, last: Some(1) };
        assert!(backwards.resolve(4).is_err());
    }

    #[test]
    fn range_from_config() {
        let config = CollationConfig {
            first_paragraph: Some(2),
            last_paragraph: Some(5),
            ..Default::default()
        };
        assert_eq!(ParagraphRange::from_config(&config).resolve(8).unwrap(), 2..5);
        let open = ParagraphRange::from_config(&CollationConfig::default());
        assert_eq!(open.resolve(3).unwrap(), 0..3);
    }
}
