//! Segment classifier: one aligned segment in, one pattern label out.

use witrel_core::errors::ClassificationError;
use witrel_core::types::collections::SymbolVec;
use witrel_core::{PatternLabel, RunConfig, Segment};

use super::alphabet::Alphabet;

/// A segment's label together with its position in the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub label: PatternLabel,
    /// Dense key: the label's index in the alphabet enumeration.
    pub index: u128,
}

impl Classification {
    pub fn is_all_agree(&self) -> bool {
        self.index == 0
    }
}

/// Assigns each segment the restricted growth string describing which
/// witnesses share a reading.
///
/// Witness 0 always gets `A`. Each later witness copies the symbol of the
/// first earlier witness with an identical reading, or takes the next unused
/// symbol. Witness order matters: the label favours the earliest match.
#[derive(Debug, Clone, Copy)]
pub struct SegmentClassifier {
    alphabet: Alphabet,
}

impl SegmentClassifier {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn for_run(run: &RunConfig) -> Result<Self, ClassificationError> {
        Ok(Self::new(Alphabet::new(run.witness_count())?))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Label for already-normalized readings, one per witness.
    pub fn label<S: AsRef<str>>(&self, readings: &[S]) -> Result<PatternLabel, ClassificationError> {
        let expected = self.alphabet.witnesses();
        if readings.len() != expected {
            return Err(ClassificationError::SegmentWidth {
                expected,
                found: readings.len(),
            });
        }

        let mut symbols = SymbolVec::with_capacity(expected);
        let mut next_symbol = 0u8;
        for (i, reading) in readings.iter().enumerate() {
            let reading = reading.as_ref();
            let earlier = readings[..i]
                .iter()
                .position(|other| other.as_ref() == reading);
            match earlier {
                Some(j) => symbols.push(symbols[j]),
                None => {
                    symbols.push(next_symbol);
                    next_symbol += 1;
                }
            }
        }
        PatternLabel::from_symbols(symbols)
    }

    /// Classify normalized readings and locate the label in the alphabet.
    pub fn classify<S: AsRef<str>>(&self, readings: &[S]) -> Result<Classification, ClassificationError> {
        let label = self.label(readings)?;
        let index = self
            .alphabet
            .index_of(&label)
            .ok_or_else(|| ClassificationError::UnmappedLabel {
                label: label.to_string(),
                witnesses: self.alphabet.witnesses(),
            })?;
        Ok(Classification { label, index })
    }

    /// Normalize a raw segment with `sentinel` and classify it.
    pub fn classify_segment(
        &self,
        segment: &Segment,
        sentinel: &str,
    ) -> Result<Classification, ClassificationError> {
        self.classify(&segment.normalized(sentinel))
    }
}
