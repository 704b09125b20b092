//! The label index space for N witnesses.
//!
//! All length-N strings over an N-symbol set, in lexicographic order with
//! the first position most significant. The space has N^N members; only the
//! restricted growth strings among them (Bell(N) of them) are ever produced
//! by classification. Nothing here is materialized: positions are computed
//! arithmetically and both enumerations are lazy.

use witrel_core::constants::{MAX_WITNESSES, MIN_WITNESSES};
use witrel_core::errors::ClassificationError;
use witrel_core::types::collections::SymbolVec;
use witrel_core::PatternLabel;

/// Index space for the pattern labels of a fixed witness count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    witnesses: usize,
}

impl Alphabet {
    /// Alphabet for `witnesses` witnesses. Comparison needs at least two,
    /// and labels can spell at most 26.
    pub fn new(witnesses: usize) -> Result<Self, ClassificationError> {
        if !(MIN_WITNESSES..=MAX_WITNESSES).contains(&witnesses) {
            return Err(ClassificationError::InvalidWitnessCount {
                count: witnesses,
                min: MIN_WITNESSES,
                max: MAX_WITNESSES,
            });
        }
        Ok(Self { witnesses })
    }

    pub fn witnesses(&self) -> usize {
        self.witnesses
    }

    /// Number of labels in the space: N^N.
    pub fn size(&self) -> u128 {
        (self.witnesses as u128).pow(self.witnesses as u32)
    }

    /// Number of labels classification can produce: Bell(N).
    pub fn pattern_count(&self) -> u128 {
        bell_number(self.witnesses)
    }

    /// The lexicographically first label, every witness agreeing.
    pub fn all_agree(&self) -> PatternLabel {
        PatternLabel::all_agree(self.witnesses)
    }

    /// Position of `label` in the enumeration, reading it as a base-N number.
    ///
    /// `None` when the label has the wrong length or uses a symbol outside
    /// the first N.
    pub fn index_of(&self, label: &PatternLabel) -> Option<u128> {
        if label.len() != self.witnesses {
            return None;
        }
        let base = self.witnesses as u128;
        label.symbols().iter().try_fold(0u128, |acc, &symbol| {
            let digit = symbol as u128;
            (digit < base).then(|| acc * base + digit)
        })
    }

    /// Label at `index` in the enumeration.
    pub fn label_at(&self, index: u128) -> Option<PatternLabel> {
        if index >= self.size() {
            return None;
        }
        let base = self.witnesses as u128;
        let mut digits: SymbolVec = SymbolVec::from_elem(0, self.witnesses);
        let mut rest = index;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % base) as u8;
            rest /= base;
        }
        PatternLabel::from_symbols(digits).ok()
    }

    /// Every label in the space, in order. N^N items: only sensible for small N.
    pub fn iter(&self) -> AlphabetIter {
        AlphabetIter {
            base: self.witnesses as u8,
            current: Some(SymbolVec::from_elem(0, self.witnesses)),
        }
    }

    /// Every label classification can produce, in lexicographic order.
    pub fn pattern_space(&self) -> PatternSpaceIter {
        PatternSpaceIter {
            current: Some(SymbolVec::from_elem(0, self.witnesses)),
        }
    }
}

/// Lexicographic odometer over all N^N labels.
#[derive(Debug, Clone)]
pub struct AlphabetIter {
    base: u8,
    current: Option<SymbolVec>,
}

impl Iterator for AlphabetIter {
    type Item = PatternLabel;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut next = current.clone();
        let mut carried = true;
        for digit in next.iter_mut().rev() {
            if *digit + 1 < self.base {
                *digit += 1;
                carried = false;
                break;
            }
            *digit = 0;
        }
        if !carried {
            self.current = Some(next);
        }
        PatternLabel::from_symbols(current).ok()
    }
}

/// Restricted growth strings of length N in lexicographic order.
#[derive(Debug, Clone)]
pub struct PatternSpaceIter {
    current: Option<SymbolVec>,
}

impl Iterator for PatternSpaceIter {
    type Item = PatternLabel;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.current = successor(&current);
        PatternLabel::from_symbols(current).ok()
    }
}

/// Next restricted growth string after `rgs`, if any.
///
/// The rightmost position that can still grow (its symbol does not exceed
/// the maximum of its prefix) is incremented and everything after it reset.
fn successor(rgs: &[u8]) -> Option<SymbolVec> {
    let mut prefix_max = Vec::with_capacity(rgs.len());
    let mut max = 0u8;
    for &symbol in rgs {
        prefix_max.push(max);
        max = max.max(symbol);
    }
    let pivot = (1..rgs.len()).rev().find(|&i| rgs[i] <= prefix_max[i])?;
    let mut next: SymbolVec = rgs.iter().copied().collect();
    next[pivot] += 1;
    for slot in next.iter_mut().skip(pivot + 1) {
        *slot = 0;
    }
    Some(next)
}

/// The n-th Bell number: ways to partition n items into non-empty groups.
///
/// Computed with the Bell triangle. Exact in `u128` for every supported
/// witness count.
pub fn bell_number(n: usize) -> u128 {
    if n == 0 {
        return 1;
    }
    let mut row = vec![1u128];
    for _ in 1..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        let mut value = row[row.len() - 1];
        next.push(value);
        for left in &row {
            value += left;
            next.push(value);
        }
        row = next;
    }
    row[row.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_fewer_than_two_witnesses() {
        assert!(Alphabet::new(0).is_err());
        assert!(Alphabet::new(1).is_err());
        assert!(Alphabet::new(27).is_err());
    }

    #[test]
    fn size_is_n_to_the_n() {
        assert_eq!(Alphabet::new(2).unwrap().size(), 4);
        assert_eq!(Alphabet::new(4).unwrap().size(), 256);
        assert_eq!(Alphabet::new(26).unwrap().size(), 26u128.pow(26));
    }

    #[test]
    fn enumeration_is_lexicographic() {
        let alphabet = Alphabet::new(3).unwrap();
        let labels: Vec<String> = alphabet.iter().map(|l| l.to_string()).collect();
        assert_eq!(labels.len(), 27);
        assert_eq!(labels[0], "AAA");
        assert_eq!(labels[1], "AAB");
        assert_eq!(labels[3], "ABA");
        assert_eq!(labels[26], "CCC");
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn index_and_label_agree_with_enumeration() {
        let alphabet = Alphabet::new(4).unwrap();
        for (position, label) in alphabet.iter().enumerate() {
            assert_eq!(alphabet.index_of(&label), Some(position as u128));
            assert_eq!(alphabet.label_at(position as u128).as_ref(), Some(&label));
        }
        assert_eq!(alphabet.label_at(256), None);
    }

    #[test]
    fn index_of_rejects_foreign_labels() {
        let alphabet = Alphabet::new(3).unwrap();
        assert_eq!(alphabet.index_of(&"AAAA".parse().unwrap()), None);
        assert_eq!(alphabet.index_of(&"ABD".parse().unwrap()), None);
        assert_eq!(alphabet.index_of(&"AAA".parse().unwrap()), Some(0));
    }

    #[test]
    fn known_indices_for_four_witnesses() {
        let alphabet = Alphabet::new(4).unwrap();
        // A=0 B=1: AABB = 0*64 + 0*16 + 1*4 + 1
        assert_eq!(alphabet.index_of(&"AABB".parse().unwrap()), Some(5));
        assert_eq!(alphabet.index_of(&"ABCD".parse().unwrap()), Some(27));
    }

    #[test]
    fn bell_numbers() {
        let expected = [1u128, 1, 2, 5, 15, 52, 203, 877, 4140];
        for (n, bell) in expected.iter().enumerate() {
            assert_eq!(bell_number(n), *bell, "Bell({n})");
        }
    }

    #[test]
    fn pattern_space_matches_bell_numbers() {
        for n in 2..=7 {
            let alphabet = Alphabet::new(n).unwrap();
            let patterns: Vec<PatternLabel> = alphabet.pattern_space().collect();
            assert_eq!(patterns.len() as u128, bell_number(n));
            assert!(patterns.iter().all(PatternLabel::is_restricted_growth));
            assert!(patterns.windows(2).all(|w| w[0] < w[1]));
            assert!(patterns[0].is_all_agree());
        }
    }

    #[test]
    fn pattern_space_for_three() {
        let labels: Vec<String> = Alphabet::new(3)
            .unwrap()
            .pattern_space()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(labels, ["AAA", "AAB", "ABA", "ABB", "ABC"]);
    }
}
