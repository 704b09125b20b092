//! Pattern labels: which witnesses share a reading within a segment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::collections::SymbolVec;
use crate::constants::{LABEL_SYMBOLS, MAX_WITNESSES};
use crate::errors::ClassificationError;

/// A length-N string over the label alphabet, one symbol per witness.
///
/// Symbols are stored as indices into [`LABEL_SYMBOLS`] (`0` is `A`).
/// Labels produced by classification are restricted growth strings: the
/// first symbol is `A` and every later symbol is at most one past the
/// largest symbol before it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatternLabel {
    symbols: SymbolVec,
}

impl PatternLabel {
    /// Build a label from symbol indices.
    pub fn from_symbols<I>(symbols: I) -> Result<Self, ClassificationError>
    where
        I: IntoIterator<Item = u8>,
    {
        let symbols: SymbolVec = symbols.into_iter().collect();
        if symbols.is_empty() || symbols.len() > MAX_WITNESSES {
            return Err(ClassificationError::InvalidLabel {
                label: render(&symbols),
                message: format!("length must be between 1 and {MAX_WITNESSES}"),
            });
        }
        if let Some(bad) = symbols.iter().find(|s| **s as usize >= MAX_WITNESSES) {
            return Err(ClassificationError::InvalidLabel {
                label: render(&symbols),
                message: format!("symbol index {bad} is out of range"),
            });
        }
        Ok(Self { symbols })
    }

    /// Label where all `witnesses` share one reading (`AAAA` for four).
    pub fn all_agree(witnesses: usize) -> Self {
        Self {
            symbols: std::iter::repeat(0).take(witnesses).collect(),
        }
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// True when every witness carries the first symbol.
    pub fn is_all_agree(&self) -> bool {
        self.symbols.iter().all(|s| *s == 0)
    }

    /// True when the label has restricted-growth shape.
    pub fn is_restricted_growth(&self) -> bool {
        let mut next = 0u8;
        for &symbol in &self.symbols {
            if symbol > next {
                return false;
            }
            if symbol == next {
                next += 1;
            }
        }
        true
    }

    /// Number of distinct readings in the segment.
    pub fn group_count(&self) -> usize {
        self.symbols
            .iter()
            .max()
            .map_or(0, |max| *max as usize + 1)
    }

    /// Witness indices grouped by shared symbol, in symbol order.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.group_count()];
        for (witness, symbol) in self.symbols.iter().enumerate() {
            groups[*symbol as usize].push(witness);
        }
        groups.retain(|g| !g.is_empty());
        groups
    }
}

fn render(symbols: &[u8]) -> String {
    symbols
        .iter()
        .map(|s| LABEL_SYMBOLS.get(*s as usize).map_or('?', |b| *b as char))
        .collect()
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.symbols))
    }
}

impl FromStr for PatternLabel {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .bytes()
            .map(|b| {
                LABEL_SYMBOLS
                    .iter()
                    .position(|symbol| *symbol == b)
                    .map(|idx| idx as u8)
                    .ok_or_else(|| ClassificationError::InvalidLabel {
                        label: s.to_string(),
                        message: format!("{:?} is not a label symbol", b as char),
                    })
            })
            .collect::<Result<SymbolVec, _>>()?;
        Self::from_symbols(symbols).map_err(|_| ClassificationError::InvalidLabel {
            label: s.to_string(),
            message: format!("length must be between 1 and {MAX_WITNESSES}"),
        })
    }
}

impl TryFrom<String> for PatternLabel {
    type Error = ClassificationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PatternLabel> for String {
    fn from(label: PatternLabel) -> Self {
        label.to_string()
    }
}
