//! A single witness's contribution to one aligned segment.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// One reading inside a multi-reading cell.
///
/// The aligner may hand over plain strings or its own token objects; for
/// tokens only the normalized form `n` takes part in comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Text(String),
    Token { n: String },
}

impl Reading {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Token { n } => n,
        }
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// What one witness contributes at one aligned position.
///
/// JSON shape: `null`, a string, or an array of readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Absent,
    Reading(String),
    Alternatives(Vec<Reading>),
}

impl Cell {
    /// Collapse the cell into the single string used for comparison.
    ///
    /// Absent cells, empty strings, and empty arrays become `sentinel`, so two
    /// witnesses that both lack text agree. A lone reading is used verbatim;
    /// several are joined by single spaces and trimmed.
    pub fn normalized<'a>(&'a self, sentinel: &'a str) -> Cow<'a, str> {
        match self {
            Self::Absent => Cow::Borrowed(sentinel),
            Self::Reading(text) if text.is_empty() => Cow::Borrowed(sentinel),
            Self::Reading(text) => Cow::Borrowed(text.as_str()),
            Self::Alternatives(readings) => match readings.as_slice() {
                [] => Cow::Borrowed(sentinel),
                [only] => Cow::Borrowed(only.as_str()),
                many => {
                    let joined = many
                        .iter()
                        .map(Reading::as_str)
                        .collect::<Vec<_>>()
                        .join(" ");
                    Cow::Owned(joined.trim().to_string())
                }
            },
        }
    }

    pub fn is_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Reading(text) => text.is_empty(),
            Self::Alternatives(readings) => readings.is_empty(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Reading(value.to_string())
    }
}

impl From<Option<&str>> for Cell {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Absent, Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTINEL: &str = "---";

    #[test]
    fn absent_becomes_sentinel() {
        assert_eq!(Cell::Absent.normalized(SENTINEL), "---");
        assert_eq!(Cell::Reading(String::new()).normalized(SENTINEL), "---");
        assert_eq!(Cell::Alternatives(vec![]).normalized(SENTINEL), "---");
    }

    #[test]
    fn single_reading_is_verbatim() {
        let cell = Cell::Alternatives(vec![Reading::Token { n: "dixit ".into() }]);
        assert_eq!(cell.normalized(SENTINEL), "dixit ");
        assert!(matches!(
            Cell::from("dixit").normalized(SENTINEL),
            Cow::Borrowed("dixit")
        ));
    }

    #[test]
    fn alternatives_are_joined_in_order() {
        let cell = Cell::Alternatives(vec!["et".into(), Reading::Token { n: "ideo".into() }]);
        assert_eq!(cell.normalized(SENTINEL), "et ideo");
    }

    #[test]
    fn deserializes_every_cell_shape() {
        let cells: Vec<Cell> =
            serde_json::from_str(r#"[null, "a", ["b", "c"], [{"n": "d", "t": "D"}], []]"#).unwrap();
        assert_eq!(cells[0], Cell::Absent);
        assert_eq!(cells[1], Cell::Reading("a".into()));
        assert_eq!(cells[2], Cell::Alternatives(vec!["b".into(), "c".into()]));
        assert_eq!(cells[3], Cell::Alternatives(vec![Reading::Token { n: "d".into() }]));
        assert!(cells[4].is_absent());
    }
}
