//! Collation interchange: bare or enveloped JSON tables.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use witrel_core::errors::CollationError;
use witrel_core::tracing::metrics;
use witrel_core::{CollationTable, Segment};

/// On-disk form of a collation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollationDocument {
    Bare(Vec<Segment>),
    Enveloped {
        witnesses: Vec<String>,
        segments: Vec<Segment>,
    },
}

impl CollationDocument {
    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Bare(segments) | Self::Enveloped { segments, .. } => segments,
        }
    }

    pub fn sigla(&self) -> Option<&[String]> {
        match self {
            Self::Bare(_) => None,
            Self::Enveloped { witnesses, .. } => Some(witnesses),
        }
    }

    /// Validate into a table.
    ///
    /// The witness count comes from `expected` when given, else from the
    /// sigla, else from the first segment. An empty bare document yields an
    /// empty table of width zero.
    pub fn into_table(self, expected: Option<usize>) -> Result<CollationTable, CollationError> {
        let (sigla, segments) = match self {
            Self::Bare(segments) => (None, segments),
            Self::Enveloped {
                witnesses,
                segments,
            } => (Some(witnesses), segments),
        };

        let witness_count = expected
            .or_else(|| sigla.as_ref().map(Vec::len))
            .or_else(|| segments.first().map(Segment::width))
            .unwrap_or(0);

        let table = CollationTable::new(witness_count, segments)?;
        match sigla {
            Some(sigla) => table.with_sigla(sigla),
            None => Ok(table),
        }
    }
}

/// Parse a collation table from JSON text.
pub fn parse_collation(json: &str, expected: Option<usize>) -> Result<CollationTable, CollationError> {
    let document: CollationDocument = serde_json::from_str(json)?;
    let table = document.into_table(expected)?;
    debug!(
        { metrics::WITNESS_COUNT } = table.witness_count(),
        { metrics::SEGMENT_COUNT } = table.len(),
        "parsed collation"
    );
    Ok(table)
}

/// Read and parse a collation file.
pub fn read_collation(path: &Path, expected: Option<usize>) -> Result<CollationTable, CollationError> {
    let json = fs::read_to_string(path).map_err(|e| CollationError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_collation(&json, expected)
}

/// Document form of `table`; enveloped when the table carries sigla.
pub fn to_document(table: &CollationTable) -> CollationDocument {
    let segments = table.segments().to_vec();
    if table.sigla().is_empty() {
        CollationDocument::Bare(segments)
    } else {
        CollationDocument::Enveloped {
            witnesses: table.sigla().to_vec(),
            segments,
        }
    }
}

pub fn to_json(table: &CollationTable) -> Result<String, CollationError> {
    Ok(serde_json::to_string(&to_document(table))?)
}

/// Write `table` as JSON to `path`.
pub fn write_collation(table: &CollationTable, path: &Path) -> Result<(), CollationError> {
    let json = to_json(table)?;
    fs::write(path, json).map_err(|e| CollationError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use witrel_core::Cell;

    #[test]
    fn bare_array_infers_width() {
        let table = parse_collation(r#"[["a", "a", "b"], [null, "x", "x"]]"#, None).unwrap();
        assert_eq!(table.witness_count(), 3);
        assert_eq!(table.len(), 2);
        assert!(table.sigla().is_empty());
        assert_eq!(table.segments()[1].cells[0], Cell::Absent);
    }

    #[test]
    fn envelope_carries_sigla() {
        let json = r##"{"witnesses": ["#M", "#P"], "segments": [["a", "b"]]}"##;
        let table = parse_collation(json, None).unwrap();
        assert_eq!(table.sigla(), &["#M", "#P"]);
    }

    #[test]
    fn token_objects_use_normalized_form() {
        let json = r#"[[[{"t": "Dixit ", "n": "dixit"}], "dixit"]]"#;
        let table = parse_collation(json, None).unwrap();
        let normalized = table.segments()[0].normalized("---");
        assert_eq!(normalized[0], "dixit");
        assert_eq!(normalized[1], "dixit");
    }

    #[test]
    fn ragged_segment_is_malformed() {
        let err = parse_collation(r#"[["a", "b"], ["a"]]"#, None).unwrap_err();
        assert!(matches!(
            err,
            CollationError::MalformedSegment { index: 1, expected: 2, found: 1 }
        ));
    }

    #[test]
    fn sigla_must_match_expected_width() {
        let json = r#"{"witnesses": ["A", "B", "C"], "segments": [["a", "b"]]}"#;
        assert!(matches!(
            parse_collation(json, Some(2)),
            Err(CollationError::WitnessCountMismatch { expected: 2, found: 3 })
        ));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        assert!(matches!(
            parse_collation("{not json", None),
            Err(CollationError::Parse(_))
        ));
    }

    #[test]
    fn empty_document_is_empty_table() {
        let table = parse_collation("[]", None).unwrap();
        assert!(table.is_empty());
    }
}
