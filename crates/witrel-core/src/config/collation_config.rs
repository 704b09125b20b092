//! Collation input configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ABSENT_SENTINEL;

/// How collation tables are read and which paragraphs are aligned.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CollationConfig {
    /// Reading substituted for absent cells. Default: "---".
    pub absent_sentinel: Option<String>,
    /// Expected witness count; checked against the loaded table when set.
    pub witness_count: Option<usize>,
    /// First paragraph (inclusive) handed to the aligner. Default: 0.
    pub first_paragraph: Option<usize>,
    /// Last paragraph (exclusive) handed to the aligner. Default: all.
    pub last_paragraph: Option<usize>,
}

impl CollationConfig {
    /// Returns the effective absent sentinel, defaulting to "---".
    pub fn effective_absent_sentinel(&self) -> &str {
        self.absent_sentinel
            .as_deref()
            .unwrap_or(DEFAULT_ABSENT_SENTINEL)
    }

    /// Returns the effective first paragraph, defaulting to 0.
    pub fn effective_first_paragraph(&self) -> usize {
        self.first_paragraph.unwrap_or(0)
    }
}
