//! Report output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_FORMAT;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: "text", "json", or "plot". Default: "text".
    pub format: Option<String>,
    /// Write the report here instead of stdout.
    pub path: Option<PathBuf>,
}

impl OutputConfig {
    /// Returns the effective format, defaulting to "text".
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_OUTPUT_FORMAT)
    }
}
