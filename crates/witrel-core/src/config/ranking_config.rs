//! Ranking configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PRECISION, DEFAULT_SHARD_SIZE};

/// Configuration for classification and ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RankingConfig {
    /// Decimal places kept on percentages. Default: 2.
    pub precision: Option<u32>,
    /// Report only the first `top` ranked entries. Default: all.
    pub top: Option<usize>,
    /// Classify shards of the table on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Segments per shard in parallel mode. Default: 4096.
    pub shard_size: Option<usize>,
}

impl RankingConfig {
    /// Returns the effective precision, defaulting to 2.
    pub fn effective_precision(&self) -> u32 {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    /// Returns whether parallel classification is enabled, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Returns the effective shard size, defaulting to 4096.
    pub fn effective_shard_size(&self) -> usize {
        self.shard_size.unwrap_or(DEFAULT_SHARD_SIZE)
    }
}
