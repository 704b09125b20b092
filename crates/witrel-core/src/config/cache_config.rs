//! Collation cache configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CACHE_DIR;

/// Where aligned collation tables are cached and when to bypass the cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory. Default: `.witrel/cache`.
    pub dir: Option<PathBuf>,
    /// Recompute even when a cached table exists. Default: false.
    pub force: Option<bool>,
    /// Use the cache at all. Default: true.
    pub enabled: Option<bool>,
}

impl CacheConfig {
    /// Returns the effective cache directory, defaulting to `.witrel/cache`.
    pub fn effective_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR))
    }

    /// Returns whether recomputation is forced, defaulting to false.
    pub fn effective_force(&self) -> bool {
        self.force.unwrap_or(false)
    }

    /// Returns whether caching is enabled, defaulting to true.
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}
