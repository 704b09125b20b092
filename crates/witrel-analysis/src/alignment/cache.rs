//! Content-addressed cache of aligned collation tables.
//!
//! Alignment is the slow step of a run. Its output depends only on the
//! witness texts and the paragraph window, so the table is stored under an
//! xxh3-128 hash of exactly those inputs. A changed input yields a new key;
//! stale entries are never read.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::{debug, field, info};
use witrel_core::config::CacheConfig;
use witrel_core::errors::{CacheError, PipelineError};
use witrel_core::events::types::{CacheHitEvent, CacheMissEvent};
use witrel_core::events::EventDispatcher;
use witrel_core::tracing::metrics;
use witrel_core::CollationTable;
use xxhash_rust::xxh3::Xxh3;

use super::aligner::{align_all, Aligner};
use super::witness::WitnessSet;
use crate::collation::{parse_collation, to_json};

/// Cache key for aligning `range` of `set`, as 32 hex digits.
pub fn cache_key(set: &WitnessSet, range: &Range<usize>) -> String {
    let mut hasher = Xxh3::new();
    hasher.update(&(set.len() as u64).to_le_bytes());
    for witness in set.witnesses() {
        update_str(&mut hasher, &witness.siglum);
    }
    hasher.update(&(range.start as u64).to_le_bytes());
    hasher.update(&(range.end as u64).to_le_bytes());
    for paragraph in range.clone() {
        for witness in set.witnesses() {
            if let Some(text) = witness.paragraphs.get(paragraph) {
                update_str(&mut hasher, text);
            }
        }
    }
    format!("{:032x}", hasher.digest128())
}

// Length prefix keeps ("ab", "c") and ("a", "bc") apart.
fn update_str(hasher: &mut Xxh3, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// Directory of `<key>.json` collation tables.
#[derive(Debug, Clone)]
pub struct CollationCache {
    dir: PathBuf,
    force: bool,
    events: EventDispatcher,
}

impl CollationCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            force: false,
            events: EventDispatcher::new(),
        }
    }

    /// Cache rooted at the configured directory, resolved against `root`.
    /// `None` when caching is disabled.
    pub fn from_config(config: &CacheConfig, root: &Path) -> Option<Self> {
        if !config.effective_enabled() {
            return None;
        }
        Some(Self::new(root.join(config.effective_dir())).with_force(config.effective_force()))
    }

    /// Re-align on every [`align_cached`](Self::align_cached) call.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn is_forced(&self) -> bool {
        self.force
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The cached table for `key`, if one was stored.
    pub fn load(&self, key: &str, witness_count: usize) -> Result<Option<CollationTable>, CacheError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
        let table = parse_collation(&json, Some(witness_count)).map_err(|e| {
            CacheError::Serialization {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Some(table))
    }

    /// Write `table` under `key`. The file appears atomically: readers see
    /// either the old entry or the complete new one.
    pub fn store(&self, key: &str, table: &CollationTable) -> Result<PathBuf, CacheError> {
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;
        let path = self.path_for(key);
        let json = to_json(table).map_err(|e| CacheError::Serialization {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_error(&path, e))?;
        debug!(
            { metrics::PATH } = field::display(path.display()),
            { metrics::SEGMENT_COUNT } = table.len(),
            "stored collation"
        );
        Ok(path)
    }

    /// Cached table for these inputs, or a fresh alignment stored for next
    /// time. `force` skips the lookup and overwrites any existing entry.
    pub fn load_or_align<A>(
        &self,
        aligner: &A,
        set: &WitnessSet,
        range: Range<usize>,
        force: bool,
    ) -> Result<CollationTable, PipelineError>
    where
        A: Aligner + ?Sized,
    {
        let key = cache_key(set, &range);
        if !force {
            if let Some(table) = self.load(&key, set.len())? {
                let path = self.path_for(&key);
                info!({ metrics::CACHE_KEY } = key.as_str(), "using cached collation");
                self.events.emit_cache_hit(&CacheHitEvent { key, path });
                return Ok(table);
            }
        }

        self.events.emit_cache_miss(&CacheMissEvent {
            key: key.clone(),
            forced: force,
        });
        info!(
            { metrics::CACHE_KEY } = key.as_str(),
            { metrics::CACHE_FORCED } = force,
            "aligning witnesses"
        );
        let table = align_all(aligner, set, range)?;
        self.store(&key, &table)?;
        Ok(table)
    }

    /// [`load_or_align`](Self::load_or_align) with the cache's own force
    /// setting, as resolved from `[cache] force`.
    pub fn align_cached<A>(
        &self,
        aligner: &A,
        set: &WitnessSet,
        range: Range<usize>,
    ) -> Result<CollationTable, PipelineError>
    where
        A: Aligner + ?Sized,
    {
        self.load_or_align(aligner, set, range, self.force)
    }
}

fn io_error(path: &Path, e: std::io::Error) -> CacheError {
    CacheError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
