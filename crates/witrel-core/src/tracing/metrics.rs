//! Standard field names for witrel log events.
//!
//! Used as `{ FIELD } = value` in `tracing` macros so every subsystem
//! reports the same quantity under the same key.

/// Witness count of a run or witness set.
pub const WITNESS_COUNT: &str = "witnesses";

/// Segments in the collation table.
pub const SEGMENT_COUNT: &str = "segments";

/// Whether classification runs in rayon shards.
pub const PARALLEL: &str = "parallel";

/// Segments per parallel shard.
pub const SHARD_SIZE: &str = "shard_size";

/// Number of parallel shards.
pub const SHARD_COUNT: &str = "shards";

/// Fully agreeing segments, pruned before ranking.
pub const AGREEING_SEGMENTS: &str = "agreeing";

/// Distinct non-trivial labels observed.
pub const DISTINCT_PATTERNS: &str = "distinct";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Collation cache key (32 hex digits).
pub const CACHE_KEY: &str = "cache_key";

/// Whether a cache lookup was skipped on request.
pub const CACHE_FORCED: &str = "forced";

/// Filesystem path of a cache entry or output file.
pub const PATH: &str = "path";

/// Paragraph index handed to the aligner.
pub const PARAGRAPH: &str = "paragraph";

/// Name of the aligner implementation.
pub const ALIGNER: &str = "aligner";

/// Output format of a rendered report.
pub const OUTPUT_FORMAT: &str = "format";

/// Ranked entries in a rendered report.
pub const PATTERN_COUNT: &str = "patterns";
