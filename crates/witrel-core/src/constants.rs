//! Shared constants for the witness relationship engine.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Symbols used to spell pattern labels, in canonical order.
pub const LABEL_SYMBOLS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fewest witnesses a comparison makes sense for.
pub const MIN_WITNESSES: usize = 2;

/// Most witnesses a label can spell (one symbol per witness).
pub const MAX_WITNESSES: usize = LABEL_SYMBOLS.len();

/// Reading substituted for a witness that contributes nothing to a segment.
pub const DEFAULT_ABSENT_SENTINEL: &str = "---";

/// Decimal places kept on report percentages.
pub const DEFAULT_PRECISION: u32 = 2;

/// Upper bound on configurable precision.
pub const MAX_PRECISION: u32 = 6;

/// Segments per shard when classification runs in parallel.
pub const DEFAULT_SHARD_SIZE: usize = 4096;

/// Progress events are emitted every this many classified segments.
pub const PROGRESS_INTERVAL: usize = 1000;

/// Default directory for cached collation tables.
pub const DEFAULT_CACHE_DIR: &str = ".witrel/cache";

/// Default report format.
pub const DEFAULT_OUTPUT_FORMAT: &str = "text";

/// Report formats understood by the reporters.
pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "plot"];

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "witrel.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "WITREL_LOG";

/// Filter used when `WITREL_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "witrel=info";
