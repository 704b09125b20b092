//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CacheConfig, CollationConfig, OutputConfig, RankingConfig};
use crate::constants::{
    MAX_PRECISION, MAX_WITNESSES, MIN_WITNESSES, OUTPUT_FORMATS, PROJECT_CONFIG_FILE,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`WITREL_*`)
/// 3. Project config (`witrel.toml` in the project root)
/// 4. User config (`~/.witrel/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WitrelConfig {
    pub collation: CollationConfig,
    pub ranking: RankingConfig,
    pub cache: CacheConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub precision: Option<u32>,
    pub top: Option<usize>,
    pub parallel: Option<bool>,
    pub output_format: Option<String>,
    pub output_path: Option<PathBuf>,
    pub witness_count: Option<usize>,
}

impl WitrelConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &WitrelConfig) -> Result<(), ConfigError> {
        if let Some(count) = config.collation.witness_count {
            if !(MIN_WITNESSES..=MAX_WITNESSES).contains(&count) {
                return Err(ConfigError::ValidationFailed {
                    field: "collation.witness_count".to_string(),
                    message: format!("must be between {MIN_WITNESSES} and {MAX_WITNESSES}"),
                });
            }
        }
        if let Some(ref sentinel) = config.collation.absent_sentinel {
            if sentinel.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "collation.absent_sentinel".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let (Some(first), Some(last)) = (
            config.collation.first_paragraph,
            config.collation.last_paragraph,
        ) {
            if last < first {
                return Err(ConfigError::ValidationFailed {
                    field: "collation.last_paragraph".to_string(),
                    message: "must not precede first_paragraph".to_string(),
                });
            }
        }
        if let Some(precision) = config.ranking.precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::ValidationFailed {
                    field: "ranking.precision".to_string(),
                    message: format!("must be between 0 and {MAX_PRECISION}"),
                });
            }
        }
        if config.ranking.shard_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "ranking.shard_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref format) = config.output.format {
            if !OUTPUT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "output.format".to_string(),
                    message: format!(
                        "unknown format {format:?}, expected one of {}",
                        OUTPUT_FORMATS.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.witrel/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut WitrelConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: WitrelConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut WitrelConfig, other: &WitrelConfig) {
        // Collation
        if other.collation.absent_sentinel.is_some() {
            base.collation.absent_sentinel = other.collation.absent_sentinel.clone();
        }
        if other.collation.witness_count.is_some() {
            base.collation.witness_count = other.collation.witness_count;
        }
        if other.collation.first_paragraph.is_some() {
            base.collation.first_paragraph = other.collation.first_paragraph;
        }
        if other.collation.last_paragraph.is_some() {
            base.collation.last_paragraph = other.collation.last_paragraph;
        }

        // Ranking
        if other.ranking.precision.is_some() {
            base.ranking.precision = other.ranking.precision;
        }
        if other.ranking.top.is_some() {
            base.ranking.top = other.ranking.top;
        }
        if other.ranking.parallel.is_some() {
            base.ranking.parallel = other.ranking.parallel;
        }
        if other.ranking.shard_size.is_some() {
            base.ranking.shard_size = other.ranking.shard_size;
        }

        // Cache
        if other.cache.dir.is_some() {
            base.cache.dir = other.cache.dir.clone();
        }
        if other.cache.force.is_some() {
            base.cache.force = other.cache.force;
        }
        if other.cache.enabled.is_some() {
            base.cache.enabled = other.cache.enabled;
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
        if other.output.path.is_some() {
            base.output.path = other.output.path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `WITREL_RANKING_PRECISION`, `WITREL_CACHE_FORCE`, etc.
    fn apply_env_overrides(config: &mut WitrelConfig) {
        if let Ok(val) = std::env::var("WITREL_COLLATION_ABSENT_SENTINEL") {
            config.collation.absent_sentinel = Some(val);
        }
        if let Ok(val) = std::env::var("WITREL_COLLATION_WITNESS_COUNT") {
            if let Ok(v) = val.parse::<usize>() {
                config.collation.witness_count = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WITREL_RANKING_PRECISION") {
            if let Ok(v) = val.parse::<u32>() {
                config.ranking.precision = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WITREL_RANKING_TOP") {
            if let Ok(v) = val.parse::<usize>() {
                config.ranking.top = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WITREL_RANKING_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.ranking.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WITREL_CACHE_DIR") {
            config.cache.dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("WITREL_CACHE_FORCE") {
            if let Ok(v) = val.parse::<bool>() {
                config.cache.force = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WITREL_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut WitrelConfig, cli: &CliOverrides) {
        if let Some(v) = cli.precision {
            config.ranking.precision = Some(v);
        }
        if let Some(v) = cli.top {
            config.ranking.top = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.ranking.parallel = Some(v);
        }
        if let Some(ref v) = cli.output_format {
            config.output.format = Some(v.clone());
        }
        if let Some(ref v) = cli.output_path {
            config.output.path = Some(v.clone());
        }
        if let Some(v) = cli.witness_count {
            config.collation.witness_count = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.witrel/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".witrel"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
