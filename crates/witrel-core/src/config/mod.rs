//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod cache_config;
pub mod collation_config;
pub mod output_config;
pub mod ranking_config;
pub mod run_config;
pub mod witrel_config;

pub use cache_config::CacheConfig;
pub use collation_config::CollationConfig;
pub use output_config::OutputConfig;
pub use ranking_config::RankingConfig;
pub use run_config::RunConfig;
pub use witrel_config::{CliOverrides, WitrelConfig};
