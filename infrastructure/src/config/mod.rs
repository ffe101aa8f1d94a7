//! Configuration file loading for chatlens
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHATLENS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./chatlens.toml` or `./.chatlens.toml`
//! 4. Global: `$XDG_CONFIG_HOME/chatlens/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAnalysisConfig, FileConfig, FileEvidenceConfig, FileMetricsConfig, FileOutputConfig,
    FileSpeakersConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
