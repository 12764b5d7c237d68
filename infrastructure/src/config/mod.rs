//! Configuration file loading for gapscout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./gapscout.toml` or `./.gapscout.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/gapscout/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_KEY_ENV, FileAnalysisConfig, FileConfig,
    FileExtractionConfig, FileOutputConfig, FileProviderConfig,
};
pub use loader::ConfigLoader;
