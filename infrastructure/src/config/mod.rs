//! Configuration file loading for tablevote
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./tablevote.toml` or `./.tablevote.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/tablevote/config.toml`
//! 4. Fallback: `~/.config/tablevote/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGroupConfig, FileOutputConfig, FileOutputFormat, FileRecommendationConfig,
};
pub use loader::ConfigLoader;
