//! Configuration file loading for story-tutor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STORY_TUTOR_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./story-tutor.toml` or `./.story-tutor.toml`
//! 4. Global: `$XDG_CONFIG_HOME/story-tutor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileAccountConfig, FileConfig, FileLlmConfig, FileLoggingConfig,
    FileOutputConfig, FilePromptsConfig, Severity, expand_home,
};
pub use loader::{ConfigError, ConfigLoader};
