//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the daily-rolling diagnostic log. Unset disables it.
    pub dir: Option<String>,
    /// JSONL transcript file. Unset disables it.
    pub conversation_log: Option<String>,
}
