//! Prompt template configuration from TOML (`[prompts]` section)

use serde::{Deserialize, Serialize};

/// Raw prompt template configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    /// Directory holding `<key>.txt` / `<key>_v<N>.txt` templates
    pub dir: String,
}

impl Default for FilePromptsConfig {
    fn default() -> Self {
        Self {
            dir: "prompts".to_string(),
        }
    }
}
