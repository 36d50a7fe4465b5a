//! Language-model configuration from TOML (`[llm]` section)

use super::ConfigIssue;
use crate::llm::LlmSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw language-model configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    pub base_url: String,
    /// Path of the reasoning (chat) dialect endpoint
    pub chat_path: String,
    /// Path of the lightweight (generate) dialect endpoint
    pub generate_path: String,
    pub reasoning_model: String,
    pub light_model: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Replaces the server's `Retry-After` hint (useful in tests and local stubs)
    pub retry_after_override_ms: Option<u64>,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        let settings = LlmSettings::default();
        Self {
            base_url: settings.base_url,
            chat_path: settings.chat_path,
            generate_path: settings.generate_path,
            reasoning_model: settings.reasoning_model,
            light_model: settings.light_model,
            timeout_secs: 30,
            retry_after_override_ms: None,
        }
    }
}

impl FileLlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn to_settings(&self) -> LlmSettings {
        LlmSettings {
            base_url: self.base_url.clone(),
            chat_path: self.chat_path.clone(),
            generate_path: self.generate_path.clone(),
            reasoning_model: self.reasoning_model.clone(),
            light_model: self.light_model.clone(),
            retry_after_override: self.retry_after_override_ms.map(Duration::from_millis),
            max_retry_wait: self.timeout(),
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("llm.base_url", &self.base_url),
            ("llm.reasoning_model", &self.reasoning_model),
            ("llm.light_model", &self.light_model),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(field, format!("{} cannot be empty", field)));
            }
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "llm.timeout_secs",
                "llm.timeout_secs cannot be 0",
            ));
        }

        issues
    }
}
