//! Onboarding strategy parameters.

use serde::{Deserialize, Serialize};
use tutor_domain::DEFAULT_READY_SIGNAL_JSON;
use tutor_domain::prompt::onboarding::DEFAULT_SENTENCE_WINDOW;

/// Parameters of the staged onboarding conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    /// Key looked up in the prompt template repository.
    pub template_key: String,
    /// Role text used when no stored template exists. `None` uses the built-in role.
    pub system_prompt: Option<String>,
    /// JSON the model is told to emit when the writer is ready.
    pub ready_signal_json: String,
    /// Number of trailing story sentences sent with each prompt.
    pub sentence_window: usize,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            template_key: "spark".to_string(),
            system_prompt: None,
            ready_signal_json: DEFAULT_READY_SIGNAL_JSON.to_string(),
            sentence_window: DEFAULT_SENTENCE_WINDOW,
        }
    }
}

impl OnboardingConfig {
    // ==================== Builder Methods ====================

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OnboardingConfig::default();
        assert_eq!(config.template_key, "spark");
        assert_eq!(config.sentence_window, 4);
        assert!(config.ready_signal_json.contains("READY_TO_WRITE"));
        assert!(config.system_prompt.is_none());
    }
}
