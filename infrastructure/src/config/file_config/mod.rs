//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Sections that map one-to-one onto domain or application types
//! (`[safeguard]`, `[onboarding]`, `[review]`) deserialize into those types
//! directly.

mod account;
mod llm;
mod logging;
mod output;
mod prompts;

pub use account::FileAccountConfig;
pub use llm::FileLlmConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use prompts::FilePromptsConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tutor_application::{OnboardingConfig, ReviewConfig};
use tutor_domain::{SafeguardGate, SafeguardOptions, parse_ready_signal};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field, e.g. `llm.timeout_secs`.
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Language-model endpoint and models
    pub llm: FileLlmConfig,
    /// Safeguard gate patterns
    pub safeguard: SafeguardOptions,
    /// Onboarding conversation parameters
    pub onboarding: OnboardingConfig,
    /// Review parameters
    pub review: ReviewConfig,
    /// Prompt template directory
    pub prompts: FilePromptsConfig,
    /// Account credential and dialect choice
    pub account: FileAccountConfig,
    /// Log file locations
    pub logging: FileLoggingConfig,
    /// Console output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// An empty list means the configuration is usable as-is.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Safeguard patterns must compile
        if let Err(e) = SafeguardGate::new(&self.safeguard) {
            issues.push(ConfigIssue::error("safeguard", e.to_string()));
        }

        // 2. Endpoint and models
        issues.extend(self.llm.validate());

        // 3. Prompt windows
        if self.onboarding.sentence_window == 0 {
            issues.push(ConfigIssue::warning(
                "onboarding.sentence_window",
                "onboarding.sentence_window is 0; prompts will carry no story text",
            ));
        }
        if self.review.char_window == 0 {
            issues.push(ConfigIssue::warning(
                "review.char_window",
                "review.char_window is 0; reviews will see no story text",
            ));
        }

        // 4. The model is asked to echo the ready JSON, so it must be recognizable
        if parse_ready_signal(&self.onboarding.ready_signal_json).is_none() {
            issues.push(ConfigIssue::warning(
                "onboarding.ready_signal_json",
                format!(
                    "onboarding.ready_signal_json '{}' is not a recognized ready signal; \
onboarding will never finish on its own",
                    self.onboarding.ready_signal_json
                ),
            ));
        }

        // 5. Missing credential: every call will be refused by the gate
        if self.account.protected_credential.is_blank() {
            issues.push(ConfigIssue::warning(
                "account.protected_credential",
                "account.protected_credential is not set; every tutoring call will be refused",
            ));
        }

        issues
    }

    /// Directory searched for prompt templates.
    pub fn prompts_dir(&self) -> PathBuf {
        expand_home(&self.prompts.dir)
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_domain::DEFAULT_READY_SIGNAL_JSON;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[llm]
base_url = "http://localhost:8080"
reasoning_model = "command-r"
retry_after_override_ms = 0

[safeguard]
banned_words_patterns = ['\bass\b']

[onboarding]
template_key = "spark"
system_prompt = "Role: a gentle tutor."
sentence_window = 6

[review]
char_window = 300

[prompts]
dir = "prompts"

[account]
protected_credential = "env:COHERE_API_KEY"
use_reasoning_model = false

[logging]
dir = "logs"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.base_url, "http://localhost:8080");
        assert_eq!(config.llm.reasoning_model, "command-r");
        assert_eq!(config.llm.light_model, "command-light");
        assert_eq!(config.safeguard.banned_words_patterns, vec![r"\bass\b"]);
        assert!(!config.safeguard.pii_pattern.is_empty());
        assert_eq!(
            config.onboarding.system_prompt.as_deref(),
            Some("Role: a gentle tutor.")
        );
        assert_eq!(config.onboarding.sentence_window, 6);
        assert_eq!(config.onboarding.ready_signal_json, DEFAULT_READY_SIGNAL_JSON);
        assert_eq!(config.review.char_window, 300);
        assert!(!config.account.use_reasoning_model);
        assert_eq!(config.logging.dir.as_deref(), Some("logs"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.onboarding.template_key, "spark");
        assert_eq!(config.review.template_key, "review");
        assert!(config.account.use_reasoning_model);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_only_warns_about_credential() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].field, "account.protected_credential");
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let toml_str = r#"
[llm]
light_model = ""
timeout_secs = 0

[safeguard]
pii_pattern = "(unclosed"

[onboarding]
ready_signal_json = "DONE"
sentence_window = 0

[account]
protected_credential = "sk-test"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let fields: Vec<String> = config.validate().into_iter().map(|i| i.field).collect();

        assert_eq!(
            fields,
            vec![
                "safeguard",
                "llm.light_model",
                "llm.timeout_secs",
                "onboarding.sentence_window",
                "onboarding.ready_signal_json",
            ]
        );
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("prompts"), PathBuf::from("prompts"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/prompts"), home.join("prompts"));
        }
    }
}
