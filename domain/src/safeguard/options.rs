//! Safeguard policy options.

use serde::{Deserialize, Serialize};

/// Matches "ignore previous instructions", "disregard all previous instructions", ...
pub const DEFAULT_PROMPT_INJECTION_PATTERN: &str =
    r"(ignore|disregard)\s+(all\s+)?previous\s+instructions";

/// Matches an email-address shape.
pub const DEFAULT_PII_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Content policies applied by the safeguard gate.
///
/// An empty pattern disables that check. Banned-content patterns are
/// checked in order and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeguardOptions {
    pub prompt_injection_pattern: String,
    pub pii_pattern: String,
    pub banned_words_patterns: Vec<String>,
}

impl Default for SafeguardOptions {
    fn default() -> Self {
        Self {
            prompt_injection_pattern: DEFAULT_PROMPT_INJECTION_PATTERN.to_string(),
            pii_pattern: DEFAULT_PII_PATTERN.to_string(),
            banned_words_patterns: Vec::new(),
        }
    }
}

impl SafeguardOptions {
    /// Options with every content check disabled.
    pub fn disabled() -> Self {
        Self {
            prompt_injection_pattern: String::new(),
            pii_pattern: String::new(),
            banned_words_patterns: Vec::new(),
        }
    }

    pub fn with_prompt_injection_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.prompt_injection_pattern = pattern.into();
        self
    }

    pub fn with_pii_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pii_pattern = pattern.into();
        self
    }

    pub fn with_banned_words_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banned_words_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SafeguardOptions::default();
        assert_eq!(
            options.prompt_injection_pattern,
            DEFAULT_PROMPT_INJECTION_PATTERN
        );
        assert_eq!(options.pii_pattern, DEFAULT_PII_PATTERN);
        assert!(options.banned_words_patterns.is_empty());
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let options: SafeguardOptions =
            serde_json::from_str(r#"{"banned_words_patterns": ["\\bbadword\\b"]}"#).unwrap();
        assert_eq!(options.pii_pattern, DEFAULT_PII_PATTERN);
        assert_eq!(options.banned_words_patterns, vec![r"\bbadword\b"]);
    }
}
