//! Prompt template for the single-shot review.

use crate::core::string::tail_chars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of trailing characters the review looks at.
pub const DEFAULT_REVIEW_WINDOW: usize = 500;

/// Kind of rule the review hunts for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewType {
    /// Grammar and spelling.
    #[default]
    Orthographic,
    /// Style (word choice, repetition, sentence rhythm).
    Style,
}

impl ReviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewType::Orthographic => "orthographic",
            ReviewType::Style => "style",
        }
    }

    fn rule_kind(&self) -> &'static str {
        match self {
            ReviewType::Orthographic => "grammar or spelling rule",
            ReviewType::Style => "style rule",
        }
    }
}

impl fmt::Display for ReviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Templates for the review step.
pub struct ReviewPromptTemplate;

impl ReviewPromptTemplate {
    /// Build the review prompt over the last `window` characters of `content`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tutor_domain::prompt::{ReviewPromptTemplate, ReviewType};
    ///
    /// let prompt = ReviewPromptTemplate::build("Their going home.", ReviewType::Orthographic, 500);
    /// assert!(prompt.contains("'Their going home.'"));
    /// assert!(prompt.contains("Do not rewrite the text."));
    /// ```
    pub fn build(content: &str, review_type: ReviewType, window: usize) -> String {
        let snippet = tail_chars(content, window);
        format!(
            "You are a teacher. Find exactly one {} broken in this text: '{}'. \
Explain the rule using the 'Sandwich Method' (Praise-Correct-Praise). \
Do not rewrite the text.",
            review_type.rule_kind(),
            snippet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_orthographic() {
        let prompt = ReviewPromptTemplate::build("Me and him goes.", ReviewType::Orthographic, 500);
        assert!(prompt.contains("exactly one grammar or spelling rule"));
        assert!(prompt.contains("Praise-Correct-Praise"));
        assert!(prompt.contains("'Me and him goes.'"));
    }

    #[test]
    fn test_build_style() {
        let prompt = ReviewPromptTemplate::build("Very very very big.", ReviewType::Style, 500);
        assert!(prompt.contains("exactly one style rule"));
    }

    #[test]
    fn test_build_uses_only_the_tail() {
        let content = format!("{}{}", "x".repeat(600), "THE END");
        let prompt = ReviewPromptTemplate::build(&content, ReviewType::Style, 500);
        let quoted = prompt.split('\'').nth(1).unwrap();
        assert_eq!(quoted.chars().count(), 500);
        assert!(quoted.ends_with("THE END"));
    }
}
