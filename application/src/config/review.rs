//! Review strategy parameters.

use serde::{Deserialize, Serialize};
use tutor_domain::prompt::review::DEFAULT_REVIEW_WINDOW;

/// Parameters of the single-shot review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Key looked up in the prompt template repository.
    pub template_key: String,
    /// Number of trailing characters reviewed.
    pub char_window: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            template_key: "review".to_string(),
            char_window: DEFAULT_REVIEW_WINDOW,
        }
    }
}
