//! Story domain.
//!
//! [`ContentSnapshot`] is the immutable view of the writer's story that a
//! single tutoring call evaluates and excerpts from.

use crate::account::AccountConfig;
use serde::{Deserialize, Serialize};

/// Genre used in prompts when none is set.
pub const DEFAULT_GENRE: &str = "General";

/// Placeholder for unset age and archetype hints.
pub const UNKNOWN_HINT: &str = "Unknown";

/// The text under evaluation plus its context, fixed for the duration of one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    /// Story text typed by the writer.
    pub content: String,
    /// Story genre.
    pub genre: String,
    /// Target reader age hint.
    pub age: Option<String>,
    /// Narrative archetype hint (e.g. "Hero's Journey").
    pub archetype: Option<String>,
    /// Account the call is made for.
    pub account: AccountConfig,
}

impl ContentSnapshot {
    pub fn new(content: impl Into<String>, account: AccountConfig) -> Self {
        Self {
            content: content.into(),
            genre: DEFAULT_GENRE.to_string(),
            age: None,
            archetype: None,
            account,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = Some(archetype.into());
        self
    }

    /// Genre for prompt text, falling back to [`DEFAULT_GENRE`].
    pub fn genre_or_default(&self) -> &str {
        non_blank(Some(&self.genre)).unwrap_or(DEFAULT_GENRE)
    }

    /// Age hint for prompt text, falling back to [`UNKNOWN_HINT`].
    pub fn age_or_unknown(&self) -> &str {
        non_blank(self.age.as_ref()).unwrap_or(UNKNOWN_HINT)
    }

    /// Archetype hint for prompt text, falling back to [`UNKNOWN_HINT`].
    pub fn archetype_or_unknown(&self) -> &str {
        non_blank(self.archetype.as_ref()).unwrap_or(UNKNOWN_HINT)
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.as_str()).filter(|s| !s.trim().is_empty())
}
