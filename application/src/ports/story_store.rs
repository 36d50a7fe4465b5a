//! Story persistence port
//!
//! The tutoring core never touches storage; callers load a story through
//! this port and build a [`ContentSnapshot`] from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tutor_domain::{AccountConfig, ContentSnapshot};

/// Errors that can occur while loading or saving a story
#[derive(Error, Debug)]
pub enum StoryStoreError {
    #[error("Story not found: {0}")]
    NotFound(String),

    #[error("Story '{id}' is malformed: {message}")]
    Malformed { id: String, message: String },

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryRecord {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub age: Option<String>,
    pub archetype: Option<String>,
    pub content: String,
}

impl Default for StoryRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: "Untitled Story".to_string(),
            genre: "General".to_string(),
            age: None,
            archetype: None,
            content: String::new(),
        }
    }
}

impl StoryRecord {
    /// Snapshot of this story for one tutoring call.
    pub fn to_snapshot(&self, account: AccountConfig) -> ContentSnapshot {
        ContentSnapshot {
            content: self.content.clone(),
            genre: self.genre.clone(),
            age: self.age.clone(),
            archetype: self.archetype.clone(),
            account,
        }
    }
}

/// Loads and saves stories.
pub trait StoryStore: Send + Sync {
    fn load(&self, id: &str) -> Result<StoryRecord, StoryStoreError>;
    fn save(&self, story: &StoryRecord) -> Result<(), StoryStoreError>;
}
