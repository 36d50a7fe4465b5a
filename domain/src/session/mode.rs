//! Tutor mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the tutor is currently doing for this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorMode {
    #[default]
    Idle,
    Chat,
    /// The staged "spark" conversation that gets a writer unstuck.
    Onboarding,
    Planning,
    Review,
}

impl TutorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TutorMode::Idle => "idle",
            TutorMode::Chat => "chat",
            TutorMode::Onboarding => "onboarding",
            TutorMode::Planning => "planning",
            TutorMode::Review => "review",
        }
    }
}

impl fmt::Display for TutorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
