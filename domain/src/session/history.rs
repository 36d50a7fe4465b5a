//! Per-session tutoring history.

use super::mode::TutorMode;
use super::stage::OnboardingStage;
use serde::{Deserialize, Serialize};

/// In-memory state for one writer's tutoring session.
///
/// Holds the model's utterances in order (append-only until [`clear`](Self::clear)),
/// the current [`TutorMode`] and the last recognized status signal.
///
/// Each session owns exactly one instance; it is never shared between
/// sessions and never persisted. Callers must not run two tutoring calls
/// for the same session concurrently, since the onboarding stage is derived
/// from [`count`](Self::count).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHistory {
    mode: TutorMode,
    history: Vec<String>,
    last_status: Option<String>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a model utterance.
    pub fn add_utterance(&mut self, text: impl Into<String>) {
        self.history.push(text.into());
    }

    pub fn set_mode(&mut self, mode: TutorMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> TutorMode {
        self.mode
    }

    /// Reset history, mode and status, as when a session is restarted.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of model utterances recorded.
    pub fn count(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// All utterances, oldest first.
    pub fn utterances(&self) -> &[String] {
        &self.history
    }

    /// The most recent model utterance.
    pub fn last_utterance(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    pub fn set_last_status(&mut self, status: Option<String>) {
        self.last_status = status;
    }

    /// Onboarding stage for the next call.
    pub fn onboarding_stage(&self) -> OnboardingStage {
        OnboardingStage::from_history_len(self.count())
    }
}
