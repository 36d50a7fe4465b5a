//! Onboarding stage.
//!
//! The stage is never stored. It is computed from the number of model
//! utterances already in the session, capped at the last stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four turns of the onboarding conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStage {
    /// Ask one sensory question.
    Sensory,
    /// Narrow an attribute of the previous answer.
    Narrowing,
    /// Ask the writer to imagine a scenario.
    Scenario,
    /// Emit the ready signal or ask one final clarifying question.
    Readiness,
}

impl OnboardingStage {
    /// Derive the stage from the history length: `min(count, 3)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tutor_domain::OnboardingStage;
    ///
    /// assert_eq!(OnboardingStage::from_history_len(0), OnboardingStage::Sensory);
    /// assert_eq!(OnboardingStage::from_history_len(2), OnboardingStage::Scenario);
    /// assert_eq!(OnboardingStage::from_history_len(7), OnboardingStage::Readiness);
    /// ```
    pub fn from_history_len(count: usize) -> Self {
        match count.min(3) {
            0 => OnboardingStage::Sensory,
            1 => OnboardingStage::Narrowing,
            2 => OnboardingStage::Scenario,
            _ => OnboardingStage::Readiness,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStage::Sensory => "sensory",
            OnboardingStage::Narrowing => "narrowing",
            OnboardingStage::Scenario => "scenario",
            OnboardingStage::Readiness => "readiness",
        }
    }
}

impl fmt::Display for OnboardingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_sequence() {
        let stages: Vec<_> = (0..6).map(OnboardingStage::from_history_len).collect();
        assert_eq!(
            stages,
            vec![
                OnboardingStage::Sensory,
                OnboardingStage::Narrowing,
                OnboardingStage::Scenario,
                OnboardingStage::Readiness,
                OnboardingStage::Readiness,
                OnboardingStage::Readiness,
            ]
        );
    }
}
