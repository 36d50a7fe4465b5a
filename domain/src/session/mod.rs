//! Tutoring session domain.
//!
//! - [`mode::TutorMode`]: what the tutor is currently doing
//! - [`history::SessionHistory`]: per-session model utterances and status
//! - [`stage::OnboardingStage`]: onboarding stage derived from history length
//! - [`status`]: the structured "ready to write" signal

pub mod history;
pub mod mode;
pub mod stage;
pub mod status;
