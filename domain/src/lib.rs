//! Domain layer for story-tutor
//!
//! This crate contains the core tutoring rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Safeguard gate
//!
//! Every tutoring call is admitted by [`SafeguardGate`] first. It checks, in
//! order, the account credential, prompt-injection patterns, personal
//! information and banned content. A rejected call never reaches the network.
//!
//! ## Session history
//!
//! [`SessionHistory`] records the model's utterances for one writer's session.
//! The onboarding conversation derives its [`OnboardingStage`] from how many
//! utterances are already recorded.
//!
//! ## Dialects
//!
//! The language-model service speaks two [`Dialect`]s: a chat-style reasoning
//! dialect and a lightweight generate dialect, each with its own response shape.

pub mod account;
pub mod core;
pub mod llm;
pub mod prompt;
pub mod safeguard;
pub mod session;
pub mod story;

// Re-export commonly used types
pub use account::{AccountConfig, ProtectedCredential};
pub use core::error::DomainError;
pub use llm::{
    dialect::{CompletionRequest, DEFAULT_LIGHT_MODEL, DEFAULT_REASONING_MODEL, Dialect},
    failure::{FORMAT_ERROR_MESSAGE, NO_RESPONSE_MESSAGE, SERVICE_ERROR_MESSAGE, UpstreamFailure},
    response::LlmResponse,
};
pub use prompt::{OnboardingPromptTemplate, ReviewPromptTemplate, ReviewType, format_template};
pub use safeguard::{SafeguardGate, SafeguardOptions, SafeguardVerdict, Violation, ViolationClass};
pub use session::{
    history::SessionHistory,
    mode::TutorMode,
    stage::OnboardingStage,
    status::{DEFAULT_READY_SIGNAL_JSON, READY_TO_WRITE, parse_ready_signal},
};
pub use story::ContentSnapshot;
