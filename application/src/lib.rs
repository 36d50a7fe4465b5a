//! Application layer for story-tutor
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{OnboardingConfig, ReviewConfig};
pub use ports::{
    completion_client::CompletionClient,
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    credential::{CredentialError, CredentialUnwrapper},
    progress::{NoProgress, ProgressNotifier},
    prompt_repository::{NoPromptTemplates, PromptTemplateRepository},
    story_store::{StoryRecord, StoryStore, StoryStoreError},
};
pub use use_cases::onboarding::OnboardingStrategy;
pub use use_cases::prompt_strategy::{PromptRequest, PromptStrategy};
pub use use_cases::review::ReviewStrategy;
pub use use_cases::tutor_orchestrator::TutorOrchestrator;
