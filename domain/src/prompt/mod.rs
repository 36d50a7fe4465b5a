//! Prompt domain
//!
//! Templates and utilities for building the prompts sent at each tutoring step.

pub mod onboarding;
pub mod placeholder;
pub mod review;

pub use onboarding::OnboardingPromptTemplate;
pub use placeholder::format_template;
pub use review::{ReviewPromptTemplate, ReviewType};
