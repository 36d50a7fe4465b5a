//! Application-level configuration.
//!
//! This module provides configuration types that control how the tutoring
//! use cases build their prompts:
//!
//! - [`OnboardingConfig`]: template key, system prompt, ready signal, sentence window
//! - [`ReviewConfig`]: template key and character window for reviews

pub mod onboarding;
pub mod review;

pub use onboarding::OnboardingConfig;
pub use review::ReviewConfig;
