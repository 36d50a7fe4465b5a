//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod onboarding;
pub mod prompt_strategy;
pub mod review;
pub(crate) mod shared;
pub mod tutor_orchestrator;

#[cfg(test)]
pub(crate) mod test_support;
