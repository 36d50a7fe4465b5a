//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod completion_client;
pub mod conversation_logger;
pub mod credential;
pub mod progress;
pub mod prompt_repository;
pub mod story_store;
