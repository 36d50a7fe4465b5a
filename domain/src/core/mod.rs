//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: excerpt helpers used when building prompts

pub mod error;
pub mod string;
