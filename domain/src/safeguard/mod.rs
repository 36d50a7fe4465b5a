//! Safeguard domain: the admission gate run before any model call.
//!
//! - [`SafeguardOptions`]: the three configurable content policies
//! - [`SafeguardGate`]: compiled policies plus the ordered checks
//! - [`SafeguardVerdict`] / [`Violation`]: the outcome of a check

mod gate;
mod options;

pub use gate::{SafeguardGate, SafeguardVerdict, Violation, ViolationClass};
pub use options::{DEFAULT_PII_PATTERN, DEFAULT_PROMPT_INJECTION_PATTERN, SafeguardOptions};
