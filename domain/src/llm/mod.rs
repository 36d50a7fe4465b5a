//! Language-model service domain.
//!
//! - [`dialect::Dialect`]: the two request/response shapes of the service
//! - [`response::LlmResponse`]: the discriminated response union
//! - [`failure::UpstreamFailure`]: classified upstream failures and the
//!   writer-facing strings they turn into

pub mod dialect;
pub mod failure;
pub mod response;
