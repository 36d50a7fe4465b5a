//! Language-model service adapter.
//!
//! [`LanguageModelClient`] implements the
//! [`CompletionClient`](tutor_application::CompletionClient) port on top of an
//! [`HttpTransport`]. The transport is a seam: production uses
//! [`ReqwestTransport`], tests script replies and count calls.

mod client;
mod transport;

pub use client::{LanguageModelClient, LlmSettings};
pub use transport::{HttpReply, HttpRequest, HttpTransport, ReqwestTransport, TransportError};
