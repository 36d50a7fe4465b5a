//! Completion client port
//!
//! Defines how the tutoring use cases talk to the language-model service.

use async_trait::async_trait;
use tutor_domain::AccountConfig;

/// Sends one prompt to the language-model service and returns its text.
///
/// Implementations never fail: every upstream problem (refused credential,
/// rate limiting, malformed body, timeout) is turned into a fixed
/// writer-safe string such as [`SERVICE_ERROR_MESSAGE`](tutor_domain::SERVICE_ERROR_MESSAGE)
/// before it leaves the adapter.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Get a completion for `prompt` on behalf of `account`.
    ///
    /// `use_reasoning_model` selects the chat-style reasoning dialect;
    /// otherwise the lightweight generate dialect is used.
    async fn get_completion(
        &self,
        prompt: &str,
        account: &AccountConfig,
        use_reasoning_model: bool,
    ) -> String;
}
