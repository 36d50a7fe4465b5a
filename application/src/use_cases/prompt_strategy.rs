//! Prompt strategy seam.
//!
//! A strategy turns a content snapshot plus the session history into one
//! fully-formed prompt, sends it, records the reply in the history and
//! returns it.

use async_trait::async_trait;
use tutor_domain::{ContentSnapshot, ReviewType, SessionHistory};

/// Input handed to a strategy for one call.
#[derive(Debug, Clone, Copy)]
pub struct PromptRequest<'a> {
    pub snapshot: &'a ContentSnapshot,
    /// Only read by the review strategy.
    pub review_type: Option<ReviewType>,
}

impl<'a> PromptRequest<'a> {
    pub fn new(snapshot: &'a ContentSnapshot) -> Self {
        Self {
            snapshot,
            review_type: None,
        }
    }

    pub fn with_review_type(mut self, review_type: ReviewType) -> Self {
        self.review_type = Some(review_type);
        self
    }
}

/// Builds a prompt, calls the completion client and records the response.
#[async_trait]
pub trait PromptStrategy: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Run one call. Always returns text (a completion or a service-error string).
    async fn execute(&self, request: PromptRequest<'_>, session: &mut SessionHistory) -> String;
}
