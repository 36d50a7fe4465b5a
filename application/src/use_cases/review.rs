//! Single-shot review strategy.

use super::prompt_strategy::{PromptRequest, PromptStrategy};
use super::shared::send_and_record;
use crate::config::ReviewConfig;
use crate::ports::completion_client::CompletionClient;
use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::prompt_repository::PromptTemplateRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tutor_domain::core::string::tail_chars;
use tutor_domain::{ContentSnapshot, ReviewPromptTemplate, ReviewType, SessionHistory};

/// Asks the model to point out one broken rule in the tail of the story.
///
/// The response is appended to the session history, but the prompt never
/// depends on it.
pub struct ReviewStrategy {
    client: Arc<dyn CompletionClient>,
    templates: Arc<dyn PromptTemplateRepository>,
    logger: Arc<dyn ConversationLogger>,
    config: ReviewConfig,
}

impl ReviewStrategy {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        templates: Arc<dyn PromptTemplateRepository>,
        logger: Arc<dyn ConversationLogger>,
        config: ReviewConfig,
    ) -> Self {
        Self {
            client,
            templates,
            logger,
            config,
        }
    }

    pub fn build_prompt(&self, snapshot: &ContentSnapshot, review_type: ReviewType) -> String {
        let snippet = tail_chars(&snapshot.content, self.config.char_window);
        let variables = [
            ("Snippet", snippet),
            ("ReviewType", review_type.as_str()),
            ("Genre", snapshot.genre_or_default()),
        ];

        self.templates
            .formatted(&self.config.template_key, &variables)
            .unwrap_or_else(|| {
                ReviewPromptTemplate::build(
                    &snapshot.content,
                    review_type,
                    self.config.char_window,
                )
            })
    }
}

#[async_trait]
impl PromptStrategy for ReviewStrategy {
    fn name(&self) -> &'static str {
        "review"
    }

    async fn execute(&self, request: PromptRequest<'_>, session: &mut SessionHistory) -> String {
        let review_type = request.review_type.unwrap_or_default();
        let prompt = self.build_prompt(request.snapshot, review_type);

        send_and_record(
            self.client.as_ref(),
            self.logger.as_ref(),
            self.name(),
            &prompt,
            request.snapshot,
            session,
        )
        .await
    }
}
