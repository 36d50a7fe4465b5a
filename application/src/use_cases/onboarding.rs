//! Staged onboarding ("spark") strategy.
//!
//! The stage is never stored: it is derived from the history length at the
//! moment of the call, so each response advances the conversation by one
//! stage until the readiness stage, which repeats.

use super::prompt_strategy::{PromptRequest, PromptStrategy};
use super::shared::send_and_record;
use crate::config::OnboardingConfig;
use crate::ports::completion_client::CompletionClient;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::prompt_repository::PromptTemplateRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use tutor_domain::{
    ContentSnapshot, OnboardingPromptTemplate, OnboardingStage, SessionHistory, parse_ready_signal,
};

/// Four-stage Socratic onboarding conversation.
pub struct OnboardingStrategy {
    client: Arc<dyn CompletionClient>,
    templates: Arc<dyn PromptTemplateRepository>,
    logger: Arc<dyn ConversationLogger>,
    config: OnboardingConfig,
}

impl OnboardingStrategy {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        templates: Arc<dyn PromptTemplateRepository>,
        logger: Arc<dyn ConversationLogger>,
        config: OnboardingConfig,
    ) -> Self {
        Self {
            client,
            templates,
            logger,
            config,
        }
    }

    /// Build the full prompt for the stage derived from `session`.
    pub fn build_prompt(&self, snapshot: &ContentSnapshot, session: &SessionHistory) -> String {
        let stage = session.onboarding_stage();
        let variables = OnboardingPromptTemplate::template_variables(snapshot);
        let template = self.templates.formatted(&self.config.template_key, &variables);

        let preamble = OnboardingPromptTemplate::preamble(
            template.as_deref(),
            self.config.system_prompt.as_deref(),
            snapshot,
        );
        let instruction =
            OnboardingPromptTemplate::instruction(stage, &self.config.ready_signal_json);
        let user = OnboardingPromptTemplate::user_prompt(
            &snapshot.content,
            self.config.sentence_window,
            session.last_utterance(),
        );

        OnboardingPromptTemplate::compose(&preamble, &instruction, &user)
    }
}

#[async_trait]
impl PromptStrategy for OnboardingStrategy {
    fn name(&self) -> &'static str {
        "onboarding"
    }

    async fn execute(&self, request: PromptRequest<'_>, session: &mut SessionHistory) -> String {
        let stage = session.onboarding_stage();
        debug!(stage = %stage, history = session.count(), "Onboarding turn");

        let prompt = self.build_prompt(request.snapshot, session);
        let response = send_and_record(
            self.client.as_ref(),
            self.logger.as_ref(),
            self.name(),
            &prompt,
            request.snapshot,
            session,
        )
        .await;

        if stage == OnboardingStage::Readiness
            && let Some(status) = parse_ready_signal(&response)
        {
            info!(status, "Writer reached the ready signal");
            session.set_last_status(Some(status.to_string()));
            self.logger.log(ConversationEvent::new(
                "ready_signal",
                serde_json::json!({ "status": status, "history_count": session.count() }),
            ));
        }

        response
    }
}
