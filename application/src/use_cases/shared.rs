//! Shared helpers for the prompt strategies.

use crate::ports::completion_client::CompletionClient;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use tracing::debug;
use tutor_domain::{ContentSnapshot, SessionHistory};

/// Send `prompt` for the snapshot's account, append the reply to the
/// session history and return it.
///
/// The transcript gets the full prompt; tracing only gets its length.
pub(crate) async fn send_and_record(
    client: &dyn CompletionClient,
    logger: &dyn ConversationLogger,
    strategy: &'static str,
    prompt: &str,
    snapshot: &ContentSnapshot,
    session: &mut SessionHistory,
) -> String {
    let account = &snapshot.account;

    debug!(
        strategy,
        prompt_chars = prompt.chars().count(),
        reasoning = account.use_reasoning_model,
        "Sending tutor prompt"
    );
    logger.log(ConversationEvent::new(
        "prompt_sent",
        serde_json::json!({
            "strategy": strategy,
            "history_count": session.count(),
            "prompt_chars": prompt.chars().count(),
            "reasoning": account.use_reasoning_model,
            "prompt": prompt,
        }),
    ));

    let response = client
        .get_completion(prompt, account, account.use_reasoning_model)
        .await;

    session.add_utterance(response.clone());

    logger.log(ConversationEvent::new(
        "model_response",
        serde_json::json!({
            "strategy": strategy,
            "history_count": session.count(),
            "text": response,
        }),
    ));

    response
}
