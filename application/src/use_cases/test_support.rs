//! Test doubles shared by the use case tests.

use crate::ports::completion_client::CompletionClient;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::prompt_repository::PromptTemplateRepository;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tutor_domain::{AccountConfig, ContentSnapshot, ProtectedCredential};

/// A recorded completion call.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub prompt: String,
    pub use_reasoning_model: bool,
}

/// Completion client that replays scripted replies and records every call.
pub(crate) struct ScriptedClient {
    replies: Mutex<VecDeque<String>>,
    fallback: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            fallback: "OK".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn get_completion(
        &self,
        prompt: &str,
        _account: &AccountConfig,
        use_reasoning_model: bool,
    ) -> String {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            use_reasoning_model,
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// In-memory template repository.
#[derive(Default)]
pub(crate) struct MemoryTemplates(pub HashMap<String, String>);

impl MemoryTemplates {
    pub fn with(key: &str, template: &str) -> Self {
        let mut map = HashMap::new();
        map.insert(key.to_string(), template.to_string());
        Self(map)
    }
}

impl PromptTemplateRepository for MemoryTemplates {
    fn latest(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// Logger that keeps event types in memory.
#[derive(Default)]
pub(crate) struct MemoryLogger(pub Mutex<Vec<(String, serde_json::Value)>>);

impl MemoryLogger {
    pub fn event_types(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl ConversationLogger for MemoryLogger {
    fn log(&self, event: ConversationEvent) {
        self.0
            .lock()
            .unwrap()
            .push((event.event_type.to_string(), event.payload));
    }
}

pub(crate) fn valid_account() -> AccountConfig {
    AccountConfig::new(ProtectedCredential::new("sk-test"))
}

pub(crate) fn story(content: &str) -> ContentSnapshot {
    ContentSnapshot::new(content, valid_account())
}
