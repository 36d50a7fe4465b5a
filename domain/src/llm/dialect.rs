//! Request dialects of the language-model service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default model for the reasoning (chat) dialect.
pub const DEFAULT_REASONING_MODEL: &str = "command-r-plus";

/// Default model for the lightweight (generate) dialect.
pub const DEFAULT_LIGHT_MODEL: &str = "command-light";

/// Which payload/response shape a call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Chat-style: `{ "message", "model" }` → `message.content[]`.
    Reasoning,
    /// Generate-style: `{ "prompt", "model" }` → `generations[]`.
    Lightweight,
}

impl Dialect {
    /// Pick the dialect from the account's reasoning flag.
    pub fn from_reasoning_flag(use_reasoning_model: bool) -> Self {
        if use_reasoning_model {
            Dialect::Reasoning
        } else {
            Dialect::Lightweight
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Reasoning => "reasoning",
            Dialect::Lightweight => "lightweight",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a reasoning-dialect request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub model: String,
}

/// Body of a lightweight-dialect request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub model: String,
}

/// Either request body, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CompletionRequest {
    Chat(ChatRequest),
    Generate(GenerateRequest),
}

impl CompletionRequest {
    /// Build the request body for `dialect`.
    pub fn new(dialect: Dialect, prompt: impl Into<String>, model: impl Into<String>) -> Self {
        match dialect {
            Dialect::Reasoning => CompletionRequest::Chat(ChatRequest {
                message: prompt.into(),
                model: model.into(),
            }),
            Dialect::Lightweight => CompletionRequest::Generate(GenerateRequest {
                prompt: prompt.into(),
                model: model.into(),
            }),
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            CompletionRequest::Chat(_) => Dialect::Reasoning,
            CompletionRequest::Generate(_) => Dialect::Lightweight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_flag() {
        assert_eq!(Dialect::from_reasoning_flag(true), Dialect::Reasoning);
        assert_eq!(Dialect::from_reasoning_flag(false), Dialect::Lightweight);
    }

    #[test]
    fn test_chat_request_shape() {
        let request = CompletionRequest::new(Dialect::Reasoning, "hi", DEFAULT_REASONING_MODEL);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "hi", "model": "command-r-plus" })
        );
        assert_eq!(request.dialect(), Dialect::Reasoning);
    }

    #[test]
    fn test_generate_request_shape() {
        let request = CompletionRequest::new(Dialect::Lightweight, "hi", DEFAULT_LIGHT_MODEL);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "prompt": "hi", "model": "command-light" })
        );
    }
}
