//! Response shapes of the language-model service.
//!
//! The body's top-level key decides the shape before any structured
//! decoding happens:
//!
//! ```text
//! { "message": { "content": [ { "type": "text", "text": "…" } ] } }  → Chat
//! { "generations": [ { "text": "…" } ] }                               → Generate
//! ```
//!
//! A body that is not JSON, has neither key, or has the shape the dialect
//! does not expect is a [`UpstreamFailure::Format`].

use super::dialect::Dialect;
use super::failure::UpstreamFailure;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One item of a chat response's `message.content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatContentItem {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub content: Vec<ChatContentItem>,
}

/// Chat-shape response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    #[serde(default)]
    pub text: Option<String>,
}

/// Generate-shape response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub generations: Vec<Generation>,
}

/// A decoded service response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmResponse {
    Chat(ChatResponse),
    Generate(GenerateResponse),
}

impl LlmResponse {
    /// Decode `body`, discriminating on the top-level key.
    pub fn parse(body: &str) -> Result<Self, UpstreamFailure> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| UpstreamFailure::Format(e.to_string()))?;

        let Value::Object(map) = &value else {
            return Err(UpstreamFailure::Format("body is not a JSON object".into()));
        };

        if map.contains_key("message") {
            serde_json::from_value(value)
                .map(LlmResponse::Chat)
                .map_err(|e| UpstreamFailure::Format(e.to_string()))
        } else if map.contains_key("generations") {
            serde_json::from_value(value)
                .map(LlmResponse::Generate)
                .map_err(|e| UpstreamFailure::Format(e.to_string()))
        } else {
            Err(UpstreamFailure::Format(
                "neither 'message' nor 'generations' present".into(),
            ))
        }
    }

    /// Decode `body` and require the shape that `dialect` answers with.
    pub fn parse_for(dialect: Dialect, body: &str) -> Result<Self, UpstreamFailure> {
        let response = Self::parse(body)?;
        if response.dialect() != dialect {
            return Err(UpstreamFailure::Format(format!(
                "expected {} response, got {}",
                dialect,
                response.dialect()
            )));
        }
        Ok(response)
    }

    /// Dialect this shape belongs to.
    pub fn dialect(&self) -> Dialect {
        match self {
            LlmResponse::Chat(_) => Dialect::Reasoning,
            LlmResponse::Generate(_) => Dialect::Lightweight,
        }
    }

    /// The authoritative text: the first `type == "text"` content item for
    /// chat, the first generation for generate.
    pub fn text(&self) -> Option<&str> {
        match self {
            LlmResponse::Chat(chat) => chat
                .message
                .content
                .iter()
                .find(|item| item.kind.as_deref() == Some("text"))
                .and_then(|item| item.text.as_deref()),
            LlmResponse::Generate(generate) => generate
                .generations
                .first()
                .and_then(|g| g.text.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_shape_first_text_item() {
        let body = r#"{"message":{"content":[
            {"type":"thinking","text":"hmm"},
            {"type":"text","text":"Final answer"},
            {"type":"text","text":"ignored"}
        ]}}"#;
        let response = LlmResponse::parse(body).unwrap();
        assert_eq!(response.dialect(), Dialect::Reasoning);
        assert_eq!(response.text(), Some("Final answer"));
    }

    #[test]
    fn test_generate_shape_first_generation() {
        let body = r#"{"id":"g1","generations":[{"text":"Hello from LLM"},{"text":"second"}]}"#;
        let response = LlmResponse::parse(body).unwrap();
        assert_eq!(response.dialect(), Dialect::Lightweight);
        assert_eq!(response.text(), Some("Hello from LLM"));
    }

    #[test]
    fn test_missing_text_yields_none() {
        let chat = LlmResponse::parse(r#"{"message":{"content":[]}}"#).unwrap();
        assert_eq!(chat.text(), None);

        let generate = LlmResponse::parse(r#"{"generations":[]}"#).unwrap();
        assert_eq!(generate.text(), None);

        let untyped = LlmResponse::parse(r#"{"message":{"content":[{"text":"x"}]}}"#).unwrap();
        assert_eq!(untyped.text(), None);
    }

    #[test]
    fn test_malformed_json_is_format_failure() {
        let err = LlmResponse::parse("{not-a-json}").unwrap_err();
        assert!(matches!(err, UpstreamFailure::Format(_)));
    }

    #[test]
    fn test_unrecognized_shape_is_format_failure() {
        assert!(matches!(
            LlmResponse::parse(r#"{"text":"hi"}"#),
            Err(UpstreamFailure::Format(_))
        ));
        assert!(matches!(
            LlmResponse::parse(r#"["hi"]"#),
            Err(UpstreamFailure::Format(_))
        ));
        assert!(matches!(
            LlmResponse::parse(r#"{"generations":"oops"}"#),
            Err(UpstreamFailure::Format(_))
        ));
    }

    #[test]
    fn test_wrong_shape_for_dialect() {
        let body = r#"{"generations":[{"text":"hi"}]}"#;
        assert!(LlmResponse::parse_for(Dialect::Lightweight, body).is_ok());
        assert!(matches!(
            LlmResponse::parse_for(Dialect::Reasoning, body),
            Err(UpstreamFailure::Format(_))
        ));
    }
}
