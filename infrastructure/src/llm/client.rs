//! Completion client for the language-model service.
//!
//! Every failure is classified into an [`UpstreamFailure`] and converted to
//! its user-facing string here; nothing propagates past this adapter.

use super::transport::{HttpReply, HttpRequest, HttpTransport, TransportError};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use tutor_application::{CompletionClient, CredentialUnwrapper};
use tutor_domain::{
    AccountConfig, CompletionRequest, DEFAULT_LIGHT_MODEL, DEFAULT_REASONING_MODEL, Dialect,
    LlmResponse, NO_RESPONSE_MESSAGE, UpstreamFailure,
};

const STATUS_UNAUTHORIZED: u16 = 401;
const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Endpoint and model settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmSettings {
    pub base_url: String,
    pub chat_path: String,
    pub generate_path: String,
    pub reasoning_model: String,
    pub light_model: String,
    /// Replaces the server's `Retry-After` hint when set.
    pub retry_after_override: Option<Duration>,
    /// Longest `Retry-After` hint honoured before the single retry.
    pub max_retry_wait: Duration,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.cohere.ai".to_string(),
            chat_path: "/v1/chat".to_string(),
            generate_path: "/v1/generate".to_string(),
            reasoning_model: DEFAULT_REASONING_MODEL.to_string(),
            light_model: DEFAULT_LIGHT_MODEL.to_string(),
            retry_after_override: None,
            max_retry_wait: Duration::from_secs(30),
        }
    }
}

impl LlmSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry_after_override(mut self, delay: Duration) -> Self {
        self.retry_after_override = Some(delay);
        self
    }

    fn endpoint(&self, dialect: Dialect) -> String {
        let path = match dialect {
            Dialect::Reasoning => &self.chat_path,
            Dialect::Lightweight => &self.generate_path,
        };
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn model(&self, dialect: Dialect) -> &str {
        match dialect {
            Dialect::Reasoning => &self.reasoning_model,
            Dialect::Lightweight => &self.light_model,
        }
    }
}

/// [`CompletionClient`] that talks to the language-model service.
pub struct LanguageModelClient {
    transport: Arc<dyn HttpTransport>,
    unwrapper: Arc<dyn CredentialUnwrapper>,
    settings: LlmSettings,
}

impl LanguageModelClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        unwrapper: Arc<dyn CredentialUnwrapper>,
        settings: LlmSettings,
    ) -> Self {
        Self {
            transport,
            unwrapper,
            settings,
        }
    }

    /// Run one completion, returning the extracted text or the classified failure.
    pub async fn complete(
        &self,
        prompt: &str,
        account: &AccountConfig,
        use_reasoning_model: bool,
    ) -> Result<String, UpstreamFailure> {
        let token = self.unwrap_token(account)?;
        let dialect = Dialect::from_reasoning_flag(use_reasoning_model);
        let request = HttpRequest {
            url: self.settings.endpoint(dialect),
            bearer_token: token,
            body: CompletionRequest::new(dialect, prompt, self.settings.model(dialect)),
        };

        debug!(dialect = %dialect, url = %request.url, "Sending completion request");

        let mut reply = self.send(&request).await?;
        if reply.status == STATUS_TOO_MANY_REQUESTS {
            let delay = self.retry_delay(&reply);
            info!(
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Rate limited, retrying once"
            );
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            reply = self.send(&request).await?;
            if reply.status == STATUS_TOO_MANY_REQUESTS {
                return Err(UpstreamFailure::RateLimited);
            }
        }

        Self::extract(dialect, reply)
    }

    /// Wait before the retry: the override if set, else the server hint
    /// capped at `max_retry_wait`, else no wait.
    fn retry_delay(&self, reply: &HttpReply) -> Duration {
        self.settings.retry_after_override.unwrap_or_else(|| {
            reply
                .retry_after
                .map_or(Duration::ZERO, |hint| hint.min(self.settings.max_retry_wait))
        })
    }

    fn unwrap_token(&self, account: &AccountConfig) -> Result<String, UpstreamFailure> {
        let token = self
            .unwrapper
            .unwrap_credential(&account.credential)
            .map_err(|e| {
                warn!(error = %e, "Could not unwrap service credential");
                UpstreamFailure::Credential
            })?;
        if token.trim().is_empty() {
            warn!("Unwrapped service credential is empty");
            return Err(UpstreamFailure::Credential);
        }
        Ok(token)
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpReply, UpstreamFailure> {
        self.transport
            .post_json(request)
            .await
            .map_err(|e| match e {
                TransportError::Timeout => UpstreamFailure::Timeout,
                TransportError::Connect(detail) | TransportError::Other(detail) => {
                    UpstreamFailure::Unavailable(detail)
                }
            })
    }

    fn extract(dialect: Dialect, reply: HttpReply) -> Result<String, UpstreamFailure> {
        match reply.status {
            STATUS_UNAUTHORIZED => Err(UpstreamFailure::Auth),
            200..=299 => {
                let response = LlmResponse::parse_for(dialect, &reply.body)?;
                Ok(response
                    .text()
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or(NO_RESPONSE_MESSAGE)
                    .to_string())
            }
            status => Err(UpstreamFailure::Status(status)),
        }
    }
}

#[async_trait]
impl CompletionClient for LanguageModelClient {
    async fn get_completion(
        &self,
        prompt: &str,
        account: &AccountConfig,
        use_reasoning_model: bool,
    ) -> String {
        match self.complete(prompt, account, use_reasoning_model).await {
            Ok(text) => text,
            Err(failure) => {
                warn!(kind = failure.kind(), error = %failure, "Completion failed");
                failure.user_message().to_string()
            }
        }
    }
}
