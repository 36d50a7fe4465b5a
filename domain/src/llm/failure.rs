//! Upstream failure classification.
//!
//! None of these ever reach the writer as an error value: the client turns
//! each one into a fixed, user-safe string at its boundary.

use std::fmt;

/// Generic service failure shown to the writer.
pub const SERVICE_ERROR_MESSAGE: &str = "AI service error.";

/// Shown when the service answered but the body could not be understood.
pub const FORMAT_ERROR_MESSAGE: &str = "AI service error (invalid response format).";

/// Shown when a well-formed response carried no text.
pub const NO_RESPONSE_MESSAGE: &str = "No response.";

/// Why a completion call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    /// 401: the credential was refused.
    Auth,
    /// 429 that persisted after the single retry.
    RateLimited,
    /// Success status, but the body was malformed or of the wrong shape.
    Format(String),
    /// The request timed out or was cancelled.
    Timeout,
    /// Any other non-success status.
    Status(u16),
    /// Connection-level failure.
    Unavailable(String),
    /// The protected credential could not be unwrapped.
    Credential,
}

impl UpstreamFailure {
    /// The string handed back to the caller in place of a completion.
    pub fn user_message(&self) -> &'static str {
        match self {
            UpstreamFailure::Format(_) => FORMAT_ERROR_MESSAGE,
            _ => SERVICE_ERROR_MESSAGE,
        }
    }

    /// Short identifier used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamFailure::Auth => "auth",
            UpstreamFailure::RateLimited => "rate_limited",
            UpstreamFailure::Format(_) => "format",
            UpstreamFailure::Timeout => "timeout",
            UpstreamFailure::Status(_) => "status",
            UpstreamFailure::Unavailable(_) => "unavailable",
            UpstreamFailure::Credential => "credential",
        }
    }
}

impl fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamFailure::Auth => write!(f, "unauthorized"),
            UpstreamFailure::RateLimited => write!(f, "rate limited after retry"),
            UpstreamFailure::Format(detail) => write!(f, "invalid response format: {}", detail),
            UpstreamFailure::Timeout => write!(f, "request timed out"),
            UpstreamFailure::Status(code) => write!(f, "unexpected status {}", code),
            UpstreamFailure::Unavailable(detail) => write!(f, "service unavailable: {}", detail),
            UpstreamFailure::Credential => write!(f, "credential could not be unwrapped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_format_has_distinct_message() {
        assert_eq!(
            UpstreamFailure::Format("eof".into()).user_message(),
            FORMAT_ERROR_MESSAGE
        );
        for failure in [
            UpstreamFailure::Auth,
            UpstreamFailure::RateLimited,
            UpstreamFailure::Timeout,
            UpstreamFailure::Status(503),
            UpstreamFailure::Unavailable("refused".into()),
            UpstreamFailure::Credential,
        ] {
            assert_eq!(failure.user_message(), SERVICE_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_display_never_contains_secrets() {
        assert_eq!(UpstreamFailure::Auth.to_string(), "unauthorized");
        assert_eq!(UpstreamFailure::Status(500).to_string(), "unexpected status 500");
    }
}
