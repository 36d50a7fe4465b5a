//! Structured status signal emitted by the model at the end of onboarding.

use serde::Deserialize;

/// Status value meaning the writer is ready to start writing.
pub const READY_TO_WRITE: &str = "READY_TO_WRITE";

/// Default JSON the model is asked to emit when the writer is ready.
pub const DEFAULT_READY_SIGNAL_JSON: &str = r#"{"status": "READY_TO_WRITE"}"#;

#[derive(Deserialize)]
struct StatusSignal {
    status: Option<String>,
}

/// Parse a model response as a status signal.
///
/// Returns the status only when the response is a JSON object whose
/// `status` field equals [`READY_TO_WRITE`]. Anything else (plain prose,
/// other JSON, other statuses) yields `None`. A surrounding markdown code
/// fence is tolerated.
///
/// # Examples
///
/// ```
/// use tutor_domain::session::status::parse_ready_signal;
///
/// assert_eq!(parse_ready_signal(r#"{"status":"READY_TO_WRITE"}"#), Some("READY_TO_WRITE"));
/// assert_eq!(parse_ready_signal("What does the cave smell like?"), None);
/// ```
pub fn parse_ready_signal(response: &str) -> Option<&'static str> {
    let body = strip_code_fence(response.trim());
    let signal: StatusSignal = serde_json::from_str(body).ok()?;
    match signal.status.as_deref() {
        Some(READY_TO_WRITE) => Some(READY_TO_WRITE),
        _ => None,
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
