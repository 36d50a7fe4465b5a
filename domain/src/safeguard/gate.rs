//! The safeguard gate.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! ```text
//! credential → prompt injection → personal information → banned content
//! ```
//!
//! A missing credential is a configuration error and is never masked by a
//! content problem. Personal information outranks banned words. Blank
//! content passes every content check.
//!
//! Patterns are compiled once with the `regex` crate, which matches in
//! linear time, so long inputs cannot trigger catastrophic backtracking.

use super::options::SafeguardOptions;
use crate::core::error::DomainError;
use crate::story::ContentSnapshot;
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Why the gate rejected a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The account has no service credential.
    MissingCredential,
    /// The content looks like a prompt-injection attempt.
    PromptInjection,
    /// The content appears to contain personal information.
    PersonalInformation,
    /// The content matched a banned-content pattern.
    InappropriateContent,
}

/// Error class of a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationClass {
    /// Fatal to the call; an adult has to fix the account.
    Configuration,
    /// The writer has to revise the content.
    Policy,
}

impl Violation {
    /// The message shown to the writer.
    pub fn message(&self) -> &'static str {
        match self {
            Violation::MissingCredential => {
                "AI Service Error: No API Key configured. Please contact your supervisor."
            }
            Violation::PromptInjection => {
                "Safety Guardrail: Your input contains patterns associated with prompt injection. Please revise."
            }
            Violation::PersonalInformation => {
                "Safety Guardrail: Potential personal information detected. Please remove identifiable info before using the Tutor."
            }
            Violation::InappropriateContent => {
                "Safety Guardrail: Please keep your writing appropriate for school."
            }
        }
    }

    pub fn class(&self) -> ViolationClass {
        match self {
            Violation::MissingCredential => ViolationClass::Configuration,
            _ => ViolationClass::Policy,
        }
    }

    /// Short identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Violation::MissingCredential => "missing_credential",
            Violation::PromptInjection => "prompt_injection",
            Violation::PersonalInformation => "personal_information",
            Violation::InappropriateContent => "inappropriate_content",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of [`SafeguardGate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeguardVerdict {
    Valid,
    Rejected(Violation),
}

impl SafeguardVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, SafeguardVerdict::Valid)
    }

    pub fn violation(&self) -> Option<Violation> {
        match self {
            SafeguardVerdict::Valid => None,
            SafeguardVerdict::Rejected(v) => Some(*v),
        }
    }

    /// The writer-facing error, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.violation().map(|v| v.message())
    }

    /// `(valid, error)` pair.
    pub fn into_parts(self) -> (bool, Option<String>) {
        (self.is_valid(), self.error().map(str::to_string))
    }
}

/// Compiled safeguard policies.
///
/// # Examples
///
/// ```
/// use tutor_domain::{AccountConfig, ContentSnapshot, ProtectedCredential};
/// use tutor_domain::safeguard::{SafeguardGate, SafeguardOptions, Violation};
///
/// let gate = SafeguardGate::new(&SafeguardOptions::default()).unwrap();
/// let account = AccountConfig::new(ProtectedCredential::new("sk-test"));
///
/// let snapshot = ContentSnapshot::new("My email is a@b.com", account.clone());
/// assert_eq!(
///     gate.validate(&snapshot).violation(),
///     Some(Violation::PersonalInformation)
/// );
///
/// let snapshot = ContentSnapshot::new("The owl blinked twice.", account);
/// assert!(gate.validate(&snapshot).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct SafeguardGate {
    prompt_injection: Option<Regex>,
    pii: Option<Regex>,
    banned: Vec<Regex>,
}

impl SafeguardGate {
    /// Compile the given options. Empty patterns disable their check.
    pub fn new(options: &SafeguardOptions) -> Result<Self, DomainError> {
        let prompt_injection = compile_optional(
            "prompt_injection_pattern",
            &options.prompt_injection_pattern,
        )?;
        let pii = compile_optional("pii_pattern", &options.pii_pattern)?;

        let mut banned = Vec::with_capacity(options.banned_words_patterns.len());
        for (i, pattern) in options.banned_words_patterns.iter().enumerate() {
            if let Some(re) = compile_optional(&format!("banned_words_patterns[{}]", i), pattern)? {
                banned.push(re);
            }
        }

        Ok(Self {
            prompt_injection,
            pii,
            banned,
        })
    }

    /// Run all checks against `snapshot` in priority order.
    pub fn validate(&self, snapshot: &ContentSnapshot) -> SafeguardVerdict {
        if !snapshot.account.has_credential() {
            return SafeguardVerdict::Rejected(Violation::MissingCredential);
        }

        match self.check_content(&snapshot.content) {
            Some(violation) => SafeguardVerdict::Rejected(violation),
            None => SafeguardVerdict::Valid,
        }
    }

    fn check_content(&self, content: &str) -> Option<Violation> {
        if content.trim().is_empty() {
            return None;
        }

        if self
            .prompt_injection
            .as_ref()
            .is_some_and(|re| re.is_match(content))
        {
            return Some(Violation::PromptInjection);
        }

        if self.pii.as_ref().is_some_and(|re| re.is_match(content)) {
            return Some(Violation::PersonalInformation);
        }

        if self.banned.iter().any(|re| re.is_match(content)) {
            return Some(Violation::InappropriateContent);
        }

        None
    }
}

fn compile_optional(field: &str, pattern: &str) -> Result<Option<Regex>, DomainError> {
    if pattern.trim().is_empty() {
        return Ok(None);
    }
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|e| DomainError::invalid_pattern(field, &e))
}
