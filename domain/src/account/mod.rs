//! Account domain.
//!
//! The tutor only needs two things from the writer's account: the protected
//! service credential and whether the reasoning dialect is enabled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, protected service credential.
///
/// The wrapped value is whatever the persistence layer stored (an encoded
/// or indirected secret). It is only turned into a usable key by a
/// credential unwrapper at the point of use, and never printed.
///
/// # Examples
///
/// ```
/// use tutor_domain::ProtectedCredential;
///
/// let credential = ProtectedCredential::new("b64:c2stbGl2ZQ==");
/// assert!(!credential.is_blank());
/// assert_eq!(format!("{:?}", credential), "ProtectedCredential([REDACTED])");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtectedCredential(String);

impl ProtectedCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// An empty credential.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// True when no credential is configured (empty or whitespace only).
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The stored (still protected) value.
    pub fn expose_protected(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProtectedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProtectedCredential([REDACTED])")
    }
}

/// Per-account tutoring configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Protected service credential.
    pub credential: ProtectedCredential,
    /// Use the chat-style reasoning dialect instead of the lightweight one.
    pub use_reasoning_model: bool,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            credential: ProtectedCredential::empty(),
            use_reasoning_model: true,
        }
    }
}

impl AccountConfig {
    pub fn new(credential: ProtectedCredential) -> Self {
        Self {
            credential,
            ..Default::default()
        }
    }

    pub fn with_reasoning_model(mut self, enabled: bool) -> Self {
        self.use_reasoning_model = enabled;
        self
    }

    /// Whether a credential is configured at all.
    pub fn has_credential(&self) -> bool {
        !self.credential.is_blank()
    }
}
