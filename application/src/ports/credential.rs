//! Credential unwrapping port
//!
//! The account stores a protected credential. Only the completion client
//! turns it into a usable key, through this capability, right before the
//! request is sent.

use thiserror::Error;
use tutor_domain::ProtectedCredential;

/// Errors that can occur while unwrapping a credential
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Credential is empty")]
    Empty,

    #[error("Environment variable '{0}' is not set")]
    MissingEnvVar(String),

    #[error("Credential could not be decoded: {0}")]
    Decode(String),
}

/// Turns a [`ProtectedCredential`] into the plaintext key.
pub trait CredentialUnwrapper: Send + Sync {
    fn unwrap_credential(&self, credential: &ProtectedCredential) -> Result<String, CredentialError>;
}
