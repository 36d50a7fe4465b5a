//! Credential unwrappers.
//!
//! - [`PlainCredentialUnwrapper`]: the stored value is the key itself.
//! - [`EnvCredentialUnwrapper`]: `env:NAME` reads an environment variable,
//!   `b64:...` decodes base64, anything else is taken literally.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use tutor_application::{CredentialError, CredentialUnwrapper};
use tutor_domain::ProtectedCredential;

const ENV_PREFIX: &str = "env:";
const BASE64_PREFIX: &str = "b64:";

/// Uses the stored credential as-is.
pub struct PlainCredentialUnwrapper;

impl CredentialUnwrapper for PlainCredentialUnwrapper {
    fn unwrap_credential(&self, credential: &ProtectedCredential) -> Result<String, CredentialError> {
        non_empty(credential.expose_protected().trim().to_string())
    }
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves `env:` and `b64:` references.
pub struct EnvCredentialUnwrapper {
    lookup: EnvLookup,
}

impl Default for EnvCredentialUnwrapper {
    fn default() -> Self {
        Self {
            lookup: Box::new(|name| std::env::var(name).ok()),
        }
    }
}

impl EnvCredentialUnwrapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom variable lookup instead of the process environment.
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }
}

impl CredentialUnwrapper for EnvCredentialUnwrapper {
    fn unwrap_credential(&self, credential: &ProtectedCredential) -> Result<String, CredentialError> {
        let raw = credential.expose_protected().trim();

        if let Some(name) = raw.strip_prefix(ENV_PREFIX) {
            let name = name.trim();
            let value =
                (self.lookup)(name).ok_or_else(|| CredentialError::MissingEnvVar(name.to_string()))?;
            return non_empty(value.trim().to_string());
        }

        if let Some(encoded) = raw.strip_prefix(BASE64_PREFIX) {
            let bytes = BASE64_STANDARD
                .decode(encoded.trim())
                .map_err(|e| CredentialError::Decode(e.to_string()))?;
            let decoded =
                String::from_utf8(bytes).map_err(|e| CredentialError::Decode(e.to_string()))?;
            return non_empty(decoded.trim().to_string());
        }

        non_empty(raw.to_string())
    }
}

fn non_empty(value: String) -> Result<String, CredentialError> {
    if value.is_empty() {
        Err(CredentialError::Empty)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protected(value: &str) -> ProtectedCredential {
        ProtectedCredential::new(value)
    }

    #[test]
    fn test_plain_unwrapper() {
        let plain = PlainCredentialUnwrapper;
        assert_eq!(plain.unwrap_credential(&protected(" sk-1 ")), Ok("sk-1".to_string()));
        assert_eq!(
            plain.unwrap_credential(&protected("")),
            Err(CredentialError::Empty)
        );
    }

    #[test]
    fn test_env_reference() {
        let unwrapper = EnvCredentialUnwrapper::with_lookup(|name| {
            (name == "TUTOR_KEY").then(|| "sk-from-env".to_string())
        });

        assert_eq!(
            unwrapper.unwrap_credential(&protected("env:TUTOR_KEY")),
            Ok("sk-from-env".to_string())
        );
        assert_eq!(
            unwrapper.unwrap_credential(&protected("env:OTHER")),
            Err(CredentialError::MissingEnvVar("OTHER".to_string()))
        );
    }

    #[test]
    fn test_base64_value() {
        let unwrapper = EnvCredentialUnwrapper::with_lookup(|_| None);
        let encoded = format!("b64:{}", BASE64_STANDARD.encode("sk-secret"));

        assert_eq!(
            unwrapper.unwrap_credential(&protected(&encoded)),
            Ok("sk-secret".to_string())
        );
        assert!(matches!(
            unwrapper.unwrap_credential(&protected("b64:%%%")),
            Err(CredentialError::Decode(_))
        ));
    }

    #[test]
    fn test_literal_and_empty_values() {
        let unwrapper = EnvCredentialUnwrapper::with_lookup(|_| Some(String::new()));

        assert_eq!(
            unwrapper.unwrap_credential(&protected("sk-literal")),
            Ok("sk-literal".to_string())
        );
        assert_eq!(
            unwrapper.unwrap_credential(&protected("env:EMPTY")),
            Err(CredentialError::Empty)
        );
    }
}
