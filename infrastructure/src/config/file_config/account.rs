//! Account configuration from TOML (`[account]` section)

use serde::{Deserialize, Serialize};
use tutor_domain::{AccountConfig, ProtectedCredential};

/// Raw account configuration from TOML
///
/// `protected_credential` is stored as written: a literal key, `env:NAME`
/// or `b64:...`. It is only unwrapped by the completion client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAccountConfig {
    pub protected_credential: ProtectedCredential,
    pub use_reasoning_model: bool,
}

impl Default for FileAccountConfig {
    fn default() -> Self {
        let account = AccountConfig::default();
        Self {
            protected_credential: account.credential,
            use_reasoning_model: account.use_reasoning_model,
        }
    }
}

impl FileAccountConfig {
    pub fn to_account(&self) -> AccountConfig {
        AccountConfig::new(self.protected_credential.clone())
            .with_reasoning_model(self.use_reasoning_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_credential() {
        let config = FileAccountConfig {
            protected_credential: ProtectedCredential::new("sk-live-123"),
            use_reasoning_model: true,
        };
        assert!(!format!("{:?}", config).contains("sk-live-123"));
        assert!(config.to_account().has_credential());
    }
}
