//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid safeguard pattern '{field}': {message}")]
    InvalidPattern { field: String, message: String },
}

impl DomainError {
    /// Build an [`InvalidPattern`](Self::InvalidPattern) from a regex compile error.
    pub fn invalid_pattern(field: impl Into<String>, err: &regex::Error) -> Self {
        Self::InvalidPattern {
            field: field.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let err = regex::Regex::new("(unclosed").unwrap_err();
        let error = DomainError::invalid_pattern("pii_pattern", &err);
        let msg = error.to_string();
        assert!(msg.contains("pii_pattern"));
        assert!(msg.starts_with("Invalid safeguard pattern"));
    }
}
