//! Prompt template repository port

use tutor_domain::format_template;

/// Source of stored prompt templates, looked up by key (e.g. `"spark"`).
pub trait PromptTemplateRepository: Send + Sync {
    /// The latest template stored under `key`, if any.
    fn latest(&self, key: &str) -> Option<String>;

    /// The latest template with `{{Name}}` placeholders filled in.
    ///
    /// Returns `None` when there is no template or it is blank.
    fn formatted(&self, key: &str, variables: &[(&str, &str)]) -> Option<String> {
        let template = self.latest(key)?;
        if template.trim().is_empty() {
            return None;
        }
        Some(format_template(&template, variables))
    }
}

/// Repository with no templates; every strategy falls back to its built-in prompt.
pub struct NoPromptTemplates;

impl PromptTemplateRepository for NoPromptTemplates {
    fn latest(&self, _key: &str) -> Option<String> {
        None
    }
}
