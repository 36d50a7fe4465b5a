//! `{{Name}}` placeholder substitution for stored prompt templates.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^}]+?)\s*\}\}").expect("placeholder pattern is valid")
});

/// Replace `{{Key}}` tokens (key matched case-insensitively) with the given
/// values and drop placeholders that have no value.
///
/// The template is scanned once. Inserted values are copied verbatim, so a
/// value that itself contains `{{...}}` is never expanded or stripped.
///
/// # Examples
///
/// ```
/// use tutor_domain::prompt::format_template;
///
/// let out = format_template(
///     "Hello {{Name}}! Age: {{age}}. {{Unused}}end.",
///     &[("Name", "Alex"), ("Age", "9")],
/// );
/// assert_eq!(out, "Hello Alex! Age: 9. end.");
/// ```
pub fn format_template(template: &str, variables: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            variables
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_default()
        })
        .into_owned()
}
