//! String utilities for the domain layer.
//!
//! The tutor never sends the whole story upstream: onboarding sees the last
//! few sentences and review sees the tail of the text. These helpers cut
//! those excerpts without splitting UTF-8 characters.

/// Return the last `n` sentences of `text`, re-joined with `". "` and closed
/// with a trailing period.
///
/// Sentences are split on `.`, `!` and `?`; blank fragments are dropped and
/// each kept fragment is trimmed. Returns an empty string when the text has
/// no sentences.
///
/// # Examples
///
/// ```
/// use tutor_domain::core::string::last_sentences;
///
/// let text = "One. Two! Three? Four. Five.";
/// assert_eq!(last_sentences(text, 2), "Four. Five.");
/// assert_eq!(last_sentences("", 4), "");
/// ```
pub fn last_sentences(text: &str, n: usize) -> String {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect();

    if sentences.is_empty() {
        return String::new();
    }

    let start = sentences.len().saturating_sub(n);
    let joined = sentences[start..]
        .iter()
        .map(|s| s.trim())
        .collect::<Vec<_>>()
        .join(". ");
    format!("{}.", joined)
}

/// Return the last `max_chars` characters of `text`.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn tail_chars(text: &str, max_chars: usize) -> &str {
    let total = text.chars().count();
    if total <= max_chars {
        return text;
    }
    let skip = total - max_chars;
    match text.char_indices().nth(skip) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}
