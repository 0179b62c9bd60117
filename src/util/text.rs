//! Text normalization for usernames and message bodies.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use crate::config::Limits;
use crate::error::ChatError;

/// First `max` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Trim and collapse every whitespace run into one space.
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed, collapsed, and cut to `max` characters.
#[must_use]
pub fn normalize_username(raw: &str, max: usize) -> String {
    let collapsed = collapse_whitespace(raw);
    truncate_chars(&collapsed, max).trim_end().to_owned()
}

/// Normalize `raw` and check it against the username limits.
pub fn validate_username(raw: &str, limits: &Limits) -> Result<String, ChatError> {
    let name = normalize_username(raw, limits.username_max);
    if name.is_empty() {
        return Err(ChatError::EmptyUsername);
    }
    if name.chars().count() < limits.username_min {
        return Err(ChatError::UsernameTooShort { min: limits.username_min });
    }
    Ok(name)
}

/// Trimmed message body cut to `max` characters, or `None` when blank.
#[must_use]
pub fn normalize_message(raw: &str, max: usize) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(truncate_chars(trimmed, max).to_owned())
}
