//! Typed app configuration.
//!
//! A browser app has no environment to read, so configuration is a plain
//! value built once at mount and provided through Leptos context. Tests
//! construct their own (e.g. with a different key prefix).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::ui::Theme;

pub const DEFAULT_KEY_PREFIX: &str = "sd1_chat_";
pub const DEFAULT_USERNAME_MIN: usize = 2;
pub const DEFAULT_USERNAME_MAX: usize = 20;
pub const DEFAULT_MESSAGE_MAX: usize = 300;
pub const DEFAULT_REPLY_SNIPPET_MAX: usize = 120;

/// Names of the three persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub theme: String,
    pub username: String,
    pub messages: String,
}

impl StorageKeys {
    /// Derive `{prefix}theme`, `{prefix}username` and `{prefix}messages`.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            theme: format!("{prefix}theme"),
            username: format!("{prefix}username"),
            messages: format!("{prefix}messages"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_KEY_PREFIX)
    }
}

/// Length limits, all counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub username_min: usize,
    pub username_max: usize,
    pub message_max: usize,
    pub reply_snippet_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            username_min: DEFAULT_USERNAME_MIN,
            username_max: DEFAULT_USERNAME_MAX,
            message_max: DEFAULT_MESSAGE_MAX,
            reply_snippet_max: DEFAULT_REPLY_SNIPPET_MAX,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatConfig {
    pub keys: StorageKeys,
    pub limits: Limits,
    /// Theme used when nothing (or garbage) is stored.
    pub default_theme: Theme,
}
