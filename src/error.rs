//! Crate error types.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors carry the exact text shown inline on the username
//! screen. Persistence errors are logged by the UI and never block it.
//! Malformed persisted data is not an error at all; readers fall back to
//! empty defaults.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by a [`KeyValueStore`](crate::store::KeyValueStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage surface is reachable (no window, storage disabled).
    #[error("local storage is unavailable")]
    Unavailable,
    /// The backend rejected a read or write (e.g. quota exceeded).
    #[error("local storage rejected the operation: {0}")]
    Rejected(String),
    /// An in-process store lock was poisoned by a panicking writer.
    #[error("local storage lock poisoned")]
    Poisoned,
}

/// Error returned by chat session and message list operations.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Username was empty after normalization.
    #[error("Please enter a username.")]
    EmptyUsername,
    /// Username was shorter than the configured minimum.
    #[error("Username must be at least {min} characters.")]
    UsernameTooShort { min: usize },
    /// A message was sent while no username is set.
    #[error("no username set for this tab")]
    NotSignedIn,
    /// The message list could not be serialized.
    #[error("failed to encode messages: {0}")]
    Encode(#[from] serde_json::Error),
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ChatError {
    /// Whether this error is a username validation failure meant for inline display.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyUsername | Self::UsernameTooShort { .. })
    }
}
