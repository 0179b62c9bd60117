//! Key/value persistence behind the chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the store is `window.localStorage`: synchronous,
//! same-origin, shared by every open tab, no transactions. Natively (tests,
//! non-`csr` builds) an in-process [`MemoryStore`] stands in for it and
//! records each mutation so a second simulated tab can replay it.
//!
//! [`ChatStorage`] layers the three typed records on top of a raw store.
//! Reads never fail from the caller's point of view: a missing or corrupted
//! record reads as its empty default.

#[cfg(feature = "csr")]
pub mod browser;
pub mod memory;


use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::StorageKeys;
use crate::error::{ChatError, StoreError};
use crate::state::chat::ChatMessage;
use crate::state::ui::Theme;

pub use memory::MemoryStore;

/// Minimal `localStorage`-shaped contract.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Store handle shareable through Leptos context.
pub type SharedStore = Arc<dyn KeyValueStore + Send + Sync>;

/// A storage-change notification as seen by another tab.
///
/// `key` is `None` when the whole storage area was cleared. Reconciliation
/// always re-reads the store rather than trusting `new_value`, which is
/// only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub key: Option<String>,
    pub new_value: Option<String>,
}

impl StorageChange {
    #[must_use]
    pub fn set(key: &str, value: &str) -> Self {
        Self { key: Some(key.to_owned()), new_value: Some(value.to_owned()) }
    }

    #[must_use]
    pub fn removed(key: &str) -> Self {
        Self { key: Some(key.to_owned()), new_value: None }
    }

    #[must_use]
    pub fn cleared() -> Self {
        Self { key: None, new_value: None }
    }
}

/// The platform store: `localStorage` under `csr`, in-memory otherwise.
#[must_use]
pub fn default_store() -> SharedStore {
    #[cfg(feature = "csr")]
    let store: SharedStore = Arc::new(browser::BrowserStore);
    #[cfg(not(feature = "csr"))]
    let store: SharedStore = Arc::new(MemoryStore::default());
    store
}

/// Typed access to the theme, username and message records.
#[derive(Clone)]
pub struct ChatStorage {
    store: SharedStore,
    keys: StorageKeys,
}

impl fmt::Debug for ChatStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatStorage").field("keys", &self.keys).finish_non_exhaustive()
    }
}

impl ChatStorage {
    #[must_use]
    pub fn new(store: SharedStore, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    #[must_use]
    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Read the persisted message list, defaulting to empty.
    ///
    /// A non-array payload or invalid JSON yields an empty list; array
    /// entries that do not decode as messages are skipped.
    #[must_use]
    pub fn load_messages(&self) -> Vec<ChatMessage> {
        match self.read(&self.keys.messages) {
            Some(raw) => decode_messages(&raw),
            None => Vec::new(),
        }
    }

    /// Serialize and write the full message list.
    pub fn save_messages(&self, messages: &[ChatMessage]) -> Result<(), ChatError> {
        let raw = serde_json::to_string(messages)?;
        self.store.set(&self.keys.messages, &raw)?;
        Ok(())
    }

    pub fn remove_messages(&self) -> Result<(), StoreError> {
        self.store.remove(&self.keys.messages)
    }

    /// Raw stored username, if any. Normalization is the caller's job.
    #[must_use]
    pub fn load_username(&self) -> Option<String> {
        self.read(&self.keys.username)
    }

    pub fn save_username(&self, username: &str) -> Result<(), StoreError> {
        self.store.set(&self.keys.username, username)
    }

    pub fn remove_username(&self) -> Result<(), StoreError> {
        self.store.remove(&self.keys.username)
    }

    /// Stored theme, or `None` when absent or unrecognized.
    #[must_use]
    pub fn load_theme(&self) -> Option<Theme> {
        self.read(&self.keys.theme).and_then(|raw| Theme::parse(&raw))
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(&self.keys.theme, theme.as_str())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("storage read of {key} failed: {err}");
                None
            }
        }
    }
}

/// Decode a persisted message list, dropping anything unreadable.
#[must_use]
pub fn decode_messages(raw: &str) -> Vec<ChatMessage> {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ChatMessage>(item) {
            Ok(message) => Some(message),
            Err(err) => {
                log::debug!("skipping unreadable stored message: {err}");
                None
            }
        })
        .collect()
}
