//! In-process store used natively and in tests.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{KeyValueStore, StorageChange};
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    changes: Vec<StorageChange>,
}

/// `localStorage` stand-in. Clones share the same entries.
///
/// Every `set`/`remove`/`clear` is appended to a change log. Browsers only
/// deliver `storage` events to *other* tabs, so a test plays one tab's
/// writes into the other by draining [`MemoryStore::take_changes`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded change log.
    pub fn take_changes(&self) -> Vec<StorageChange> {
        match self.lock() {
            Ok(mut inner) => std::mem::take(&mut inner.changes),
            Err(_) => Vec::new(),
        }
    }

    /// Remove every entry, like `localStorage.clear()`.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.entries.clear();
        inner.changes.push(StorageChange::cleared());
        Ok(())
    }

    /// Write without recording a change, as if set before any tab opened.
    pub fn seed(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.entries.insert(key.to_owned(), value.to_owned());
        inner.changes.push(StorageChange::set(key, value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        // localStorage fires no event when removing an absent key.
        if inner.entries.remove(key).is_some() {
            inner.changes.push(StorageChange::removed(key));
        }
        Ok(())
    }
}
