//! `window.localStorage` backend.
//!
//! The handle is looked up on every call so the store stays a zero-sized,
//! `Send + Sync` value that can live in Leptos context.

use wasm_bindgen::JsValue;

use super::KeyValueStore;
use crate::error::StoreError;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable),
        Err(err) => Err(rejected(&err)),
    }
}

fn rejected(err: &JsValue) -> StoreError {
    StoreError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?.get_item(key).map_err(|err| rejected(&err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?.set_item(key, value).map_err(|err| rejected(&err))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        local_storage()?.remove_item(key).map_err(|err| rejected(&err))
    }
}
