//! Browser `storage` event subscription.
//!
//! Installed once at mount and kept for the lifetime of the page.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::{SyncEffect, apply_storage_change};
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::store::{ChatStorage, StorageChange};

/// Subscribe to `storage` events and fold them into the state signals.
pub fn install(chat: RwSignal<ChatState>, ui: RwSignal<UiState>, storage: ChatStorage) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window; cross-tab sync disabled");
        return;
    };

    let on_storage = Closure::wrap(Box::new(move |ev: web_sys::StorageEvent| {
        let change = StorageChange { key: ev.key(), new_value: ev.new_value() };
        let mut chat_state = chat.get_untracked();
        let mut ui_state = ui.get_untracked();
        let effects = apply_storage_change(&mut chat_state, &mut ui_state, &storage, &change);

        let chat_changed = effects.iter().any(|effect| !matches!(effect, SyncEffect::ThemeChanged(_)));
        let theme_changed = effects.iter().any(|effect| matches!(effect, SyncEffect::ThemeChanged(_)));
        if chat_changed {
            chat.set(chat_state);
        }
        if theme_changed {
            ui.set(ui_state);
        }
    }) as Box<dyn FnMut(web_sys::StorageEvent)>);

    if let Err(err) = window.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref()) {
        log::warn!("failed to subscribe to storage events: {err:?}");
        return;
    }
    on_storage.forget();
}
