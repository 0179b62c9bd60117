//! Cross-tab reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsers deliver a `storage` event to every *other* same-origin tab when
//! `localStorage` changes. Each event is folded into this tab's state by
//! re-reading the affected record: the message list is reloaded wholesale,
//! the theme is re-applied, and a username change is adopted, or treated as
//! a logout when the key was removed.
//!
//! TRADE-OFFS
//! ==========
//! There is no ordering, acknowledgment, or merge. The last write each tab
//! observes wins, so two tabs sending at the same moment can each overwrite
//! the other's list and drop a message. That behavior is kept on purpose.

#[cfg(feature = "csr")]
pub mod listener;


use crate::state::chat::ChatState;
use crate::state::ui::{Theme, UiState};
use crate::store::{ChatStorage, StorageChange};

/// What a storage change did to this tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEffect {
    /// History was replaced by the stored list.
    MessagesReloaded { count: usize },
    /// Theme was re-read; the DOM attribute needs updating.
    ThemeChanged(Theme),
    /// Another tab set the username.
    UsernameAdopted(String),
    /// Another tab removed the username; back to the username screen.
    SignedOut,
}

/// Fold one storage change into this tab's state.
///
/// Changes to unrelated keys yield no effects. A `None` key (the whole
/// storage area was cleared) touches all three records.
pub fn apply_storage_change(
    chat: &mut ChatState,
    ui: &mut UiState,
    storage: &ChatStorage,
    change: &StorageChange,
) -> Vec<SyncEffect> {
    let keys = storage.keys();
    let Some(key) = change.key.as_deref() else {
        log::debug!("storage cleared by another tab");
        return vec![reload_messages(chat, storage), reload_theme(ui, storage), sync_username(chat, storage)];
    };
    log::debug!(
        "storage change for {key} ({})",
        change.new_value.as_ref().map_or_else(|| "removed".to_owned(), |v| format!("{} bytes", v.len()))
    );

    if key == keys.messages {
        vec![reload_messages(chat, storage)]
    } else if key == keys.theme {
        vec![reload_theme(ui, storage)]
    } else if key == keys.username {
        vec![sync_username(chat, storage)]
    } else {
        Vec::new()
    }
}

fn reload_messages(chat: &mut ChatState, storage: &ChatStorage) -> SyncEffect {
    chat.reload(storage);
    log::debug!("reloaded {} messages from another tab", chat.messages.len());
    SyncEffect::MessagesReloaded { count: chat.messages.len() }
}

fn reload_theme(ui: &mut UiState, storage: &ChatStorage) -> SyncEffect {
    SyncEffect::ThemeChanged(ui.reload_theme(storage))
}

fn sync_username(chat: &mut ChatState, storage: &ChatStorage) -> SyncEffect {
    let was_signed_in = chat.is_signed_in();
    if let Some(raw) = storage.load_username() {
        if let Some(name) = chat.adopt_username(&raw).map(str::to_owned) {
            // A tab that was on the username screen never loaded history;
            // sending from an empty list would overwrite the stored one.
            if !was_signed_in {
                chat.reload(storage);
            }
            return SyncEffect::UsernameAdopted(name);
        }
    }
    if let Err(err) = chat.sign_out(storage) {
        log::warn!("failed to clear username after cross-tab logout: {err}");
    }
    SyncEffect::SignedOut
}
