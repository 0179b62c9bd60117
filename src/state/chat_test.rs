use std::sync::Arc;

use super::*;
use crate::config::StorageKeys;
use crate::error::StoreError;
use crate::store::{KeyValueStore, MemoryStore};

fn storage() -> (MemoryStore, ChatStorage) {
    let store = MemoryStore::new();
    let storage = ChatStorage::new(Arc::new(store.clone()), StorageKeys::default());
    (store, storage)
}

fn signed_in(name: &str) -> (MemoryStore, ChatStorage, ChatState) {
    let (store, storage) = storage();
    let mut chat = ChatState::default();
    chat.enter(&storage, name).unwrap();
    (store, storage, chat)
}

/// Reads work, every write is rejected.
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected("QuotaExceededError".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected("QuotaExceededError".to_owned()))
    }
}

fn message(id: Option<&str>, user: &str, text: &str) -> ChatMessage {
    ChatMessage {
        id: id.map(str::to_owned),
        user: user.to_owned(),
        text: text.to_owned(),
        time: "12:00".to_owned(),
        reply_to: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_signed_out_and_empty() {
    let state = ChatState::default();
    assert!(!state.is_signed_in());
    assert!(state.messages.is_empty());
    assert!(state.reply_target.is_none());
}

// =============================================================
// Entering / leaving
// =============================================================

#[test]
fn enter_accepts_two_char_name_and_persists_it() {
    let (store, storage) = storage();
    let mut chat = ChatState::default();
    assert_eq!(chat.enter(&storage, "Al").unwrap(), "Al");
    assert!(chat.is_signed_in());
    assert_eq!(store.get("sd1_chat_username"), Ok(Some("Al".to_owned())));
}

#[test]
fn enter_rejects_one_char_name() {
    let (store, storage) = storage();
    let mut chat = ChatState::default();
    let err = chat.enter(&storage, "A").unwrap_err();
    assert!(matches!(err, ChatError::UsernameTooShort { min: 2 }));
    assert!(!chat.is_signed_in());
    assert_eq!(store.get("sd1_chat_username"), Ok(None));
}

#[test]
fn enter_loads_persisted_history() {
    let (store, storage) = storage();
    store
        .seed("sd1_chat_messages", r#"[{"user":"Bo","text":"earlier","time":"08:00"}]"#)
        .unwrap();
    let mut chat = ChatState::default();
    chat.enter(&storage, "  Al   Smith ").unwrap();
    assert_eq!(chat.username.as_deref(), Some("Al Smith"));
    assert_eq!(chat.messages, vec![ChatMessage { time: "08:00".to_owned(), ..message(None, "Bo", "earlier") }]);
}

#[test]
fn restore_resumes_valid_stored_name() {
    let (store, storage) = storage();
    store.seed("sd1_chat_username", "Grace").unwrap();
    let mut chat = ChatState::default();
    assert!(chat.restore(&storage));
    assert_eq!(chat.username.as_deref(), Some("Grace"));
}

#[test]
fn restore_without_stored_name_stays_signed_out() {
    let (_store, storage) = storage();
    let mut chat = ChatState::default();
    assert!(!chat.restore(&storage));
    assert!(!chat.is_signed_in());
}

#[test]
fn restore_discards_invalid_stored_name() {
    let (store, storage) = storage();
    store.seed("sd1_chat_username", "x").unwrap();
    let mut chat = ChatState::default();
    assert!(!chat.restore(&storage));
    assert_eq!(store.get("sd1_chat_username"), Ok(None));
}

#[test]
fn sign_out_clears_identity_and_reply_but_not_history() {
    let (store, storage, mut chat) = signed_in("Al");
    chat.send(&storage, "hello", "10:00".to_owned()).unwrap();
    let id = chat.messages[0].id.clone().unwrap();
    assert!(chat.select_reply(&id));

    chat.sign_out(&storage).unwrap();
    assert!(!chat.is_signed_in());
    assert!(chat.reply_target.is_none());
    assert_eq!(store.get("sd1_chat_username"), Ok(None));
    assert!(store.get("sd1_chat_messages").unwrap().is_some());
}

#[test]
fn adopt_username_normalizes_and_ignores_blank() {
    let mut chat = ChatState::default();
    assert_eq!(chat.adopt_username("  Ada   L "), Some("Ada L"));
    assert_eq!(chat.adopt_username("   "), None);
    assert_eq!(chat.username.as_deref(), Some("Ada L"));
}

// =============================================================
// Sending
// =============================================================

#[test]
fn send_hello_as_al_persists_single_record() {
    let (store, storage, mut chat) = signed_in("Al");
    let sent = chat.send(&storage, "hello", "09:30".to_owned()).unwrap().unwrap();
    assert_eq!(sent.user, "Al");
    assert_eq!(sent.text, "hello");
    assert_eq!(sent.time, "09:30");
    assert!(sent.id.is_some());

    let raw = store.get("sd1_chat_messages").unwrap().unwrap();
    let persisted: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.as_array().map(Vec::len), Some(1));
    assert_eq!(persisted[0]["user"], "Al");
    assert_eq!(persisted[0]["text"], "hello");
    assert!(persisted[0].get("replyTo").is_none());
}

#[test]
fn send_grows_list_by_one_and_round_trips() {
    let (_store, storage, mut chat) = signed_in("Al");
    for (i, text) in ["one", "two", "three"].iter().enumerate() {
        chat.send(&storage, text, "10:00".to_owned()).unwrap();
        assert_eq!(chat.messages.len(), i + 1);
        assert_eq!(storage.load_messages(), chat.messages);
    }
}

#[test]
fn send_blank_is_noop() {
    let (store, storage, mut chat) = signed_in("Al");
    store.take_changes();
    assert!(chat.send(&storage, "   \n", "10:00".to_owned()).unwrap().is_none());
    assert!(chat.messages.is_empty());
    assert!(store.take_changes().is_empty());
    assert_eq!(store.get("sd1_chat_messages"), Ok(None));
}

#[test]
fn send_truncates_to_message_limit() {
    let (_store, storage, mut chat) = signed_in("Al");
    let sent = chat.send(&storage, &"a".repeat(400), "10:00".to_owned()).unwrap().unwrap();
    assert_eq!(sent.text.chars().count(), 300);
}

#[test]
fn send_requires_username() {
    let (_store, storage) = storage();
    let mut chat = ChatState::default();
    let err = chat.send(&storage, "hi", "10:00".to_owned()).unwrap_err();
    assert!(matches!(err, ChatError::NotSignedIn));
}

#[test]
fn send_assigns_distinct_ids() {
    let (_store, storage, mut chat) = signed_in("Al");
    chat.send(&storage, "a", "10:00".to_owned()).unwrap();
    chat.send(&storage, "b", "10:00".to_owned()).unwrap();
    assert_ne!(chat.messages[0].id, chat.messages[1].id);
}

#[test]
fn send_rolls_back_when_write_fails() {
    let backing = MemoryStore::new();
    backing.seed("sd1_chat_username", "Al").unwrap();
    let storage = ChatStorage::new(Arc::new(ReadOnlyStore(backing)), StorageKeys::default());
    let mut chat = ChatState::default();
    assert!(chat.restore(&storage));

    let err = chat.send(&storage, "lost", "10:00".to_owned()).unwrap_err();
    assert!(matches!(err, ChatError::Store(StoreError::Rejected(_))));
    assert!(chat.messages.is_empty());
}

// =============================================================
// Clearing / reloading
// =============================================================

#[test]
fn clear_declined_leaves_everything() {
    let (store, storage, mut chat) = signed_in("Al");
    chat.send(&storage, "keep me", "10:00".to_owned()).unwrap();
    assert!(!chat.clear(&storage, || false).unwrap());
    assert_eq!(chat.messages.len(), 1);
    assert!(store.get("sd1_chat_messages").unwrap().is_some());
}

#[test]
fn clear_confirmed_empties_list_and_removes_key() {
    let (store, storage, mut chat) = signed_in("Al");
    chat.send(&storage, "bye", "10:00".to_owned()).unwrap();
    assert!(chat.clear(&storage, || true).unwrap());
    assert!(chat.messages.is_empty());
    assert_eq!(store.get("sd1_chat_messages"), Ok(None));
}

#[test]
fn clear_failure_keeps_in_memory_list() {
    let backing = MemoryStore::new();
    backing.seed("sd1_chat_username", "Al").unwrap();
    backing.seed("sd1_chat_messages", r#"[{"user":"Al","text":"x","time":"1"}]"#).unwrap();
    let storage = ChatStorage::new(Arc::new(ReadOnlyStore(backing)), StorageKeys::default());
    let mut chat = ChatState::default();
    chat.restore(&storage);

    assert!(chat.clear(&storage, || true).is_err());
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn reload_replaces_in_memory_list_wholesale() {
    let (store, storage, mut chat) = signed_in("Al");
    chat.messages.push(message(Some("local"), "Al", "unsaved"));
    store
        .seed("sd1_chat_messages", r#"[{"id":"x","user":"Bo","text":"theirs","time":"11:11"}]"#)
        .unwrap();
    chat.reload(&storage);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].user, "Bo");
}

// =============================================================
// Replies
// =============================================================

#[test]
fn select_reply_snapshots_and_send_attaches_it() {
    let (_store, storage, mut chat) = signed_in("Al");
    let parent = chat.send(&storage, &"p".repeat(200), "10:00".to_owned()).unwrap().unwrap();
    let parent_id = parent.id.clone().unwrap();

    assert!(chat.select_reply(&parent_id));
    let target = chat.reply_target.clone().unwrap();
    assert_eq!(target.id, parent_id);
    assert_eq!(target.user, "Al");
    assert_eq!(target.text.chars().count(), 120);

    let reply = chat.send(&storage, "agreed", "10:01".to_owned()).unwrap().unwrap();
    assert_eq!(reply.reply_to, Some(target));
    assert!(chat.reply_target.is_none());
}

#[test]
fn select_reply_unknown_or_idless_is_rejected() {
    let (_store, _storage, mut chat) = signed_in("Al");
    chat.messages.push(message(None, "Old", "legacy"));
    assert!(!chat.select_reply("missing"));
    assert!(chat.reply_target.is_none());
}

#[test]
fn cancel_reply_clears_target_only() {
    let (_store, storage, mut chat) = signed_in("Al");
    let sent = chat.send(&storage, "hi", "10:00".to_owned()).unwrap().unwrap();
    chat.select_reply(sent.id.as_deref().unwrap());
    chat.cancel_reply();
    assert!(chat.reply_target.is_none());
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn reply_snapshot_survives_parent_changes() {
    let (_store, storage, mut chat) = signed_in("Al");
    let parent = chat.send(&storage, "original", "10:00".to_owned()).unwrap().unwrap();
    chat.select_reply(parent.id.as_deref().unwrap());
    chat.send(&storage, "reply", "10:01".to_owned()).unwrap();

    chat.messages[0].text = "edited".to_owned();
    chat.messages.remove(0);
    let quoted = chat.messages[0].reply_to.as_ref().unwrap();
    assert_eq!(quoted.text, "original");
}

#[test]
fn reply_to_serializes_as_camel_case() {
    let msg = ChatMessage {
        reply_to: Some(ReplySnapshot { id: "p".to_owned(), user: "Bo".to_owned(), text: "hey".to_owned() }),
        ..message(Some("c"), "Al", "yo")
    };
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["replyTo"]["user"], "Bo");
    assert!(value.get("reply_to").is_none());
}

#[test]
fn send_keeps_locale_formatted_time_verbatim() {
    let (_store, storage, mut chat) = signed_in("Al");
    chat.send(&storage, "hello", "09:30 AM".to_owned()).unwrap();
    assert_eq!(storage.load_messages()[0].time, "09:30 AM");
}
