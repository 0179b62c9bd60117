//! Chat session and message list.
//!
//! DESIGN
//! ======
//! `ChatState` is the whole per-tab model: who is typing, the materialized
//! history, and which message (if any) the next send will quote. History is
//! append-only; the only removal is clearing the whole list. Every mutation
//! rewrites the full persisted list, and a failed write rolls the in-memory
//! change back so memory and storage never diverge because of this tab.
//!
//! Other tabs may overwrite the persisted list at any time. `reload` adopts
//! whatever is stored wholesale; nothing is merged.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::config::Limits;
use crate::error::{ChatError, StoreError};
use crate::store::ChatStorage;
use crate::util::text::{normalize_message, normalize_username, truncate_chars, validate_username};

/// Prompt shown before the history is wiped.
pub const CLEAR_CONFIRM_PROMPT: &str = "Delete all chat messages? This cannot be undone.";

/// A single chat message as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Absent on records written before replies existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user: String,
    pub text: String,
    #[serde(default)]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<ReplySnapshot>,
}

/// Point-in-time copy of the message being replied to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplySnapshot {
    pub id: String,
    pub user: String,
    pub text: String,
}

impl ReplySnapshot {
    /// Snapshot `message`, keeping the first `max_text` characters of its text.
    ///
    /// Messages without an id cannot be quoted.
    #[must_use]
    pub fn of(message: &ChatMessage, max_text: usize) -> Option<Self> {
        let id = message.id.clone()?;
        Some(Self {
            id,
            user: message.user.clone(),
            text: truncate_chars(&message.text, max_text).to_owned(),
        })
    }
}

/// State for the chat screen.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// `None` until a username is entered (the username screen is shown).
    pub username: Option<String>,
    pub messages: Vec<ChatMessage>,
    /// Message the next send will quote.
    pub reply_target: Option<ReplySnapshot>,
    pub limits: Limits,
}

impl ChatState {
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        Self { limits, ..Self::default() }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.username.is_some()
    }

    /// Validate `raw`, persist it as the username, and load history.
    pub fn enter(&mut self, storage: &ChatStorage, raw: &str) -> Result<&str, ChatError> {
        let name = validate_username(raw, &self.limits)?;
        storage.save_username(&name)?;
        self.reload(storage);
        let name = self.username.insert(name);
        Ok(name.as_str())
    }

    /// Resume a username saved by an earlier visit (or another tab).
    ///
    /// Returns whether the session is signed in afterwards. A stored name
    /// that no longer validates is removed.
    pub fn restore(&mut self, storage: &ChatStorage) -> bool {
        let Some(raw) = storage.load_username() else {
            return false;
        };
        match validate_username(&raw, &self.limits) {
            Ok(name) => {
                self.username = Some(name);
                self.reload(storage);
                true
            }
            Err(err) => {
                log::debug!("discarding stored username: {err}");
                if let Err(err) = self.sign_out(storage) {
                    log::warn!("failed to remove stored username: {err}");
                }
                false
            }
        }
    }

    /// Return to the username screen and forget the stored username.
    pub fn sign_out(&mut self, storage: &ChatStorage) -> Result<(), StoreError> {
        self.username = None;
        self.reply_target = None;
        storage.remove_username()
    }

    /// Take on a username written by another tab.
    ///
    /// Returns the adopted name, or `None` if `raw` normalizes to nothing.
    pub fn adopt_username(&mut self, raw: &str) -> Option<&str> {
        let name = normalize_username(raw, self.limits.username_max);
        if name.is_empty() {
            return None;
        }
        Some(self.username.insert(name).as_str())
    }

    /// Append a message from the current user and persist the list.
    ///
    /// Blank text is a no-op (`Ok(None)`). The active reply target is
    /// attached and then cleared.
    pub fn send(
        &mut self,
        storage: &ChatStorage,
        raw_text: &str,
        time: String,
    ) -> Result<Option<ChatMessage>, ChatError> {
        let Some(user) = self.username.clone() else {
            return Err(ChatError::NotSignedIn);
        };
        let Some(text) = normalize_message(raw_text, self.limits.message_max) else {
            return Ok(None);
        };

        let message = ChatMessage {
            id: Some(uuid::Uuid::new_v4().to_string()),
            user,
            text,
            time,
            reply_to: self.reply_target.clone(),
        };
        self.messages.push(message.clone());
        if let Err(err) = storage.save_messages(&self.messages) {
            self.messages.pop();
            return Err(err);
        }
        self.reply_target = None;
        Ok(Some(message))
    }

    /// Wipe the history if `confirm` agrees.
    ///
    /// Returns whether anything was cleared.
    pub fn clear(&mut self, storage: &ChatStorage, confirm: impl FnOnce() -> bool) -> Result<bool, ChatError> {
        if !confirm() {
            return Ok(false);
        }
        storage.remove_messages()?;
        self.messages.clear();
        self.reply_target = None;
        Ok(true)
    }

    /// Replace the in-memory history with whatever is persisted.
    pub fn reload(&mut self, storage: &ChatStorage) {
        self.messages = storage.load_messages();
    }

    /// Quote the message with `id` in the next send.
    ///
    /// Returns `false` if no such message is loaded.
    pub fn select_reply(&mut self, id: &str) -> bool {
        let snapshot = self
            .messages
            .iter()
            .find(|m| m.id.as_deref() == Some(id))
            .and_then(|m| ReplySnapshot::of(m, self.limits.reply_snippet_max));
        match snapshot {
            Some(snapshot) => {
                self.reply_target = Some(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn cancel_reply(&mut self) {
        self.reply_target = None;
    }
}
