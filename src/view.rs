//! Projection of the message list into render-ready rows.
//!
//! Pure: the same history and identity always yield the same rows, so the
//! components stay thin and the projection is tested natively.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::state::chat::ChatMessage;
use crate::util::color::{background_color, border_color, hue_for_name};

/// One rendered message row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageView {
    /// Stable list key.
    pub key: String,
    /// Present when the message can be quoted.
    pub id: Option<String>,
    pub user: String,
    pub text: String,
    pub time: String,
    /// Authored by the current tab's username.
    pub is_me: bool,
    pub hue: u16,
    pub border_color: String,
    pub background_color: String,
    pub quote: Option<QuoteView>,
}

/// Quoted parent shown above a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteView {
    pub user: String,
    pub text: String,
}

/// Project every message for display as `me`.
#[must_use]
pub fn message_views(messages: &[ChatMessage], me: Option<&str>) -> Vec<MessageView> {
    messages
        .iter()
        .enumerate()
        .map(|(index, message)| message_view(index, message, me))
        .collect()
}

fn message_view(index: usize, message: &ChatMessage, me: Option<&str>) -> MessageView {
    let hue = hue_for_name(&message.user);
    // Legacy records have no id; position plus content is unique enough
    // because the list is append-only between reloads.
    let key = match &message.id {
        Some(id) => id.clone(),
        None => format!("{index}:{}:{}:{}", message.user, message.time, message.text),
    };
    MessageView {
        key,
        id: message.id.clone(),
        user: message.user.clone(),
        text: message.text.clone(),
        time: message.time.clone(),
        is_me: me == Some(message.user.as_str()),
        hue,
        border_color: border_color(hue),
        background_color: background_color(hue),
        quote: message
            .reply_to
            .as_ref()
            .map(|parent| QuoteView { user: parent.user.clone(), text: parent.text.clone() }),
    }
}
