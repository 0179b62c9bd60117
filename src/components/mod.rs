//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chat chrome and read/write the shared `ChatState` and
//! `UiState` signals from Leptos context.

pub mod chat_header;
pub mod compose_bar;
pub mod message_item;
pub mod message_list;
pub mod theme_toggle;
