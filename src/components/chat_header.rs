//! Chat screen header: identity, theme, change user, delete history.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::chat::{CLEAR_CONFIRM_PROMPT, ChatState};
use crate::store::ChatStorage;
use crate::util::dialog;

#[component]
pub fn ChatHeader() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let storage = expect_context::<ChatStorage>();
    let clear_storage = storage.clone();

    let on_change_user = move |_| {
        chat.update(|c| {
            if let Err(err) = c.sign_out(&storage) {
                log::warn!("stored username not removed: {err}");
            }
        });
    };

    let on_delete = move |_| {
        // Blocks until the user answers.
        let confirmed = dialog::confirm(CLEAR_CONFIRM_PROMPT);
        chat.update(|c| match c.clear(&clear_storage, || confirmed) {
            Ok(true) => log::debug!("chat history deleted"),
            Ok(false) => {}
            Err(err) => log::warn!("chat history not deleted: {err}"),
        });
    };

    let current_user = move || chat.with(|c| c.username.clone().unwrap_or_default());

    view! {
        <header class="chat-header">
            <div class="chat-header__who">
                <span class="chat-header__label">"Chatting as"</span>
                <strong class="chat-header__user">{current_user}</strong>
            </div>
            <div class="chat-header__actions">
                <ThemeToggle/>
                <button class="btn" type="button" on:click=on_change_user>
                    "Change user"
                </button>
                <button class="btn btn--danger" type="button" on:click=on_delete>
                    "Delete chat"
                </button>
            </div>
        </header>
    }
}
