//! Root application component and startup.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ChatConfig;
use crate::pages::{chat::ChatPage, username::UsernamePage};
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::store::{ChatStorage, default_store};
use crate::util::theme;

/// Build the initial state from whatever is persisted.
///
/// The theme is read (or defaulted) and written back. A valid stored
/// username resumes the chat with its history; otherwise the username
/// screen is shown.
pub fn bootstrap(storage: &ChatStorage, config: &ChatConfig) -> (ChatState, UiState) {
    let ui = UiState::load(storage, config.default_theme);
    let mut chat = ChatState::new(config.limits);
    if chat.restore(storage) {
        log::debug!("resumed session with {} stored messages", chat.messages.len());
    }
    (chat, ui)
}

/// Root application component.
///
/// Provides the state signals, storage, and config as context, keeps the
/// document theme in step with `UiState`, and switches between the
/// username and chat screens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ChatConfig::default();
    let storage = ChatStorage::new(default_store(), config.keys.clone());
    let (chat_state, ui_state) = bootstrap(&storage, &config);

    let chat = RwSignal::new(chat_state);
    let ui = RwSignal::new(ui_state);

    provide_context(chat);
    provide_context(ui);
    provide_context(storage.clone());
    provide_context(config);

    Effect::new(move || theme::apply(ui.with(|u| u.theme)));

    #[cfg(feature = "csr")]
    crate::sync::listener::install(chat, ui, storage);

    let signed_in = move || chat.with(ChatState::is_signed_in);

    view! {
        <Title text="Local Chat"/>
        <main class="app">
            <Show when=signed_in fallback=|| view! { <UsernamePage/> }>
                <ChatPage/>
            </Show>
        </main>
    }
}
