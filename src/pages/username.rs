//! Username entry screen.

#[cfg(test)]
#[path = "username_test.rs"]
mod username_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::error::ChatError;
use crate::state::chat::ChatState;
use crate::store::ChatStorage;

/// Text shown under the form for a failed entry.
pub(crate) fn inline_error(err: &ChatError) -> String {
    if err.is_validation() {
        err.to_string()
    } else {
        "Could not save your username. Try again.".to_owned()
    }
}

#[component]
pub fn UsernamePage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let storage = expect_context::<ChatStorage>();

    let name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = name.get_untracked();
        let mut outcome = Ok(());
        chat.update(|c| outcome = c.enter(&storage, &raw).map(|_| ()));
        match outcome {
            Ok(()) => {
                name.set(String::new());
                error.set(String::new());
            }
            Err(err) => {
                if !err.is_validation() {
                    log::warn!("username not saved: {err}");
                }
                error.set(inline_error(&err));
            }
        }
    };

    view! {
        <section class="screen screen--username">
            <div class="username-card">
                <div class="username-card__top">
                    <h1>"Local Chat"</h1>
                    <ThemeToggle/>
                </div>
                <form class="username-form" on:submit=on_submit>
                    <label for="usernameInput">"Choose a username"</label>
                    <input
                        id="usernameInput"
                        class="username-input"
                        type="text"
                        autocomplete="off"
                        placeholder="e.g. Ada"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            error.set(String::new());
                        }
                    />
                    <button class="btn btn--primary" type="submit">
                        "Enter chat"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="username-error" role="alert">
                        {move || error.get()}
                    </p>
                </Show>
            </div>
        </section>
    }
}
