//! Message input with reply preview.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::store::ChatStorage;
use crate::util::clock::now_hh_mm;

/// Compose field. Enter sends, Escape cancels the active reply.
#[component]
pub fn ComposeBar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let storage = expect_context::<ChatStorage>();

    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let do_send = move || {
        let text = input.get_untracked();
        let mut outcome = Ok(None);
        chat.update(|c| outcome = c.send(&storage, &text, now_hh_mm()));
        match outcome {
            Ok(Some(_)) => input.set(String::new()),
            Ok(None) => {}
            Err(err) => log::warn!("message not sent: {err}"),
        }

        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get_untracked() {
                if let Err(err) = el.focus() {
                    log::trace!("compose focus failed: {err:?}");
                }
            }
        }
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" if !ev.shift_key() => {
            ev.prevent_default();
            do_send();
        }
        "Escape" => chat.update(ChatState::cancel_reply),
        _ => {}
    };

    let reply_preview = move || {
        chat.with(|c| c.reply_target.clone()).map(|target| {
            view! {
                <div class="reply-preview">
                    <div class="reply-preview__body">
                        <span class="reply-preview__label">"Replying to "</span>
                        <strong class="reply-preview__user">{target.user}</strong>
                        <span class="reply-preview__text">{target.text}</span>
                    </div>
                    <button
                        class="btn btn--ghost reply-preview__cancel"
                        type="button"
                        title="Cancel reply (Esc)"
                        on:click=move |_| chat.update(ChatState::cancel_reply)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    };

    let placeholder = move || {
        let username = chat.with(|c| c.username.clone()).unwrap_or_else(|| "unknown".to_owned());
        format!("Message as {username}...")
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="compose">
            {reply_preview}
            <div class="compose__row">
                <input
                    class="compose__input"
                    type="text"
                    autocomplete="off"
                    node_ref=input_ref
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary compose__send" type="button" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
