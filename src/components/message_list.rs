//! Scrollable message history.
//!
//! Rows are keyed, so a local send appends one card while a reload or
//! clear rebuilds the list.

use leptos::prelude::*;

use crate::components::message_item::MessageItem;
use crate::state::chat::ChatState;
use crate::view::{MessageView, message_views};

#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let rows = Memo::new(move |_| chat.with(|c| message_views(&c.messages, c.username.as_deref())));

    // Keep the newest message in view.
    Effect::new(move || {
        let count = rows.with(Vec::len);
        log::trace!("rendering {count} messages");

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-area" node_ref=messages_ref>
            <Show when=move || rows.with(Vec::is_empty)>
                <div class="chat-area__empty">"No messages yet"</div>
            </Show>
            <For
                each=move || rows.get()
                key=|row: &MessageView| row.key.clone()
                children=move |row: MessageView| view! { <MessageItem row=row/> }
            />
        </div>
    }
}
