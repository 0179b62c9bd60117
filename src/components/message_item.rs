//! A single message card.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::view::MessageView;

/// One message, tinted by author, with its quoted parent and a reply action.
#[component]
pub fn MessageItem(row: MessageView) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let class = if row.is_me { "msg msg--me" } else { "msg" };
    let style = format!("border-color: {}; background: {};", row.border_color, row.background_color);

    let quote = row.quote.map(|quote| {
        view! {
            <div class="msg__quote">
                <span class="msg__quote-user">{quote.user}</span>
                <span class="msg__quote-text">{quote.text}</span>
            </div>
        }
    });

    let reply_button = row.id.map(|id| {
        let on_reply = move |_| {
            chat.update(|c| {
                if !c.select_reply(&id) {
                    log::debug!("reply target {id} is no longer loaded");
                }
            });
        };
        view! {
            <button class="msg__reply" type="button" title="Reply" on:click=on_reply>
                "Reply"
            </button>
        }
    });

    view! {
        <div class=class style=style>
            {quote}
            <div class="msg__top">
                <span class="msg__user">{row.user}</span>
                <span class="msg__time">{row.time}</span>
                {reply_button}
            </div>
            <div class="msg__text">{row.text}</div>
        </div>
    }
}
