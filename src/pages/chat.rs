//! Chat screen.

use leptos::prelude::*;

use crate::components::chat_header::ChatHeader;
use crate::components::compose_bar::ComposeBar;
use crate::components::message_list::MessageList;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <section class="screen screen--chat">
            <ChatHeader/>
            <MessageList/>
            <ComposeBar/>
        </section>
    }
}
