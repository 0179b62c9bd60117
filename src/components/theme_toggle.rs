//! Light/dark switch shown on both screens.

use leptos::prelude::*;

use crate::state::ui::{Theme, UiState};
use crate::store::ChatStorage;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let storage = expect_context::<ChatStorage>();

    let on_toggle = move |_| {
        ui.update(|u| {
            if let Err(err) = u.toggle_theme(&storage) {
                log::warn!("theme not persisted: {err}");
            }
        });
    };

    let label = move || match ui.with(|u| u.theme) {
        Theme::Dark => "Light mode",
        Theme::Light => "Dark mode",
    };

    view! {
        <button class="btn btn--ghost theme-toggle" type="button" title="Toggle theme" on:click=on_toggle>
            {label}
        </button>
    }
}
