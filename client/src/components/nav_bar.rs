//! Top navigation bar shared by every dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the role dashboard link, the messages link with the polled unread
//! badge, the theme toggle, and the signed-in user's name.

use leptos::prelude::*;

use crate::components::unread_badge::UnreadBadge;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Header rendered above page content.
#[component]
pub fn NavBar(#[prop(into)] title: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let home_path = move || auth.get().role().map_or("/", |r| r.home_path());
    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    view! {
        <header class="nav-bar">
            <a href=home_path class="nav-bar__home">"Academy"</a>
            <span class="nav-bar__divider" aria-hidden="true"></span>
            <span class="nav-bar__title">{title}</span>

            <span class="nav-bar__spacer"></span>

            <a href="/messages" class="nav-bar__messages">
                "Messages"
                <UnreadBadge/>
            </a>

            <button
                class="btn nav-bar__dark-toggle"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="nav-bar__self">{user_name}</span>
        </header>
    }
}
