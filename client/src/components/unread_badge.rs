//! Unread-message count badge.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::messages::{MessagesState, unread_badge_label};

/// Badge showing the unread count; owns the polling task.
#[component]
pub fn UnreadBadge() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();

    crate::util::poll::install_unread_poll(auth, messages);

    let label = move || unread_badge_label(messages.get().unread);

    view! {
        <Show when=move || label().is_some()>
            <span class="badge badge--unread">{move || label().unwrap_or_default()}</span>
        </Show>
    }
}
