//! Inbox page: list, mark read, and reply inline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shares `MessagesState` with the header badge. Marking a message read
//! decrements the badge locally before the request resolves; the next poll
//! corrects any drift.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::session_gate::SessionGate;
use crate::net::types::{Message, NewMessage};
use crate::state::auth::AuthState;
use crate::state::messages::MessagesState;

/// The other party of `message` from `user_id`'s point of view.
#[must_use]
pub fn reply_target(message: &Message, user_id: &str) -> String {
    if message.sender_id == user_id { message.receiver_id.clone() } else { message.sender_id.clone() }
}

/// Build an outgoing message, or `None` when there is nothing to send.
#[must_use]
pub fn compose(sender_id: &str, receiver_id: &str, content: &str) -> Option<NewMessage> {
    let content = content.trim();
    if content.is_empty() || sender_id.is_empty() || receiver_id.trim().is_empty() {
        return None;
    }
    Some(NewMessage {
        sender_id: sender_id.to_owned(),
        receiver_id: receiver_id.trim().to_owned(),
        content: content.to_owned(),
    })
}

fn load_inbox(messages: RwSignal<MessagesState>, user_id: String) {
    #[cfg(feature = "hydrate")]
    {
        messages.update(|m| m.loading = true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_messages(&user_id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("inbox load failed: {e}");
            }
            messages.try_update(|m| m.finish_load(&user_id, result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (messages, user_id);
    }
}

fn mark_read(messages: RwSignal<MessagesState>, message_id: String) {
    let mut changed = false;
    messages.update(|m| changed = m.mark_read(&message_id));
    if !changed {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::mark_message_read(&message_id).await {
            leptos::logging::warn!("mark read failed: message={message_id} error={e}");
        }
    });
}

fn send(messages: RwSignal<MessagesState>, body: NewMessage) {
    #[cfg(feature = "hydrate")]
    {
        messages.update(|m| m.sending = true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_message(&body).await;
            if let Err(e) = &result {
                leptos::logging::warn!("send message failed: {e}");
            }
            messages.try_update(|m| m.finish_send(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (messages, body);
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();

    let recipient = RwSignal::new(String::new());
    let draft = RwSignal::new(String::new());

    let user_id = crate::util::auth::session_user_id(auth);

    Effect::new(move || {
        if let Some(user_id) = user_id.get() {
            load_inbox(messages, user_id);
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = user_id.get_untracked() else {
            return;
        };
        if let Some(body) = compose(&user_id, &recipient.get_untracked(), &draft.get_untracked()) {
            send(messages, body);
            draft.set(String::new());
        }
    };

    let rows = move || {
        let user_id = user_id.get().unwrap_or_default();
        messages
            .get()
            .inbox
            .into_iter()
            .map(|message| {
                let incoming = message.receiver_id == user_id;
                let unread = incoming && !message.read;
                let other = reply_target(&message, &user_id);
                let id = message.id.clone();
                view! {
                    <li class="messages-page__item" class:messages-page__item--unread=unread>
                        <div class="messages-page__meta">
                            <span>{if incoming { format!("From {other}") } else { format!("To {other}") }}</span>
                            <span>{message.created_at.clone().unwrap_or_default()}</span>
                        </div>
                        <p class="messages-page__content">{message.content.clone()}</p>
                        <div class="messages-page__actions">
                            <Show when=move || unread>
                                {
                                    let id = id.clone();
                                    view! {
                                        <button class="btn btn--small" on:click=move |_| mark_read(messages, id.clone())>
                                            "Mark read"
                                        </button>
                                    }
                                }
                            </Show>
                            {
                                let other = other.clone();
                                view! {
                                    <button class="btn btn--small" on:click=move |_| recipient.set(other.clone())>
                                        "Reply"
                                    </button>
                                }
                            }
                        </div>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="messages-page">
            <NavBar title="Messages"/>
            <SessionGate>
                <Show when=move || messages.get().error.is_some()>
                    <p class="messages-page__error" role="alert">{move || messages.get().error.unwrap_or_default()}</p>
                </Show>
                <form class="messages-page__composer" on:submit=submit>
                    <input
                        class="messages-page__input"
                        type="text"
                        placeholder="Recipient id"
                        prop:value=move || recipient.get()
                        on:input=move |ev| recipient.set(event_target_value(&ev))
                    />
                    <textarea
                        class="messages-page__input"
                        placeholder="Write a message"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || messages.get().sending>
                        "Send"
                    </button>
                </form>
                <Show
                    when=move || !messages.get().loading
                    fallback=move || view! { <p>"Loading messages..."</p> }
                >
                    <Show
                        when=move || !messages.get().inbox.is_empty()
                        fallback=move || view! { <p class="messages-page__empty">"No messages yet."</p> }
                    >
                        <ul class="messages-page__list">{rows}</ul>
                    </Show>
                </Show>
            </SessionGate>
        </div>
    }
}
