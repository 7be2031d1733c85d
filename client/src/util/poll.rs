//! Fixed-interval unread-count polling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header badge owns the poller. It runs for as long as the badge is
//! mounted and stops at the next tick after `on_cleanup`; in-flight requests
//! are not cancelled, their results are simply dropped.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::messages::{MessagesState, UNREAD_POLL_SECS};

/// Delay before re-checking while the session has not been read yet.
pub const SESSION_WAIT_MILLIS: u64 = 1_000;

/// Delay before the next poll tick.
#[must_use]
pub fn next_poll_delay(has_user: bool) -> Duration {
    if has_user {
        Duration::from_secs(UNREAD_POLL_SECS)
    } else {
        Duration::from_millis(SESSION_WAIT_MILLIS)
    }
}

/// Start polling the unread count for the signed-in user until the owning
/// component is torn down.
pub fn install_unread_poll(auth: RwSignal<AuthState>, messages: RwSignal<MessagesState>) {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let user_id = auth.try_get_untracked().and_then(|a| a.user_id());
                if let Some(user_id) = user_id.as_deref() {
                    match crate::net::api::fetch_unread_count(user_id).await {
                        Ok(count) => {
                            if alive_task.load(Ordering::Relaxed) {
                                messages.try_update(|m| m.set_unread(count));
                            }
                        }
                        Err(e) => leptos::logging::warn!("unread count poll failed: {e}"),
                    }
                }
                gloo_timers::future::sleep(next_poll_delay(user_id.is_some())).await;
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, messages);
    }
}
