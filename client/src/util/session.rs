//! Browser `localStorage` access for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in happens outside this app; it leaves the user object as JSON under
//! [`USER_KEY`]. These helpers centralize the hydrate-only storage glue so
//! pages never touch `web-sys` directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

pub const USER_KEY: &str = "user";

/// Read the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string under `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// The stored user, if the blob is present and well-formed.
pub fn load_user() -> Option<User> {
    let raw = load_raw(USER_KEY)?;
    let user = parse_user_blob(&raw);
    if user.is_none() {
        leptos::logging::warn!("ignoring malformed `{USER_KEY}` entry in localStorage");
    }
    user
}

/// Parse the stored user blob. Some sign-in flows wrap the user as
/// `{"user": {...}, "token": "..."}`; both shapes are accepted.
pub fn parse_user_blob(raw: &str) -> Option<User> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let inner = match value.get("user") {
        Some(user) if user.is_object() => user.clone(),
        _ => value,
    };
    serde_json::from_value(inner).ok()
}
