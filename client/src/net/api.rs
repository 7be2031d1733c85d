//! REST API helpers for communicating with the academy backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` so list/table views can drop the
//! message into their `error` field instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Child, Coach, Event, Message, NewMessage, Program, UnreadCount, Video};

#[cfg(any(test, not(feature = "hydrate")))]
pub(crate) const NOT_AVAILABLE: &str = "not available on server";

pub(crate) fn children_endpoint() -> String {
    "/api/children".to_owned()
}

pub(crate) fn children_by_parent_endpoint(parent_id: &str) -> String {
    format!("/api/children?parentId={}", encode_component(parent_id))
}

pub(crate) fn children_by_coach_endpoint(coach_id: &str) -> String {
    format!("/api/children?coachId={}", encode_component(coach_id))
}

pub(crate) fn resource_endpoint(collection: &str, id: &str) -> String {
    format!("/api/{collection}/{}", encode_component(id))
}

pub(crate) fn progress_endpoint(child_id: &str) -> String {
    format!("/api/progress/{}", encode_component(child_id))
}

pub(crate) fn messages_endpoint(user_id: &str) -> String {
    format!("/api/messages/{}", encode_component(user_id))
}

pub(crate) fn message_read_endpoint(message_id: &str) -> String {
    format!("/api/messages/{}/read", encode_component(message_id))
}

pub(crate) fn unread_count_endpoint(user_id: &str) -> String {
    format!("/api/messages/unread-count/{}", encode_component(user_id))
}

pub(crate) fn videos_by_child_endpoint(child_id: &str) -> String {
    format!("/api/videos?childId={}", encode_component(child_id))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn request_failed_message(method: &str, url: &str, status: u16) -> String {
    format!("{method} {url} failed: {status}")
}

/// Percent-encode a path segment or query value with the browser's
/// `encodeURIComponent`. Outside the browser no request is ever sent, so the
/// value is returned as is.
fn encode_component(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::encode_uri_component(raw)
            .as_string()
            .unwrap_or_else(|| raw.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}

/// `GET url` and decode the JSON body.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not decode as `T`.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("GET", url, resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Send `body` as JSON with `method` (`POST`/`PUT`) and decode the JSON reply.
///
/// Returns `Ok(None)` when the server answers OK with an empty or non-JSON body.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is non-OK.
pub async fn send_json<B: Serialize, T: DeserializeOwned>(method: &str, url: &str, body: &B) -> Result<Option<T>, String> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match method {
            "POST" => gloo_net::http::Request::post(url),
            "PUT" => gloo_net::http::Request::put(url),
            "PATCH" => gloo_net::http::Request::patch(url),
            other => return Err(format!("unsupported method {other}")),
        };
        let resp = builder
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(method, url, resp.status()));
        }
        Ok(resp.json::<T>().await.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// `DELETE url`.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is non-OK.
pub async fn delete(url: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("DELETE", url, resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch every enrolled child (admin view).
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_children() -> Result<Vec<Child>, String> {
    get_json(&children_endpoint()).await
}

/// Fetch the children linked to a parent account.
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_children_for_parent(parent_id: &str) -> Result<Vec<Child>, String> {
    get_json(&children_by_parent_endpoint(parent_id)).await
}

/// Fetch the athletes assigned to a coach.
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_children_for_coach(coach_id: &str) -> Result<Vec<Child>, String> {
    get_json(&children_by_coach_endpoint(coach_id)).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn fetch_coaches() -> Result<Vec<Coach>, String> {
    get_json("/api/coaches").await
}

/// # Errors
///
/// See [`get_json`].
pub async fn fetch_programs() -> Result<Vec<Program>, String> {
    get_json("/api/programs").await
}

/// # Errors
///
/// See [`get_json`].
pub async fn fetch_events() -> Result<Vec<Event>, String> {
    get_json("/api/events").await
}

/// Fetch videos, optionally narrowed to one child.
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_videos(child_id: Option<&str>) -> Result<Vec<Video>, String> {
    match child_id {
        Some(id) => get_json(&videos_by_child_endpoint(id)).await,
        None => get_json("/api/videos").await,
    }
}

/// Delete one row of a REST collection (`children`, `coaches`, ...).
///
/// # Errors
///
/// See [`delete`].
pub async fn delete_resource(collection: &str, id: &str) -> Result<(), String> {
    delete(&resource_endpoint(collection, id)).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn fetch_messages(user_id: &str) -> Result<Vec<Message>, String> {
    get_json(&messages_endpoint(user_id)).await
}

/// Send a message; returns the stored message when the backend echoes it.
///
/// # Errors
///
/// See [`send_json`].
pub async fn send_message(body: &NewMessage) -> Result<Option<Message>, String> {
    send_json("POST", "/api/messages", body).await
}

/// # Errors
///
/// See [`send_json`].
pub async fn mark_message_read(message_id: &str) -> Result<(), String> {
    send_json::<_, serde_json::Value>("PUT", &message_read_endpoint(message_id), &serde_json::json!({}))
        .await
        .map(|_| ())
}

/// # Errors
///
/// See [`get_json`].
pub async fn fetch_unread_count(user_id: &str) -> Result<u32, String> {
    get_json::<UnreadCount>(&unread_count_endpoint(user_id))
        .await
        .map(|c| c.count)
}
