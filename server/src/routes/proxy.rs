//! `/api/*` forwarder to the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Every `/api/...` request is
//! replayed against `BACKEND_URL` with the same method, path, query, body, and
//! end-to-end headers, and the backend's reply is passed back unchanged apart
//! from hop-by-hop headers. Nothing is cached or retried here.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend timed out: {0}")]
    Timeout(String),
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend response failed: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_connect() {
            Self::Unreachable(e.to_string())
        } else {
            Self::Upstream(e.to_string())
        }
    }
}

pub(crate) fn proxy_error_to_status(err: &ProxyError) -> StatusCode {
    match err {
        ProxyError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        ProxyError::Unreachable(_) | ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = proxy_error_to_status(&self);
        (status, axum::Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// Headers that describe one connection and must not be forwarded.
static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
];

/// Copy `headers` without hop-by-hop entries, anything named by the
/// `Connection` header, `Keep-Alive`, or `Content-Length`.
pub(crate) fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let named_by_connection: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if HOP_BY_HOP.contains(name)
            || *name == header::CONTENT_LENGTH
            || name.as_str() == "keep-alive"
            || named_by_connection.iter().any(|n| n == name.as_str())
        {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Forward one `/api/*` request and relay the backend reply.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = state.backend_target(uri.path(), uri.query());

    let upstream = state
        .http
        .request(method.clone(), &target)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            let err = ProxyError::from(e);
            tracing::warn!(%method, path = uri.path(), error = %err, "backend request failed");
            err
        })?;

    let status = upstream.status();
    let reply_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(ProxyError::from)?;
    tracing::debug!(%method, path = uri.path(), status = status.as_u16(), bytes = bytes.len(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = reply_headers;
    Ok(response)
}
