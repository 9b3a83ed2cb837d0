//! Reverse proxy for the upstream REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls same-origin paths under the proxy prefix
//! (`/api/v1` by default). This module forwards those calls to the configured
//! upstream base URL, keeping method, query string, body and end-to-end headers
//! (including `Authorization`), and relays the upstream response as-is.
//!
//! ERROR HANDLING
//! ==============
//! Upstream connect failures and timeouts become `502 Bad Gateway` with a
//! `{ "message": ... }` body the client already knows how to read. Upstream
//! HTTP errors are not errors here; their status and body pass through.
//!
//! TRADE-OFFS
//! ==========
//! Request and response bodies are buffered rather than streamed. Video
//! uploads are the largest payloads, so the request cap is generous.

use axum::body::{Body, Bytes, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_REQUEST_BYTES: usize = 512 * 1024 * 1024;

fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("path is outside the proxy prefix")]
    OutsidePrefix,

    #[error("request body could not be read: {0}")]
    RequestBody(axum::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::OutsidePrefix => StatusCode::NOT_FOUND,
            Self::RequestBody(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Upstream(_) => "upstream API unavailable".to_owned(),
            other => other.to_string(),
        };
        (status, axum::Json(serde_json::json!({ "message": message }))).into_response()
    }
}

/// Map a local path (with optional query) onto the upstream base URL.
///
/// Returns `None` when the path does not sit under `prefix`, which also
/// rejects lookalikes such as `/api/v10` for the prefix `/api/v1`.
pub fn upstream_url(base: &str, prefix: &str, path_and_query: &str) -> Option<String> {
    let rest = path_and_query.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') {
        Some(format!("{base}{rest}"))
    } else {
        None
    }
}

/// Copy `headers` without hop-by-hop entries, names listed in `Connection`,
/// and any of `extra`.
pub fn end_to_end_headers(headers: &HeaderMap, extra: &[HeaderName]) -> HeaderMap {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || listed.contains(name) || extra.contains(name) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Forward one request upstream and relay the response.
pub async fn forward(State(state): State<AppState>, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    match relay(&state, req).await {
        Ok(resp) => resp,
        Err(e) => {
            if matches!(e, ProxyError::Upstream(_)) {
                tracing::warn!(%method, %path, error = %e, "proxy upstream failure");
            } else {
                tracing::debug!(%method, %path, error = %e, "proxy request rejected");
            }
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, req: Request) -> Result<Response, ProxyError> {
    let path_and_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str()).to_owned();
    let url = upstream_url(&state.config.upstream_url, &state.config.proxy_prefix, &path_and_query)
        .ok_or(ProxyError::OutsidePrefix)?;

    let (parts, body) = req.into_parts();
    let body: Bytes = to_bytes(body, MAX_REQUEST_BYTES)
        .await
        .map_err(ProxyError::RequestBody)?;
    let headers = end_to_end_headers(&parts.headers, &[header::HOST, header::CONTENT_LENGTH]);

    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = end_to_end_headers(upstream.headers(), &[header::CONTENT_LENGTH]);
    let bytes = upstream.bytes().await?;
    tracing::debug!(%url, status = status.as_u16(), len = bytes.len(), "proxied");

    let mut resp = Response::new(Body::from(bytes));
    *resp.status_mut() = status;
    *resp.headers_mut() = headers;
    Ok(resp)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
