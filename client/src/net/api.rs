//! Core REST plumbing shared by the per-resource API modules.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin [`API_BASE`], which the server forwards to the backend.
//! Server-side (SSR): [`send`] returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call funnels through [`fetch_text`]. A 401 on a request that carried
//! a bearer token clears both tokens and sends the browser to `/login`; the
//! caller still receives [`ApiError::Unauthorized`] so it can stop work.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Same-origin prefix for every REST call.
pub const API_BASE: &str = "/api/v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A file picked in an `<input type="file">`.
#[cfg(feature = "hydrate")]
pub type FileHandle = web_sys::File;

/// Placeholder for picked files outside the browser.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHandle;

/// A multipart body built from text fields and optional files.
#[derive(Clone, Debug, Default)]
pub struct FormBody {
    fields: Vec<(String, String)>,
    files: Vec<(String, FileHandle)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_owned(), value.into()));
        self
    }

    /// Attach `file` under `name`; `None` leaves the field out entirely.
    #[must_use]
    pub fn file(mut self, name: &str, file: Option<FileHandle>) -> Self {
        if let Some(file) = file {
            self.files.push((name.to_owned(), file));
        }
        self
    }

    /// First text value for `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    #[cfg(feature = "hydrate")]
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let data = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in &self.fields {
            data.append_with_str(name, value).map_err(js_err)?;
        }
        for (name, file) in &self.files {
            data.append_with_blob_and_filename(name, file, &file.name())
                .map_err(js_err)?;
        }
        Ok(data)
    }
}

/// Request payload.
#[derive(Clone, Debug, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(String),
    Form(FormBody),
}

impl Body {
    /// Serialize `value` as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `value` cannot be serialized.
    pub fn json<B: Serialize>(value: &B) -> Result<Self, ApiError> {
        serde_json::to_string(value)
            .map(Self::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Raw status and body text of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Full URL for an API path such as `/course/42`.
pub fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Append percent-encoded query parameters, skipping absent or blank values.
pub fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(k, v)| {
            v.filter(|v| !v.trim().is_empty())
                .map(|v| format!("{k}={}", urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}

/// Map a raw response to its body on success or the classified error.
///
/// # Errors
///
/// Returns the [`ApiError`] matching any non-2xx status.
pub fn interpret(resp: RawResponse) -> Result<RawResponse, ApiError> {
    if (200..300).contains(&resp.status) {
        Ok(resp)
    } else {
        Err(ApiError::from_response(resp.status, &resp.body))
    }
}

/// Pair a status with its body text. A failed or aborted body read is a
/// network error, never an empty body.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the body could not be read.
pub fn completed_response<E: std::fmt::Display>(
    status: u16,
    body: Result<String, E>,
) -> Result<RawResponse, ApiError> {
    body.map(|body| RawResponse { status, body })
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Decode a JSON success body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a list body, treating 204 and an empty body as an empty list.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when a non-empty body is not a `T` array.
pub fn decode_list<T: DeserializeOwned>(resp: &RawResponse) -> Result<Vec<T>, ApiError> {
    if resp.status == 204 || resp.body.trim().is_empty() {
        return Ok(Vec::new());
    }
    decode(&resp.body)
}

async fn send(method: HttpMethod, path: &str, body: Body) -> Result<(RawResponse, bool), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint(path);
        let mut builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        let token = crate::util::token::access_token();
        if let Some(token) = &token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(raw) => builder.header("Content-Type", "application/json").body(raw),
            Body::Form(form) => builder.body(form.to_form_data()?),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let raw = completed_response(status, resp.text().await)?;
        Ok((raw, token.is_some()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

fn on_session_expired() {
    crate::util::token::clear_tokens();
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Perform a request and return the successful raw response.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when no response arrives, or the classified
/// status error otherwise.
pub async fn fetch_raw(method: HttpMethod, path: &str, body: Body) -> Result<RawResponse, ApiError> {
    let (resp, authenticated) = send(method, path, body).await?;
    interpret(resp).inspect_err(|err| {
        #[cfg(feature = "hydrate")]
        log::warn!("{method:?} {path} failed: {err}");
        if authenticated && *err == ApiError::Unauthorized {
            on_session_expired();
        }
    })
}

/// Perform a request and return the body text.
///
/// # Errors
///
/// See [`fetch_raw`].
pub async fn fetch_text(method: HttpMethod, path: &str, body: Body) -> Result<String, ApiError> {
    fetch_raw(method, path, body).await.map(|r| r.body)
}

/// Perform a request and decode its JSON body.
///
/// # Errors
///
/// See [`fetch_raw`]; also [`ApiError::Decode`].
pub async fn fetch_json<T: DeserializeOwned>(
    method: HttpMethod,
    path: &str,
    body: Body,
) -> Result<T, ApiError> {
    let text = fetch_text(method, path, body).await?;
    decode(&text)
}

/// `GET` a list endpoint.
///
/// # Errors
///
/// See [`fetch_raw`]; also [`ApiError::Decode`].
pub async fn fetch_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let resp = fetch_raw(HttpMethod::Get, path, Body::Empty).await?;
    decode_list(&resp)
}

/// Perform a request whose response body is irrelevant.
///
/// # Errors
///
/// See [`fetch_raw`].
pub async fn fetch_unit(method: HttpMethod, path: &str, body: Body) -> Result<(), ApiError> {
    fetch_raw(method, path, body).await.map(|_| ())
}
