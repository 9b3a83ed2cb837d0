//! Error type shared by every REST helper.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified by status first, then by body shape:
//! `{ "errors": { Field: [msg] } }` becomes [`ApiError::Validation`],
//! `{ "message": ... }` or a bare string becomes [`ApiError::Server`]. Pages
//! render errors through [`ApiError::localized`], which prefers the server's
//! own text and falls back to a translated default.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use crate::i18n::{Lang, t};

/// Failure from a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401: the access token is missing or rejected.
    #[error("unauthorized")]
    Unauthorized,
    /// 404.
    #[error("not found")]
    NotFound,
    /// 403.
    #[error("forbidden")]
    Forbidden,
    /// 429.
    #[error("too many requests")]
    TooManyRequests,
    /// Field-level validation failure.
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },
    /// Any other non-success status.
    #[error("server error {status}")]
    Server { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A success response whose body did not decode.
    #[error("decode error: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => return Self::Unauthorized,
            403 => return Self::Forbidden,
            404 => return Self::NotFound,
            429 => return Self::TooManyRequests,
            _ => {}
        }

        let trimmed = body.trim();
        let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
            return Self::Server { status, message: non_blank(trimmed) };
        };

        if let Some(fields) = value.get("errors").and_then(parse_field_errors) {
            let message = value
                .get("message")
                .or_else(|| value.get("title"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_owned();
            return Self::Validation { message, fields };
        }

        let message = match &value {
            serde_json::Value::String(s) => non_blank(s),
            serde_json::Value::Object(map) => map
                .get("message")
                .and_then(serde_json::Value::as_str)
                .and_then(non_blank),
            _ => None,
        };
        Self::Server { status, message }
    }

    /// The server-supplied message, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Validation { message, .. } if !message.is_empty() => Some(message),
            Self::Server { message: Some(m), .. } => Some(m),
            _ => None,
        }
    }

    /// First validation message for `field`, matched case-insensitively.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        let Self::Validation { fields, .. } = self else {
            return None;
        };
        fields
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(field))
            .and_then(|(_, msgs)| msgs.first())
            .map(String::as_str)
    }

    /// Text to show the user.
    pub fn localized(&self, lang: Lang) -> String {
        if let Some(message) = self.server_message() {
            return message.to_owned();
        }
        let key = match self {
            Self::Unauthorized => "sessionExpired",
            Self::NotFound => "notFound",
            Self::Forbidden => "forbidden",
            Self::TooManyRequests => "tooManyRequests",
            Self::Validation { fields, .. } => {
                if let Some(first) = fields.values().flatten().next() {
                    return first.clone();
                }
                "genericError"
            }
            Self::Network(_) => "networkError",
            Self::Server { .. } | Self::Decode(_) => "genericError",
            Self::Unavailable => "unavailable",
        };
        t(lang, key).to_owned()
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

fn parse_field_errors(value: &serde_json::Value) -> Option<BTreeMap<String, Vec<String>>> {
    let map = value.as_object()?;
    let fields = map
        .iter()
        .map(|(name, msgs)| {
            let msgs = match msgs {
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .map(str::to_owned)
                    .collect(),
                serde_json::Value::String(s) => vec![s.clone()],
                _ => Vec::new(),
            };
            (name.clone(), msgs)
        })
        .collect::<BTreeMap<_, _>>();
    (!fields.is_empty()).then_some(fields)
}
