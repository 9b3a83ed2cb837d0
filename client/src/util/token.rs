//! Bearer-token storage and JWT claim decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens from `/auth/login` live in localStorage under `accessToken` and
//! `refreshToken`. The access token's payload is decoded without signature
//! verification; the claims only drive redirects, the admin gate and the
//! chatbot's fail-fast expiry check. The backend stays authoritative.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use super::storage;
use crate::net::types::{RoleType, TokenPair};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// The access-token claims the UI cares about. .NET issuers spell the id and
/// role claims as schema URIs, hence the aliases.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(
        default,
        alias = "nameid",
        alias = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier"
    )]
    pub id: Option<String>,
    #[serde(default, alias = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role")]
    pub role: Option<RoleClaim>,
    /// Expiry, seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

/// A role claim may be a single value or an array, as string or number.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RoleClaim {
    Number(i64),
    One(String),
    Many(Vec<String>),
}

impl TokenClaims {
    /// The user id the backend expects in `/subscription/active/{userId}` and `/user/{id}`.
    pub fn user_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.sub.as_deref())
    }

    pub fn roles(&self) -> Vec<RoleType> {
        match &self.role {
            None => Vec::new(),
            Some(RoleClaim::Number(n)) => RoleType::parse(&n.to_string()).into_iter().collect(),
            Some(RoleClaim::One(s)) => RoleType::parse(s).into_iter().collect(),
            Some(RoleClaim::Many(all)) => all.iter().filter_map(|s| RoleType::parse(s)).collect(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles().contains(&RoleType::Admin)
    }

    /// A token without `exp` never expires client-side.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

/// Decode the payload segment of a JWT. Returns `None` for anything malformed.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut parts = token.split('.');
    let (_header, payload) = (parts.next()?, parts.next()?);
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn access_token() -> Option<String> {
    storage::get_item(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn refresh_token() -> Option<String> {
    storage::get_item(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn store_tokens(pair: &TokenPair) {
    storage::set_item(ACCESS_TOKEN_KEY, &pair.access_token);
    storage::set_item(REFRESH_TOKEN_KEY, &pair.refresh_token);
}

pub fn set_access_token(token: &str) {
    storage::set_item(ACCESS_TOKEN_KEY, token);
}

pub fn clear_tokens() {
    storage::remove_item(ACCESS_TOKEN_KEY);
    storage::remove_item(REFRESH_TOKEN_KEY);
}

/// Claims of the stored access token.
pub fn current_claims() -> Option<TokenClaims> {
    access_token().as_deref().and_then(decode_claims)
}

pub fn current_user_id() -> Option<String> {
    current_claims().and_then(|c| c.user_id().map(str::to_owned))
}

/// Current wall-clock time in whole seconds.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// True when a stored token exists and has not expired.
pub fn has_live_session() -> bool {
    current_claims().is_some_and(|c| !c.is_expired(now_secs()))
}
