//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The session is derived from the stored
//! access token; `loading` stays true until the browser has read storage so
//! server-rendered markup never redirects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::token::{self, TokenClaims};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub claims: Option<TokenClaims>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { claims: None, loading: true }
    }
}

impl AuthState {
    /// Session from decoded claims. Expired claims count as signed out.
    pub fn from_claims(claims: Option<TokenClaims>, now_secs: i64) -> Self {
        Self { claims: claims.filter(|c| !c.is_expired(now_secs)), loading: false }
    }

    /// Session from the token in localStorage.
    pub fn load() -> Self {
        Self::from_claims(token::current_claims(), token::now_secs())
    }

    pub fn is_authenticated(&self) -> bool {
        self.claims.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.claims.as_ref().is_some_and(TokenClaims::is_admin)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.claims.as_ref().and_then(TokenClaims::user_id)
    }
}

/// Signed-out users leave protected pages once storage has been read.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Non-admins leave the admin console once storage has been read.
pub fn should_redirect_non_admin(state: &AuthState) -> bool {
    !state.loading && !state.is_admin()
}
