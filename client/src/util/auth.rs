//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. Both guards
//! wait until the browser has read the stored token, so the server-rendered
//! markup never redirects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, should_redirect_non_admin, should_redirect_unauth};

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Send signed-out users to `/login` and signed-in non-admins home.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = admin_redirect_target(&state) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Where the admin guard sends `state`, if anywhere.
pub fn admin_redirect_target(state: &AuthState) -> Option<&'static str> {
    if should_redirect_unauth(state) {
        Some("/login")
    } else if should_redirect_non_admin(state) {
        Some("/")
    } else {
        None
    }
}
