use super::*;
use crate::util::token::RoleClaim;

fn claims(id: &str, role: Option<&str>, exp: Option<i64>) -> TokenClaims {
    TokenClaims {
        sub: None,
        id: Some(id.to_owned()),
        role: role.map(|r| RoleClaim::One(r.to_owned())),
        exp,
    }
}

#[test]
fn default_state_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_non_admin(&state));
}

#[test]
fn should_redirect_unauth_when_loaded_without_session() {
    let state = AuthState::from_claims(None, 0);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn expired_claims_count_as_signed_out() {
    let state = AuthState::from_claims(Some(claims("u-1", None, Some(10))), 20);
    assert!(!state.is_authenticated());
    assert!(should_redirect_unauth(&state));
}

#[test]
fn live_session_exposes_user_id() {
    let state = AuthState::from_claims(Some(claims("u-1", Some("Student"), Some(100))), 20);
    assert_eq!(state.user_id(), Some("u-1"));
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_non_admin(&state));
}

#[test]
fn admin_role_passes_admin_gate() {
    let state = AuthState::from_claims(Some(claims("u-1", Some("Admin"), None)), 20);
    assert!(state.is_admin());
    assert!(!should_redirect_non_admin(&state));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_outside_the_browser_is_signed_out() {
    let state = AuthState::load();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
