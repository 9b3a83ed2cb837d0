use super::*;
use crate::util::token::{RoleClaim, TokenClaims};

fn signed_in(role: &str) -> AuthState {
    AuthState {
        claims: Some(TokenClaims {
            id: Some("u-1".to_owned()),
            role: Some(RoleClaim::One(role.to_owned())),
            ..TokenClaims::default()
        }),
        loading: false,
    }
}

#[test]
fn admin_guard_waits_while_loading() {
    assert_eq!(admin_redirect_target(&AuthState::default()), None);
}

#[test]
fn admin_guard_sends_signed_out_users_to_login() {
    let state = AuthState { claims: None, loading: false };
    assert_eq!(admin_redirect_target(&state), Some("/login"));
}

#[test]
fn admin_guard_sends_students_home() {
    assert_eq!(admin_redirect_target(&signed_in("Student")), Some("/"));
}

#[test]
fn admin_guard_lets_admins_through() {
    assert_eq!(admin_redirect_target(&signed_in("Admin")), None);
}
