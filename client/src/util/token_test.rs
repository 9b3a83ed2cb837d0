use super::*;

fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_reads_id_and_exp() {
    let token = make_token(&serde_json::json!({"id": "u-1", "exp": 1_900_000_000}));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.user_id(), Some("u-1"));
    assert_eq!(claims.exp, Some(1_900_000_000));
}

#[test]
fn decode_accepts_dotnet_claim_uris() {
    let token = make_token(&serde_json::json!({
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": "u-9",
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "Admin",
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.user_id(), Some("u-9"));
    assert!(claims.is_admin());
}

#[test]
fn decode_falls_back_to_sub_for_user_id() {
    let token = make_token(&serde_json::json!({"sub": "u-2"}));
    assert_eq!(decode_claims(&token).unwrap().user_id(), Some("u-2"));
}

#[test]
fn decode_tolerates_padded_payload() {
    let body = base64::engine::general_purpose::URL_SAFE.encode(br#"{"id":"u-3"}"#);
    let token = format!("h.{body}.s");
    assert_eq!(decode_claims(&token).unwrap().user_id(), Some("u-3"));
}

#[test]
fn decode_rejects_malformed_tokens() {
    assert_eq!(decode_claims(""), None);
    assert_eq!(decode_claims("only-one-part"), None);
    assert_eq!(decode_claims("h.!!!not-base64!!!.s"), None);
    let not_json = URL_SAFE_NO_PAD.encode(b"plain");
    assert_eq!(decode_claims(&format!("h.{not_json}.s")), None);
}

// =============================================================
// Roles and expiry
// =============================================================

#[test]
fn roles_accept_numeric_and_array_claims() {
    let numeric = TokenClaims { role: Some(RoleClaim::Number(1)), ..TokenClaims::default() };
    assert!(numeric.is_admin());

    let many = TokenClaims {
        role: Some(RoleClaim::Many(vec!["Student".to_owned(), "Teacher".to_owned()])),
        ..TokenClaims::default()
    };
    assert_eq!(many.roles(), vec![RoleType::Student, RoleType::Teacher]);
    assert!(!many.is_admin());
}

#[test]
fn expiry_is_inclusive_of_now() {
    let claims = TokenClaims { exp: Some(100), ..TokenClaims::default() };
    assert!(!claims.is_expired(99));
    assert!(claims.is_expired(100));
    assert!(claims.is_expired(101));
}

#[test]
fn missing_exp_never_expires() {
    assert!(!TokenClaims::default().is_expired(i64::MAX));
}

// =============================================================
// Storage (non-hydrate)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn stored_tokens_are_absent_outside_the_browser() {
    store_tokens(&TokenPair { access_token: "a".to_owned(), refresh_token: "r".to_owned() });
    assert_eq!(access_token(), None);
    assert!(!has_live_session());
    clear_tokens();
}

#[test]
fn now_secs_is_after_2020() {
    assert!(now_secs() > 1_577_836_800);
}
