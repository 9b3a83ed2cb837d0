use super::*;

#[test]
fn active_subscriptions_path_encodes_user_id() {
    assert_eq!(active_subscriptions_path("u-1"), "/subscription/active/u-1");
    assert_eq!(active_subscriptions_path("a/b"), "/subscription/active/a%2Fb");
}

#[test]
fn user_path_formats_expected_path() {
    assert_eq!(user_path("u-7"), "/user/u-7");
}

#[test]
fn verify_email_body_uses_camel_case() {
    let body = serde_json::to_value(VerifyEmailBody { user_id: "abc", code: "1234" }).unwrap();
    assert_eq!(body, serde_json::json!({"userId": "abc", "code": "1234"}));
}

#[test]
fn refresh_body_wraps_token() {
    let body = serde_json::to_value(RefreshBody { token: "r-1" }).unwrap();
    assert_eq!(body, serde_json::json!({"token": "r-1"}));
}

#[test]
fn subscription_input_serializes_ids() {
    let body = serde_json::to_value(SubscriptionInput {
        user_id: "u-1".to_owned(),
        package_id: "p-1".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"userId": "u-1", "packageId": "p-1"}));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_is_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(login("u", "p"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
