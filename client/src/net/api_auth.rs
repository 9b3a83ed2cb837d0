//! Account endpoints: login, registration, verification, profile and
//! subscriptions.

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use serde::Serialize;

use super::api::{Body, FormBody, HttpMethod, fetch_json, fetch_list, fetch_text, fetch_unit};
use super::error::ApiError;
use super::types::{Me, RefreshResponse, Subscription, SubscriptionInput, TokenPair};

fn active_subscriptions_path(user_id: &str) -> String {
    format!("/subscription/active/{}", urlencoding::encode(user_id))
}

fn user_path(user_id: &str) -> String {
    format!("/user/{}", urlencoding::encode(user_id))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyEmailBody<'a> {
    user_id: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
struct RefreshBody<'a> {
    token: &'a str,
}

/// `POST /auth/login` with multipart `Username`/`Password`.
///
/// # Errors
///
/// Returns the classified [`ApiError`]; bad credentials usually arrive as
/// [`ApiError::Unauthorized`] or [`ApiError::Server`].
pub async fn login(username: &str, password: &str) -> Result<TokenPair, ApiError> {
    let form = FormBody::new().text("Username", username).text("Password", password);
    fetch_json(HttpMethod::Post, "/auth/login", Body::Form(form)).await
}

/// `POST /auth/register`. Returns the raw response text, which carries the new user id.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn register(form: FormBody) -> Result<String, ApiError> {
    fetch_text(HttpMethod::Post, "/auth/register", Body::Form(form)).await
}

/// `POST /auth/verify-email`. The user id is sent lowercase.
///
/// # Errors
///
/// Returns the classified [`ApiError`]; callers inspect its message.
pub async fn verify_email(user_id: &str, code: &str) -> Result<String, ApiError> {
    let user_id = user_id.to_ascii_lowercase();
    let body = Body::json(&VerifyEmailBody { user_id: &user_id, code })?;
    fetch_text(HttpMethod::Post, "/auth/verify-email", body).await
}

/// `POST /auth/refresh { token }`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn refresh(refresh_token: &str) -> Result<RefreshResponse, ApiError> {
    let body = Body::json(&RefreshBody { token: refresh_token })?;
    fetch_json(HttpMethod::Post, "/auth/refresh", body).await
}

/// `GET /auth/me`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn me() -> Result<Me, ApiError> {
    fetch_json(HttpMethod::Get, "/auth/me", Body::Empty).await
}

/// `PUT /user/{id}` with a multipart profile form.
///
/// # Errors
///
/// Returns the classified [`ApiError`]; field errors come back as
/// [`ApiError::Validation`].
pub async fn update_user(user_id: &str, form: FormBody) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Put, &user_path(user_id), Body::Form(form)).await
}

/// `GET /subscription/active/{userId}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn active_subscriptions(user_id: &str) -> Result<Vec<Subscription>, ApiError> {
    fetch_list(&active_subscriptions_path(user_id)).await
}

/// `POST /subscription`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn subscribe(input: &SubscriptionInput) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Post, "/subscription", Body::json(input)?).await
}
