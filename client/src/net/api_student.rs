//! Learner endpoints: watch progress, comments and the lesson assistant.

#[cfg(test)]
#[path = "api_student_test.rs"]
mod api_student_test;

use serde::Serialize;

use super::api::{Body, FormBody, HttpMethod, fetch_json, fetch_list, fetch_unit};
use super::error::ApiError;
use super::types::{ChatAnswer, Comment, ProgressMap, WatchInput};

fn watch_path(lesson_id: &str) -> String {
    format!("/lesson/{}/watch", urlencoding::encode(lesson_id))
}

fn course_progress_path(course_id: &str) -> String {
    format!("/lesson/course/{}/progress", urlencoding::encode(course_id))
}

fn comments_path(lesson_id: &str) -> String {
    format!("/lesson/{}/comments", urlencoding::encode(lesson_id))
}

fn comment_path(comment_id: &str) -> String {
    format!("/comment/{}", urlencoding::encode(comment_id))
}

#[derive(Serialize)]
struct NewComment<'a> {
    text: &'a str,
}

/// `POST /lesson/{id}/watch`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn save_watch(lesson_id: &str, input: WatchInput) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Post, &watch_path(lesson_id), Body::json(&input)?).await
}

/// `GET /lesson/course/{courseId}/progress`. An empty response is an empty map.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn course_progress(course_id: &str) -> Result<ProgressMap, ApiError> {
    let resp = super::api::fetch_raw(HttpMethod::Get, &course_progress_path(course_id), Body::Empty)
        .await?;
    if resp.status == 204 || resp.body.trim().is_empty() {
        return Ok(ProgressMap::new());
    }
    super::api::decode(&resp.body)
}

/// `GET /lesson/{id}/comments`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn comments(lesson_id: &str) -> Result<Vec<Comment>, ApiError> {
    fetch_list(&comments_path(lesson_id)).await
}

/// `POST /lesson/{id}/comments { text }`, returning the stored comment.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn add_comment(lesson_id: &str, text: &str) -> Result<Comment, ApiError> {
    let body = Body::json(&NewComment { text })?;
    fetch_json(HttpMethod::Post, &comments_path(lesson_id), body).await
}

/// `DELETE /comment/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn delete_comment(comment_id: &str) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Delete, &comment_path(comment_id), Body::Empty).await
}

/// `POST /openai/ask` with multipart `lessonId` and `question`.
///
/// # Errors
///
/// Returns the classified [`ApiError`]; the chat state maps it to a bot reply.
pub async fn ask(lesson_id: &str, question: &str) -> Result<ChatAnswer, ApiError> {
    let form = FormBody::new().text("lessonId", lesson_id).text("question", question);
    fetch_json(HttpMethod::Post, "/openai/ask", Body::Form(form)).await
}
