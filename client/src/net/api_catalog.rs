//! Catalog endpoints: courses, lessons, quizzes and packages.
//!
//! DESIGN
//! ======
//! Courses and lessons carry media, so their writes are multipart and the
//! caller builds the [`FormBody`]. Quizzes and packages are JSON.

#[cfg(test)]
#[path = "api_catalog_test.rs"]
mod api_catalog_test;

use super::api::{Body, FormBody, HttpMethod, fetch_json, fetch_list, fetch_unit, with_query};
use super::error::ApiError;
use super::types::{Course, Lesson, Package, PackageInput, Quiz, QuizInput};

fn item_path(resource: &str, id: &str) -> String {
    format!("/{resource}/{}", urlencoding::encode(id))
}

fn course_lessons_path(course_id: &str) -> String {
    format!("/lesson/course/{}", urlencoding::encode(course_id))
}

fn quizzes_path(course_id: Option<&str>, lesson_id: Option<&str>) -> String {
    with_query("/quiz", &[("courseId", course_id), ("lessonId", lesson_id)])
}

// ---- courses ----

/// `GET /course`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn courses() -> Result<Vec<Course>, ApiError> {
    fetch_list("/course").await
}

/// `GET /course/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn course(id: &str) -> Result<Course, ApiError> {
    fetch_json(HttpMethod::Get, &item_path("course", id), Body::Empty).await
}

/// `POST /course` (multipart).
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn create_course(form: FormBody) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Post, "/course", Body::Form(form)).await
}

/// `PUT /course/{id}` (multipart).
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn update_course(id: &str, form: FormBody) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Put, &item_path("course", id), Body::Form(form)).await
}

/// `DELETE /course/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn delete_course(id: &str) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Delete, &item_path("course", id), Body::Empty).await
}

// ---- lessons ----

/// `GET /lesson`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn lessons() -> Result<Vec<Lesson>, ApiError> {
    fetch_list("/lesson").await
}

/// `GET /lesson/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn lesson(id: &str) -> Result<Lesson, ApiError> {
    fetch_json(HttpMethod::Get, &item_path("lesson", id), Body::Empty).await
}

/// `GET /lesson/course/{courseId}`, unsorted as the backend returns it.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn course_lessons(course_id: &str) -> Result<Vec<Lesson>, ApiError> {
    fetch_list(&course_lessons_path(course_id)).await
}

/// `POST /lesson` (multipart).
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn create_lesson(form: FormBody) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Post, "/lesson", Body::Form(form)).await
}

/// `PUT /lesson/{id}` (multipart).
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn update_lesson(id: &str, form: FormBody) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Put, &item_path("lesson", id), Body::Form(form)).await
}

/// `DELETE /lesson/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn delete_lesson(id: &str) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Delete, &item_path("lesson", id), Body::Empty).await
}

// ---- quizzes ----

/// `GET /quiz`, optionally filtered by course and lesson.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn quizzes(course_id: Option<&str>, lesson_id: Option<&str>) -> Result<Vec<Quiz>, ApiError> {
    fetch_list(&quizzes_path(course_id, lesson_id)).await
}

/// `GET /quiz/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn quiz(id: &str) -> Result<Quiz, ApiError> {
    fetch_json(HttpMethod::Get, &item_path("quiz", id), Body::Empty).await
}

/// `POST /quiz`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn create_quiz(input: &QuizInput) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Post, "/quiz", Body::json(input)?).await
}

/// `PUT /quiz/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn update_quiz(id: &str, input: &QuizInput) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Put, &item_path("quiz", id), Body::json(input)?).await
}

/// `DELETE /quiz/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn delete_quiz(id: &str) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Delete, &item_path("quiz", id), Body::Empty).await
}

// ---- packages ----

/// `GET /package`; a 204 is an empty list.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn packages() -> Result<Vec<Package>, ApiError> {
    fetch_list("/package").await
}

/// `GET /package/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn package(id: &str) -> Result<Package, ApiError> {
    fetch_json(HttpMethod::Get, &item_path("package", id), Body::Empty).await
}

/// `POST /package`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn create_package(input: &PackageInput) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Post, "/package", Body::json(input)?).await
}

/// `PUT /package/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn update_package(id: &str, input: &PackageInput) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Put, &item_path("package", id), Body::json(input)?).await
}

/// `DELETE /package/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`].
pub async fn delete_package(id: &str) -> Result<(), ApiError> {
    fetch_unit(HttpMethod::Delete, &item_path("package", id), Body::Empty).await
}
