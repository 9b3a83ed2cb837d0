//! REST DTOs mirrored from the backend's camelCase JSON.
//!
//! DESIGN
//! ======
//! These are plain records. The client enforces nothing beyond form
//! validation, so optional backend fields default instead of failing the whole
//! decode. Request bodies that go out as JSON have their own `*Input` structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Access/refresh token pair returned by `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Body of `/auth/refresh`. The access token is optional because the backend
/// may answer with an empty object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// The authenticated user from `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    /// Exam group, 1 through 4.
    #[serde(default)]
    pub group: i32,
    /// Sector name as the backend spells it (`"Azerbaijani"`, `"Russian"`, `"English"`).
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subject: SubjectType,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Position within the course; lower plays first.
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub transcript: Option<String>,
    /// Markdown body shown under the player.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub lesson_id: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    /// Minutes.
    #[serde(default)]
    pub time_limit: Option<u32>,
    /// Percent required to pass.
    #[serde(default)]
    pub passing_score: u32,
}

/// JSON body for `POST /quiz` and `PUT /quiz/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizInput {
    pub title: String,
    pub description: String,
    pub course_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
    pub questions: Vec<QuizQuestion>,
    pub time_limit: Option<u32>,
    pub passing_score: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub course_ids: Vec<String>,
    #[serde(default)]
    pub discount: f64,
    /// Days.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

/// JSON body for `POST /package` and `PUT /package/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount: f64,
    pub duration: u32,
    pub status: String,
    pub course_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub package_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub is_active: bool,
}

/// JSON body for `POST /subscription`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInput {
    pub user_id: String,
    pub package_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub lesson_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    #[serde(default)]
    pub lesson_id: String,
    #[serde(default)]
    pub completed: bool,
    /// Last saved position in seconds.
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub last_watched_at: Option<String>,
}

/// Lesson id → progress, as returned by `/lesson/course/{courseId}/progress`.
pub type ProgressMap = HashMap<String, LessonProgress>;

/// Body of `POST /lesson/{id}/watch`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WatchInput {
    pub progress: f64,
    pub completed: bool,
}

/// Reply from `/openai/ask`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// Course subject. Unknown backend values decode as [`SubjectType::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectType {
    #[default]
    Math,
    Physics,
    Chemistry,
    Biology,
    History,
    Geography,
    Literature,
    English,
    Azerbaijani,
    Russian,
    #[serde(other)]
    Other,
}

impl SubjectType {
    /// Subjects offered in the course form.
    pub const SELECTABLE: [SubjectType; 10] = [
        Self::Math,
        Self::Physics,
        Self::Chemistry,
        Self::Biology,
        Self::History,
        Self::Geography,
        Self::Literature,
        Self::English,
        Self::Azerbaijani,
        Self::Russian,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::History => "History",
            Self::Geography => "Geography",
            Self::Literature => "Literature",
            Self::English => "English",
            Self::Azerbaijani => "Azerbaijani",
            Self::Russian => "Russian",
            Self::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw.trim()))
            .unwrap_or(Self::Other)
    }
}

/// Exam sector. Registration sends the numeric code, profile edits send the name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sector {
    #[default]
    Az,
    Ru,
    En,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Az, Sector::Ru, Sector::En];

    pub fn code(self) -> u8 {
        match self {
            Self::Az => 0,
            Self::Ru => 1,
            Self::En => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Az => "Azerbaijani",
            Self::Ru => "Russian",
            Self::En => "English",
        }
    }

    pub fn from_name(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Backend role ids carried in the access token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoleType {
    Admin = 1,
    Teacher = 2,
    Student = 3,
}

impl RoleType {
    /// Accepts either the numeric id or the role name, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "admin" => Some(Self::Admin),
            "2" | "teacher" => Some(Self::Teacher),
            "3" | "student" => Some(Self::Student),
            _ => None,
        }
    }
}
