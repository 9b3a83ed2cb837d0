//! Lesson-assistant chat state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The floating chat widget on the landing page and dashboard keeps one
//! [`ChatState`]. Questions go to `/openai/ask` through [`ask_assistant`];
//! every outcome, including failures, is appended as a bot message.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::i18n::{Lang, t};
use crate::net::error::ApiError;
use crate::net::types::Lesson;
use crate::net::{api_catalog, api_student};
use crate::state::progress::sort_lessons;
use crate::util::token::{self, TokenClaims};

/// Lesson id used by the landing-page widget before a real lesson is known.
pub const DEMO_LESSON_ID: &str = "demo";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub is_error: bool,
}

impl ChatMessage {
    fn new(sender: Sender, text: String, is_error: bool) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, text, is_error }
    }
}

/// Why a question produced no answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatError {
    /// The stored token's `exp` has passed; nothing was sent.
    SessionExpired,
    /// The demo widget could not resolve a lesson to ask about.
    NoDemoLesson,
    Api(ApiError),
}

impl ChatError {
    pub fn message(&self, lang: Lang) -> String {
        let key = match self {
            Self::SessionExpired | Self::Api(ApiError::Unauthorized) => "sessionExpired",
            Self::NoDemoLesson => "noDemoLesson",
            Self::Api(ApiError::Forbidden) => "noLessonAccess",
            Self::Api(ApiError::NotFound) => "lessonNotFound",
            Self::Api(ApiError::TooManyRequests) => "tooManyRequests",
            Self::Api(ApiError::Network(_)) => "noResponse",
            Self::Api(ApiError::Unavailable) => "unavailable",
            Self::Api(err) => {
                return err
                    .server_message()
                    .map_or_else(|| t(lang, "chatGenericError").to_owned(), str::to_owned);
            }
        };
        t(lang, key).to_owned()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub pending: bool,
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Accept a question if it is non-blank and nothing is pending. Appends
    /// the user message and returns the trimmed text to send.
    pub fn begin_question(&mut self, raw: &str) -> Option<String> {
        let question = raw.trim();
        if question.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, question.to_owned(), false));
        self.pending = true;
        Some(question.to_owned())
    }

    /// Append the answer or the mapped error and clear the pending flag.
    pub fn finish(&mut self, outcome: Result<String, ChatError>, lang: Lang) {
        let message = match outcome {
            Ok(answer) => ChatMessage::new(Sender::Bot, answer, false),
            Err(err) => ChatMessage::new(Sender::Bot, err.message(lang), true),
        };
        self.messages.push(message);
        self.pending = false;
    }
}

/// True when `claims` carry an `exp` at or before `now_secs`.
pub fn token_expired(claims: Option<&TokenClaims>, now_secs: i64) -> bool {
    claims.is_some_and(|c| c.is_expired(now_secs))
}

/// First lesson of the first course, for the landing-page widget.
async fn resolve_demo_lesson() -> Result<String, ChatError> {
    let courses = api_catalog::courses().await.map_err(|_| ChatError::NoDemoLesson)?;
    let Some(course) = courses.first() else {
        return Err(ChatError::NoDemoLesson);
    };
    let lessons = api_catalog::course_lessons(&course.id)
        .await
        .map_err(|_| ChatError::NoDemoLesson)?;
    demo_lesson_id(lessons).ok_or(ChatError::NoDemoLesson)
}

/// The lowest-`order` lesson of a course.
pub fn demo_lesson_id(lessons: Vec<Lesson>) -> Option<String> {
    sort_lessons(lessons).into_iter().next().map(|l| l.id)
}

/// Ask the assistant about `lesson_id`.
///
/// # Errors
///
/// Returns [`ChatError::SessionExpired`] without sending when the stored
/// token has expired, [`ChatError::NoDemoLesson`] when the demo lesson cannot
/// be resolved, and [`ChatError::Api`] for request failures.
pub async fn ask_assistant(lesson_id: &str, question: &str) -> Result<String, ChatError> {
    if token_expired(token::current_claims().as_ref(), token::now_secs()) {
        return Err(ChatError::SessionExpired);
    }
    let lesson_id = if lesson_id == DEMO_LESSON_ID {
        resolve_demo_lesson().await?
    } else {
        lesson_id.to_owned()
    };
    api_student::ask(&lesson_id, question)
        .await
        .map(|reply| reply.answer)
        .map_err(ChatError::Api)
}
