//! Admin console forms for courses, lessons, quizzes and packages.
//!
//! DESIGN
//! ======
//! Numeric inputs are kept as the raw text the user typed and parsed only on
//! submit, so a half-typed value never fights the input element. Each form
//! converts into exactly the body its endpoint takes: a [`FormBody`] for the
//! multipart course and lesson writes, a [`QuizInput`] or [`PackageInput`]
//! for the JSON ones.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use super::{FormError, require};
use crate::net::api::{FileHandle, FormBody};
use crate::net::types::{
    Course, Lesson, Package, PackageInput, Quiz, QuizInput, QuizQuestion, SubjectType,
};

/// Options a fresh question starts with.
pub const DEFAULT_OPTION_COUNT: usize = 4;

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, FormError> {
    raw.trim().parse().map_err(|_| FormError::Key("invalidNumber"))
}

fn require_course(course_id: &str) -> Result<String, FormError> {
    require(course_id, "course").map_err(|_| FormError::Key("selectCourse"))
}

// ---- course ----

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    pub subject: SubjectType,
}

impl From<&Course> for CourseForm {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
            subject: course.subject,
        }
    }
}

impl CourseForm {
    /// Multipart body for `POST /course` or `PUT /course/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Required`] for a blank title or description.
    pub fn to_form(&self, image: Option<FileHandle>) -> Result<FormBody, FormError> {
        let title = require(&self.title, "title")?;
        let description = require(&self.description, "description")?;
        Ok(FormBody::new()
            .text("Title", title)
            .text("Description", description)
            .text("Subject", self.subject.as_str())
            .file("Image", image))
    }
}

// ---- lesson ----

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonForm {
    pub title: String,
    pub description: String,
    pub course_id: String,
    /// Markdown body.
    pub content: String,
    pub transcript: String,
    /// Raw order input.
    pub order: String,
}

impl Default for LessonForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            course_id: String::new(),
            content: String::new(),
            transcript: String::new(),
            order: "0".to_owned(),
        }
    }
}

impl From<&Lesson> for LessonForm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            course_id: lesson.course_id.clone(),
            content: lesson.content.clone().unwrap_or_default(),
            transcript: lesson.transcript.clone().unwrap_or_default(),
            order: lesson.order.to_string(),
        }
    }
}

impl LessonForm {
    /// Multipart body for `POST /lesson` or `PUT /lesson/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the first failure among title, description, course selection
    /// and order (a non-negative integer).
    pub fn to_form(
        &self,
        video: Option<FileHandle>,
        image: Option<FileHandle>,
    ) -> Result<FormBody, FormError> {
        let title = require(&self.title, "title")?;
        let description = require(&self.description, "description")?;
        let course_id = require_course(&self.course_id)?;
        let order: i32 = parse_number(&self.order)?;
        if order < 0 {
            return Err(FormError::Key("orderMustBeNonNegative"));
        }
        Ok(FormBody::new()
            .text("Title", title)
            .text("Description", description)
            .text("CourseId", course_id)
            .text("Content", self.content.trim())
            .text("Transcript", self.transcript.trim())
            .text("Order", order.to_string())
            .file("Video", video)
            .file("Image", image))
    }
}

// ---- quiz ----

/// One editable question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: Option<String>,
    pub text: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            id: None,
            text: String::new(),
            options: vec![String::new(); DEFAULT_OPTION_COUNT],
            correct: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizForm {
    pub title: String,
    pub description: String,
    pub course_id: String,
    /// Empty when the quiz is not tied to a lesson.
    pub lesson_id: String,
    /// Minutes; blank means no limit.
    pub time_limit: String,
    pub passing_score: String,
    pub questions: Vec<QuestionDraft>,
}

impl Default for QuizForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            course_id: String::new(),
            lesson_id: String::new(),
            time_limit: "30".to_owned(),
            passing_score: "70".to_owned(),
            questions: vec![QuestionDraft::default()],
        }
    }
}

impl From<&Quiz> for QuizForm {
    fn from(quiz: &Quiz) -> Self {
        Self {
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            course_id: quiz.course_id.clone(),
            lesson_id: quiz.lesson_id.clone().unwrap_or_default(),
            time_limit: quiz.time_limit.map(|m| m.to_string()).unwrap_or_default(),
            passing_score: quiz.passing_score.to_string(),
            questions: quiz
                .questions
                .iter()
                .map(|q| QuestionDraft {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    options: q.options.clone(),
                    correct: q.correct_option_index,
                })
                .collect(),
        }
    }
}

impl QuizForm {
    pub fn add_question(&mut self) {
        self.questions.push(QuestionDraft::default());
    }

    pub fn remove_question(&mut self, index: usize) {
        if index < self.questions.len() {
            self.questions.remove(index);
        }
    }

    pub fn set_question_text(&mut self, index: usize, text: String) {
        if let Some(q) = self.questions.get_mut(index) {
            q.text = text;
        }
    }

    pub fn set_option(&mut self, question: usize, option: usize, text: String) {
        if let Some(slot) = self.questions.get_mut(question).and_then(|q| q.options.get_mut(option)) {
            *slot = text;
        }
    }

    pub fn set_correct(&mut self, question: usize, option: usize) {
        if let Some(q) = self.questions.get_mut(question) {
            q.correct = option;
        }
    }

    /// JSON body for `POST /quiz` or `PUT /quiz/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the first failure: title, course, numeric settings, then the
    /// questions in order. Question and option numbers in the error are
    /// 1-based.
    pub fn to_input(&self) -> Result<QuizInput, FormError> {
        let title = require(&self.title, "title")?;
        let course_id = require_course(&self.course_id)?;
        let time_limit = match self.time_limit.trim() {
            "" => None,
            raw => Some(parse_number::<u32>(raw)?),
        };
        let passing_score: u32 = parse_number(&self.passing_score)?;
        if passing_score > 100 {
            return Err(FormError::Key("invalidNumber"));
        }
        if self.questions.is_empty() {
            return Err(FormError::Key("quizNeedsQuestion"));
        }

        let mut questions = Vec::with_capacity(self.questions.len());
        for (qi, draft) in self.questions.iter().enumerate() {
            let text = draft.text.trim();
            if text.is_empty() {
                return Err(FormError::QuestionText { question: qi + 1 });
            }
            let mut options = Vec::with_capacity(draft.options.len());
            for (oi, option) in draft.options.iter().enumerate() {
                let option = option.trim();
                if option.is_empty() {
                    return Err(FormError::QuestionOption { question: qi + 1, option: oi + 1 });
                }
                options.push(option.to_owned());
            }
            if draft.correct >= options.len() {
                return Err(FormError::CorrectOption { question: qi + 1 });
            }
            questions.push(QuizQuestion {
                id: draft.id.clone(),
                text: text.to_owned(),
                options,
                correct_option_index: draft.correct,
            });
        }

        let lesson_id = self.lesson_id.trim();
        Ok(QuizInput {
            title,
            description: self.description.trim().to_owned(),
            course_id,
            lesson_id: (!lesson_id.is_empty()).then(|| lesson_id.to_owned()),
            questions,
            time_limit,
            passing_score,
        })
    }
}

// ---- package ----

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub discount: String,
    /// Days.
    pub duration: String,
    pub status: String,
    pub course_ids: Vec<String>,
}

impl Default for PackageForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: "0".to_owned(),
            discount: "0".to_owned(),
            duration: "30".to_owned(),
            status: "active".to_owned(),
            course_ids: Vec::new(),
        }
    }
}

impl From<&Package> for PackageForm {
    fn from(package: &Package) -> Self {
        Self {
            title: package.title.clone(),
            description: package.description.clone(),
            price: package.price.to_string(),
            discount: package.discount.to_string(),
            duration: package.duration.unwrap_or(30).to_string(),
            status: package.status.clone().unwrap_or_else(|| "active".to_owned()),
            course_ids: package.course_ids.clone(),
        }
    }
}

impl PackageForm {
    /// Add or remove `course_id` from the selection, keeping pick order.
    pub fn toggle_course(&mut self, course_id: &str) {
        if let Some(pos) = self.course_ids.iter().position(|id| id == course_id) {
            self.course_ids.remove(pos);
        } else {
            self.course_ids.push(course_id.to_owned());
        }
    }

    pub fn has_course(&self, course_id: &str) -> bool {
        self.course_ids.iter().any(|id| id == course_id)
    }

    /// JSON body for `POST /package` or `PUT /package/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the first failure: title, description, numbers (price must
    /// be non-negative), then an empty course selection.
    pub fn to_input(&self) -> Result<PackageInput, FormError> {
        let title = require(&self.title, "title")?;
        let description = require(&self.description, "description")?;
        let price: f64 = parse_number(&self.price)?;
        if !price.is_finite() {
            return Err(FormError::Key("invalidNumber"));
        }
        if price < 0.0 {
            return Err(FormError::Key("priceMustBeNonNegative"));
        }
        let discount: f64 = parse_number(&self.discount)?;
        if !discount.is_finite() || discount < 0.0 {
            return Err(FormError::Key("invalidNumber"));
        }
        let duration: u32 = parse_number(&self.duration)?;
        if self.course_ids.is_empty() {
            return Err(FormError::Key("packageNeedsCourse"));
        }
        let status = match self.status.trim() {
            "" => "active".to_owned(),
            s => s.to_owned(),
        };
        Ok(PackageInput {
            title,
            description,
            price,
            discount,
            duration,
            status,
            course_ids: self.course_ids.clone(),
        })
    }
}
