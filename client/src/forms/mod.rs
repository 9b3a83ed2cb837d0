//! Client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages keep raw field values in signals and run them through these
//! validators before any request goes out. Failures are [`FormError`]s,
//! rendered in the active language by [`FormError::localized`].

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod admin;
pub mod auth;

use crate::i18n::{Lang, t};

/// Validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    /// A message that is a translation key on its own.
    Key(&'static str),
    /// The field labelled by this translation key is blank.
    Required(&'static str),
    /// 1-based question number with blank text.
    QuestionText { question: usize },
    /// 1-based question and option numbers with a blank option.
    QuestionOption { question: usize, option: usize },
    /// 1-based question number whose correct option is out of range.
    CorrectOption { question: usize },
}

impl FormError {
    pub fn localized(&self, lang: Lang) -> String {
        match self {
            Self::Key(key) => t(lang, key).to_owned(),
            Self::Required(label) => format!("{} {}", t(lang, label), t(lang, "fieldRequired")),
            Self::QuestionText { question } => {
                format!("{} {question} {}", t(lang, "question"), t(lang, "cannotBeEmpty"))
            }
            Self::QuestionOption { question, option } => format!(
                "{} {question}, {} {option} {}",
                t(lang, "question"),
                t(lang, "option"),
                t(lang, "cannotBeEmpty")
            ),
            Self::CorrectOption { question } => {
                format!("{} {question} {}", t(lang, "question"), t(lang, "correctOptionOutOfRange"))
            }
        }
    }
}

/// Trimmed `value`, or [`FormError::Required`] naming `label` when blank.
///
/// # Errors
///
/// Returns [`FormError::Required`] for blank input.
pub fn require(value: &str, label: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(label))
    } else {
        Ok(trimmed.to_owned())
    }
}
