//! Quiz-taking session state.
//!
//! One question is shown at a time. Navigation forward requires an answer for
//! the current question, and the quiz can only be submitted once every
//! question is answered.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use crate::net::types::{Quiz, QuizQuestion};

/// Outcome of a submitted quiz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizResult {
    pub correct: usize,
    pub total: usize,
    /// `correct / total * 100`, unrounded.
    pub score: f64,
    pub passed: bool,
}

impl QuizResult {
    /// Score rounded for display.
    pub fn display_score(&self) -> i64 {
        #[allow(clippy::cast_possible_truncation)]
        let rounded = self.score.round() as i64;
        rounded
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    quiz: Quiz,
    current: usize,
    answers: Vec<Option<usize>>,
    result: Option<QuizResult>,
}

impl QuizSession {
    pub fn new(quiz: Quiz) -> Self {
        let answers = vec![None; quiz.questions.len()];
        Self { quiz, current: 0, answers, result: None }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn total(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.quiz.questions.get(self.current)
    }

    /// The option chosen for the current question.
    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Choose `option` for the current question. Ignored after submission or
    /// when `option` is out of range.
    pub fn select(&mut self, option: usize) {
        if self.result.is_some() {
            return;
        }
        let Some(question) = self.quiz.questions.get(self.current) else {
            return;
        };
        if option < question.options.len() {
            self.answers[self.current] = Some(option);
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_answer().is_some() && self.current + 1 < self.total()
    }

    pub fn prev(&mut self) {
        if self.can_go_prev() {
            self.current -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.current += 1;
        }
    }

    pub fn all_answered(&self) -> bool {
        !self.answers.is_empty() && self.answers.iter().all(Option::is_some)
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total()
    }

    /// Score the quiz. Returns `None` until every question is answered.
    pub fn submit(&mut self) -> Option<QuizResult> {
        if !self.all_answered() {
            return None;
        }
        let correct = self
            .quiz
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| **a == Some(q.correct_option_index))
            .count();
        let result = score(correct, self.total(), self.quiz.passing_score);
        self.result = Some(result);
        Some(result)
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.result
    }

    /// Clear answers and start over from the first question.
    pub fn retry(&mut self) {
        self.answers = vec![None; self.total()];
        self.current = 0;
        self.result = None;
    }
}

/// Build a result from raw counts. An empty quiz scores 0.
pub fn score(correct: usize, total: usize, passing_score: u32) -> QuizResult {
    #[allow(clippy::cast_precision_loss)]
    let score = if total == 0 { 0.0 } else { correct as f64 / total as f64 * 100.0 };
    QuizResult { correct, total, score, passed: score >= f64::from(passing_score) }
}

/// Option label: A, B, C, …
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}
