//! Lesson watch-progress tracking.
//!
//! SYSTEM CONTEXT
//! ==============
//! The lesson player feeds every `timeupdate` event into a
//! [`ProgressTracker`]. The tracker decides when to persist the playback
//! position and when the lesson counts as watched; the player performs the
//! resulting `POST /lesson/{id}/watch` and reports back through
//! [`ProgressTracker::finish_request`].
//!
//! DESIGN
//! ======
//! A single in-flight guard serializes saves. A failed save leaves
//! `last_saved` untouched so the next tick naturally retries; there is no
//! other retry policy. Completion wins over a plain position save when both
//! are due on the same tick.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::net::types::{Lesson, LessonProgress, ProgressMap, WatchInput};

/// Percent watched at which a lesson is marked completed.
pub const COMPLETION_PERCENT: u8 = 90;

/// Seconds of playback between position saves.
pub const SAVE_INTERVAL_SECS: f64 = 5.0;

/// Request the player should issue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProgressAction {
    SaveProgress { position: f64 },
    MarkCompleted { position: f64 },
}

impl ProgressAction {
    pub fn position(self) -> f64 {
        match self {
            Self::SaveProgress { position } | Self::MarkCompleted { position } => position,
        }
    }
}

/// Per-lesson progress state machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressTracker {
    completed: bool,
    last_saved: f64,
    percent: u8,
    in_flight: Option<ProgressAction>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the backend's stored progress for this lesson.
    pub fn resume(saved: Option<&LessonProgress>) -> Self {
        saved.map_or_else(Self::default, |p| Self {
            completed: p.completed,
            last_saved: if p.progress.is_finite() { p.progress.max(0.0) } else { 0.0 },
            ..Self::default()
        })
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Percent watched as of the last time update.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn last_saved(&self) -> f64 {
        self.last_saved
    }

    /// Feed a `timeupdate`. Returns at most one action.
    pub fn on_time_update(&mut self, current: f64, duration: f64) -> Vec<ProgressAction> {
        self.percent = watch_percent(current, duration);
        if !(duration.is_finite() && duration > 0.0) || !current.is_finite() {
            return Vec::new();
        }
        if self.in_flight.is_some() {
            return Vec::new();
        }
        if self.percent >= COMPLETION_PERCENT && !self.completed {
            return vec![ProgressAction::MarkCompleted { position: current }];
        }
        if current - self.last_saved >= SAVE_INTERVAL_SECS {
            return vec![ProgressAction::SaveProgress { position: current }];
        }
        Vec::new()
    }

    /// Action for the manual "mark as watched" button, if one is needed.
    pub fn request_completion(&self, position: f64) -> Option<ProgressAction> {
        (!self.completed && self.in_flight.is_none())
            .then_some(ProgressAction::MarkCompleted { position })
    }

    /// Claim the in-flight slot for `action`. Returns `false` if a request is
    /// already pending.
    pub fn begin_request(&mut self, action: ProgressAction) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.in_flight = Some(action);
        true
    }

    /// Release the in-flight slot, applying the action's effect on success.
    pub fn finish_request(&mut self, ok: bool) {
        let Some(action) = self.in_flight.take() else {
            return;
        };
        if !ok {
            return;
        }
        self.last_saved = action.position();
        if matches!(action, ProgressAction::MarkCompleted { .. }) {
            self.mark_completed();
        }
    }

    /// Record completion. Idempotent.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Request body for `action`. Completion is sticky once reached.
    pub fn watch_input(&self, action: ProgressAction) -> WatchInput {
        WatchInput {
            progress: action.position(),
            completed: self.completed || matches!(action, ProgressAction::MarkCompleted { .. }),
        }
    }
}

/// Course progress fetched for one lesson selection.
///
/// Every selection fetches afresh, so returning to a lesson resumes from what
/// the backend stored during the earlier visit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionProgress {
    lesson_id: String,
    map: ProgressMap,
}

impl SelectionProgress {
    pub fn new(lesson_id: impl Into<String>, map: ProgressMap) -> Self {
        Self { lesson_id: lesson_id.into(), map }
    }

    pub fn is_for(&self, lesson_id: &str) -> bool {
        self.lesson_id == lesson_id
    }

    /// Stored progress for the selected lesson.
    pub fn saved(&self) -> Option<LessonProgress> {
        self.map.get(&self.lesson_id).cloned()
    }
}

/// Whether selecting `selected` needs a progress fetch given what is loaded.
pub fn needs_progress_fetch(loaded: Option<&SelectionProgress>, selected: Option<&str>) -> bool {
    match selected {
        None => false,
        Some(id) => !loaded.is_some_and(|p| p.is_for(id)),
    }
}

/// `floor(current / duration * 100)`, clamped to `0..=100`. Invalid input is 0.
pub fn watch_percent(current: f64, duration: f64) -> u8 {
    if !duration.is_finite() || duration <= 0.0 || !current.is_finite() {
        return 0;
    }
    let percent = (current / duration * 100.0).floor().clamp(0.0, 100.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = percent as u8;
    percent
}

/// Sort by `order`, keeping backend order for ties.
pub fn sort_lessons(mut lessons: Vec<Lesson>) -> Vec<Lesson> {
    lessons.sort_by_key(|l| l.order);
    lessons
}

/// The lesson after `current_id` in an already ordered list.
pub fn next_lesson<'a>(ordered: &'a [Lesson], current_id: &str) -> Option<&'a Lesson> {
    let index = ordered.iter().position(|l| l.id == current_id)?;
    ordered.get(index + 1)
}

/// Percent of `lessons` marked completed in `progress`, floored.
pub fn course_completion(lessons: &[Lesson], progress: &ProgressMap) -> u8 {
    if lessons.is_empty() {
        return 0;
    }
    let done = lessons
        .iter()
        .filter(|l| progress.get(&l.id).is_some_and(|p| p.completed))
        .count();
    u8::try_from(done * 100 / lessons.len()).unwrap_or(100)
}
