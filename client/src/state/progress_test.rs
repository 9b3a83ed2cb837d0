use super::*;

// =============================================================
// Helpers
// =============================================================

fn lesson(id: &str, order: i32) -> Lesson {
    Lesson {
        id: id.to_owned(),
        title: format!("Lesson {id}"),
        description: String::new(),
        video_url: None,
        order,
        transcript: None,
        content: None,
        image_url: None,
        course_id: "c-1".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

/// Run `action` through a successful request cycle.
fn complete(tracker: &mut ProgressTracker, action: ProgressAction) {
    assert!(tracker.begin_request(action));
    tracker.finish_request(true);
}

// =============================================================
// watch_percent
// =============================================================

#[test]
fn watch_percent_floors() {
    assert_eq!(watch_percent(44.9, 100.0), 44);
    assert_eq!(watch_percent(1.0, 3.0), 33);
}

#[test]
fn watch_percent_clamps_and_rejects_bad_input() {
    assert_eq!(watch_percent(150.0, 100.0), 100);
    assert_eq!(watch_percent(-5.0, 100.0), 0);
    assert_eq!(watch_percent(10.0, 0.0), 0);
    assert_eq!(watch_percent(10.0, f64::NAN), 0);
    assert_eq!(watch_percent(10.0, f64::INFINITY), 0);
}

// =============================================================
// on_time_update
// =============================================================

#[test]
fn no_action_for_invalid_duration() {
    let mut tracker = ProgressTracker::new();
    assert!(tracker.on_time_update(30.0, f64::NAN).is_empty());
    assert!(tracker.on_time_update(30.0, 0.0).is_empty());
    assert_eq!(tracker.percent(), 0);
}

#[test]
fn saves_every_five_seconds_of_position() {
    let mut tracker = ProgressTracker::new();
    assert!(tracker.on_time_update(4.9, 100.0).is_empty());
    let actions = tracker.on_time_update(5.0, 100.0);
    assert_eq!(actions, vec![ProgressAction::SaveProgress { position: 5.0 }]);

    complete(&mut tracker, actions[0]);
    assert!((tracker.last_saved() - 5.0).abs() < f64::EPSILON);
    assert!(tracker.on_time_update(9.0, 100.0).is_empty());
    assert_eq!(
        tracker.on_time_update(10.0, 100.0),
        vec![ProgressAction::SaveProgress { position: 10.0 }]
    );
}

#[test]
fn marks_completed_once_at_ninety_percent() {
    let mut tracker = ProgressTracker::new();
    assert_eq!(
        tracker.on_time_update(89.9, 100.0),
        vec![ProgressAction::SaveProgress { position: 89.9 }]
    );
    let actions = tracker.on_time_update(90.0, 100.0);
    assert_eq!(actions, vec![ProgressAction::MarkCompleted { position: 90.0 }]);

    complete(&mut tracker, actions[0]);
    assert!(tracker.is_completed());
    assert!(tracker.on_time_update(91.0, 100.0).is_empty());
    assert_eq!(
        tracker.on_time_update(95.0, 100.0),
        vec![ProgressAction::SaveProgress { position: 95.0 }]
    );
}

#[test]
fn nothing_is_emitted_while_a_request_is_in_flight() {
    let mut tracker = ProgressTracker::new();
    let actions = tracker.on_time_update(6.0, 100.0);
    assert!(tracker.begin_request(actions[0]));
    assert!(tracker.is_in_flight());
    assert!(tracker.on_time_update(95.0, 100.0).is_empty());
    assert!(!tracker.begin_request(ProgressAction::SaveProgress { position: 95.0 }));
}

#[test]
fn failed_save_is_retried_on_next_tick() {
    let mut tracker = ProgressTracker::new();
    let actions = tracker.on_time_update(6.0, 100.0);
    assert!(tracker.begin_request(actions[0]));
    tracker.finish_request(false);
    assert!(!tracker.is_in_flight());
    assert!(tracker.last_saved().abs() < f64::EPSILON);
    assert_eq!(
        tracker.on_time_update(6.5, 100.0),
        vec![ProgressAction::SaveProgress { position: 6.5 }]
    );
}

#[test]
fn failed_completion_is_retried() {
    let mut tracker = ProgressTracker::new();
    let actions = tracker.on_time_update(92.0, 100.0);
    assert!(tracker.begin_request(actions[0]));
    tracker.finish_request(false);
    assert!(!tracker.is_completed());
    assert_eq!(
        tracker.on_time_update(93.0, 100.0),
        vec![ProgressAction::MarkCompleted { position: 93.0 }]
    );
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut tracker = ProgressTracker::new();
    tracker.finish_request(true);
    assert_eq!(tracker, ProgressTracker::new());
}

// =============================================================
// Manual completion and resume
// =============================================================

#[test]
fn mark_completed_is_idempotent() {
    let mut tracker = ProgressTracker::new();
    tracker.mark_completed();
    let once = tracker.clone();
    tracker.mark_completed();
    assert_eq!(tracker, once);
    assert_eq!(tracker.request_completion(10.0), None);
}

#[test]
fn request_completion_respects_in_flight_guard() {
    let mut tracker = ProgressTracker::new();
    assert_eq!(
        tracker.request_completion(3.0),
        Some(ProgressAction::MarkCompleted { position: 3.0 })
    );
    assert!(tracker.begin_request(ProgressAction::SaveProgress { position: 5.0 }));
    assert_eq!(tracker.request_completion(3.0), None);
}

#[test]
fn resume_seeds_from_saved_progress() {
    let saved = LessonProgress {
        lesson_id: "l-1".to_owned(),
        completed: true,
        progress: 42.0,
        last_watched_at: None,
    };
    let mut tracker = ProgressTracker::resume(Some(&saved));
    assert!(tracker.is_completed());
    assert!(tracker.on_time_update(46.0, 100.0).is_empty());
    assert_eq!(ProgressTracker::resume(None), ProgressTracker::new());
}

#[test]
fn watch_input_keeps_completion_sticky() {
    let mut tracker = ProgressTracker::new();
    let save = ProgressAction::SaveProgress { position: 12.0 };
    assert_eq!(tracker.watch_input(save), WatchInput { progress: 12.0, completed: false });
    tracker.mark_completed();
    assert_eq!(tracker.watch_input(save), WatchInput { progress: 12.0, completed: true });
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn sort_lessons_is_stable_by_order() {
    let sorted = sort_lessons(vec![lesson("b", 2), lesson("a", 1), lesson("c", 2), lesson("z", 0)]);
    let ids: Vec<&str> = sorted.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "b", "c"]);
}

#[test]
fn next_lesson_returns_following_entry() {
    let ordered = vec![lesson("a", 1), lesson("b", 2), lesson("c", 3)];
    assert_eq!(next_lesson(&ordered, "a").map(|l| l.id.as_str()), Some("b"));
    assert_eq!(next_lesson(&ordered, "c"), None);
    assert_eq!(next_lesson(&ordered, "missing"), None);
}

#[test]
fn course_completion_counts_completed_lessons() {
    let lessons = vec![lesson("a", 1), lesson("b", 2), lesson("c", 3)];
    let mut progress = ProgressMap::new();
    progress.insert(
        "a".to_owned(),
        LessonProgress { lesson_id: "a".to_owned(), completed: true, progress: 0.0, last_watched_at: None },
    );
    progress.insert(
        "b".to_owned(),
        LessonProgress { lesson_id: "b".to_owned(), completed: false, progress: 30.0, last_watched_at: None },
    );
    assert_eq!(course_completion(&lessons, &progress), 33);
    assert_eq!(course_completion(&[], &progress), 0);
}

// =============================================================
// SelectionProgress
// =============================================================

fn progress_entry(id: &str, completed: bool, position: f64) -> (String, LessonProgress) {
    (
        id.to_owned(),
        LessonProgress { lesson_id: id.to_owned(), completed, progress: position, last_watched_at: None },
    )
}

#[test]
fn revisiting_a_lesson_in_the_same_course_refetches() {
    let first_visit = SelectionProgress::new("a", ProgressMap::from([progress_entry("a", false, 10.0)]));
    assert!(!needs_progress_fetch(Some(&first_visit), Some("a")));

    // Switching to a sibling lesson drops the old snapshot.
    assert!(needs_progress_fetch(Some(&first_visit), Some("b")));
    let sibling = SelectionProgress::new("b", first_visit.map.clone());

    // Coming back to "a" must not reuse the first visit's map.
    assert!(needs_progress_fetch(Some(&sibling), Some("a")));
    let revisit = SelectionProgress::new("a", ProgressMap::from([progress_entry("a", true, 95.0)]));
    let tracker = ProgressTracker::resume(revisit.saved().as_ref());
    assert!(tracker.is_completed());
    assert!((tracker.last_saved() - 95.0).abs() < f64::EPSILON);
}

#[test]
fn no_selection_needs_no_fetch() {
    assert!(!needs_progress_fetch(None, None));
    assert!(needs_progress_fetch(None, Some("a")));
}

#[test]
fn saved_is_none_for_unwatched_lesson() {
    let progress = SelectionProgress::new("c", ProgressMap::from([progress_entry("a", true, 1.0)]));
    assert!(progress.is_for("c"));
    assert_eq!(progress.saved(), None);
}
