use super::*;

#[test]
fn lesson_scoped_paths_format_expected_urls() {
    assert_eq!(watch_path("l-1"), "/lesson/l-1/watch");
    assert_eq!(comments_path("l-1"), "/lesson/l-1/comments");
    assert_eq!(course_progress_path("c-1"), "/lesson/course/c-1/progress");
}

#[test]
fn comment_path_formats_expected_url() {
    assert_eq!(comment_path("cm-3"), "/comment/cm-3");
}

#[test]
fn new_comment_body_has_only_text() {
    let body = serde_json::to_value(NewComment { text: "Great lesson" }).unwrap();
    assert_eq!(body, serde_json::json!({"text": "Great lesson"}));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ask_is_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(ask("demo", "hello"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
