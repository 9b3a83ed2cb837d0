use super::*;

// =============================================================
// Paths and query strings
// =============================================================

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/course/c-1"), "/api/v1/course/c-1");
}

#[test]
fn with_query_encodes_and_skips_blank_values() {
    assert_eq!(
        with_query("/quiz", &[("courseId", Some("c 1&x")), ("lessonId", None)]),
        "/quiz?courseId=c%201%26x"
    );
    assert_eq!(with_query("/quiz", &[("courseId", Some("  ")), ("lessonId", None)]), "/quiz");
    assert_eq!(
        with_query("/quiz", &[("courseId", Some("c1")), ("lessonId", Some("l1"))]),
        "/quiz?courseId=c1&lessonId=l1"
    );
}

// =============================================================
// Response interpretation
// =============================================================

#[test]
fn interpret_passes_success_through() {
    let resp = RawResponse { status: 201, body: "ok".to_owned() };
    assert_eq!(interpret(resp.clone()), Ok(resp));
}

#[test]
fn interpret_classifies_failures() {
    let resp = RawResponse { status: 404, body: String::new() };
    assert_eq!(interpret(resp), Err(ApiError::NotFound));
}

#[test]
fn decode_list_treats_no_content_as_empty() {
    let empty = RawResponse { status: 204, body: String::new() };
    assert_eq!(decode_list::<String>(&empty), Ok(Vec::new()));
    let blank = RawResponse { status: 200, body: "  ".to_owned() };
    assert_eq!(decode_list::<String>(&blank), Ok(Vec::new()));
}

#[test]
fn decode_list_reads_arrays() {
    let resp = RawResponse { status: 200, body: r#"["a","b"]"#.to_owned() };
    assert_eq!(decode_list::<String>(&resp), Ok(vec!["a".to_owned(), "b".to_owned()]));
}

#[test]
fn decode_reports_mismatched_shapes() {
    assert!(matches!(decode::<Vec<String>>("{}"), Err(ApiError::Decode(_))));
}

#[test]
fn failed_body_read_is_a_network_error_not_an_empty_list() {
    let read: Result<String, &str> = Err("body stream aborted");
    let result = completed_response(200, read).and_then(interpret).and_then(|r| decode_list::<String>(&r));
    assert_eq!(result, Err(ApiError::Network("body stream aborted".to_owned())));
}

#[test]
fn completed_response_keeps_status_and_body() {
    let raw = completed_response::<&str>(204, Ok(String::new())).unwrap();
    assert_eq!(raw, RawResponse { status: 204, body: String::new() });
    assert_eq!(decode_list::<String>(&raw).unwrap(), Vec::<String>::new());
}

// =============================================================
// Bodies
// =============================================================

#[test]
fn form_body_keeps_field_order_and_skips_missing_files() {
    let form = FormBody::new()
        .text("Username", "aysel")
        .text("Password", "secret")
        .file("ProfilePicture", None);
    assert_eq!(form.field_names(), vec!["Username", "Password"]);
    assert_eq!(form.field("Password"), Some("secret"));
    assert_eq!(form.file_count(), 0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn form_body_counts_attached_files() {
    let form = FormBody::new().file("Image", Some(FileHandle));
    assert_eq!(form.file_count(), 1);
}

#[test]
fn json_body_serializes_value() {
    let Body::Json(raw) = Body::json(&serde_json::json!({"token": "r"})).unwrap() else {
        panic!("expected json body");
    };
    assert_eq!(raw, r#"{"token":"r"}"#);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_are_unavailable_outside_the_browser() {
    let result =
        futures::executor::block_on(fetch_text(HttpMethod::Get, "/course", Body::Empty));
    assert_eq!(result, Err(ApiError::Unavailable));
}
