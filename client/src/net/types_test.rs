use super::*;

// =============================================================
// Entity decoding
// =============================================================

#[test]
fn token_pair_decodes_camel_case() {
    let pair: TokenPair =
        serde_json::from_str(r#"{"accessToken":"a.b.c","refreshToken":"r-1"}"#).unwrap();
    assert_eq!(pair.access_token, "a.b.c");
    assert_eq!(pair.refresh_token, "r-1");
}

#[test]
fn refresh_response_tolerates_empty_object() {
    let resp: RefreshResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, RefreshResponse::default());
}

#[test]
fn lesson_defaults_missing_optional_fields() {
    let lesson: Lesson = serde_json::from_str(r#"{"id":"l-1","title":"Intro"}"#).unwrap();
    assert_eq!(lesson.order, 0);
    assert_eq!(lesson.video_url, None);
    assert!(lesson.course_id.is_empty());
}

#[test]
fn course_decodes_subject_name() {
    let course: Course =
        serde_json::from_str(r#"{"id":"c-1","title":"Algebra","subject":"Physics"}"#).unwrap();
    assert_eq!(course.subject, SubjectType::Physics);
}

#[test]
fn unknown_subject_decodes_as_other() {
    let course: Course =
        serde_json::from_str(r#"{"id":"c-1","title":"Art","subject":"Painting"}"#).unwrap();
    assert_eq!(course.subject, SubjectType::Other);
}

#[test]
fn progress_map_decodes_keyed_object() {
    let map: ProgressMap = serde_json::from_str(
        r#"{"l-1":{"lessonId":"l-1","completed":true,"progress":42.5},"l-2":{"completed":false}}"#,
    )
    .unwrap();
    assert!(map["l-1"].completed);
    assert!((map["l-1"].progress - 42.5).abs() < f64::EPSILON);
    assert!(!map["l-2"].completed);
}

#[test]
fn me_decodes_profile_fields() {
    let me: Me = serde_json::from_str(
        r#"{"id":"u-1","username":"aysel","firstName":"Aysel","lastName":"M","email":"a@b.az",
            "phoneNumber":"501234567","group":2,"sector":"Russian","profilePictureUrl":null}"#,
    )
    .unwrap();
    assert_eq!(me.group, 2);
    assert_eq!(Sector::from_name(&me.sector), Some(Sector::Ru));
    assert_eq!(me.profile_picture_url, None);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn quiz_input_omits_missing_lesson_and_question_ids() {
    let input = QuizInput {
        title: "Q".to_owned(),
        description: String::new(),
        course_id: "c-1".to_owned(),
        lesson_id: None,
        questions: vec![QuizQuestion {
            id: None,
            text: "2+2?".to_owned(),
            options: vec!["3".to_owned(), "4".to_owned()],
            correct_option_index: 1,
        }],
        time_limit: Some(30),
        passing_score: 70,
    };
    let value = serde_json::to_value(&input).unwrap();
    assert!(value.get("lessonId").is_none());
    assert!(value["questions"][0].get("id").is_none());
    assert_eq!(value["questions"][0]["correctOptionIndex"], 1);
    assert_eq!(value["passingScore"], 70);
}

#[test]
fn watch_input_serializes_progress_and_completed() {
    let body = serde_json::to_value(WatchInput { progress: 12.0, completed: false }).unwrap();
    assert_eq!(body, serde_json::json!({"progress": 12.0, "completed": false}));
}

#[test]
fn package_input_uses_camel_case_course_ids() {
    let body = serde_json::to_value(PackageInput {
        title: "Full".to_owned(),
        description: String::new(),
        price: 49.0,
        discount: 0.0,
        duration: 30,
        status: "active".to_owned(),
        course_ids: vec!["c-1".to_owned()],
    })
    .unwrap();
    assert_eq!(body["courseIds"], serde_json::json!(["c-1"]));
}

// =============================================================
// Enums
// =============================================================

#[test]
fn sector_codes_match_backend_numbering() {
    assert_eq!(Sector::Az.code(), 0);
    assert_eq!(Sector::Ru.code(), 1);
    assert_eq!(Sector::En.code(), 2);
    assert_eq!(Sector::from_code(2), Some(Sector::En));
    assert_eq!(Sector::from_code(7), None);
}

#[test]
fn subject_parse_is_case_insensitive() {
    assert_eq!(SubjectType::parse("biology"), SubjectType::Biology);
    assert_eq!(SubjectType::parse("??"), SubjectType::Other);
}

#[test]
fn role_parse_accepts_ids_and_names() {
    assert_eq!(RoleType::parse("1"), Some(RoleType::Admin));
    assert_eq!(RoleType::parse("Student"), Some(RoleType::Student));
    assert_eq!(RoleType::parse("guest"), None);
}
