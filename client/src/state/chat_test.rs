use super::*;

// =============================================================
// Message flow
// =============================================================

#[test]
fn begin_question_rejects_blank_input() {
    let mut chat = ChatState::default();
    assert_eq!(chat.begin_question("   "), None);
    assert!(chat.messages.is_empty());
    assert!(!chat.pending);
}

#[test]
fn begin_question_appends_trimmed_user_message() {
    let mut chat = ChatState::default();
    assert_eq!(chat.begin_question("  What is a vector? "), Some("What is a vector?".to_owned()));
    assert!(chat.pending);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].sender, Sender::User);
    assert_eq!(chat.messages[0].text, "What is a vector?");
}

#[test]
fn begin_question_is_refused_while_pending() {
    let mut chat = ChatState::default();
    chat.begin_question("first");
    assert_eq!(chat.begin_question("second"), None);
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn finish_appends_answer_and_clears_pending() {
    let mut chat = ChatState::default();
    chat.begin_question("q");
    chat.finish(Ok("A vector has magnitude and direction.".to_owned()), Lang::En);
    assert!(!chat.pending);
    let last = chat.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert!(!last.is_error);
}

#[test]
fn finish_appends_errors_as_bot_messages() {
    let mut chat = ChatState::default();
    chat.begin_question("q");
    chat.finish(Err(ChatError::Api(ApiError::TooManyRequests)), Lang::En);
    let last = chat.messages.last().unwrap();
    assert!(last.is_error);
    assert_eq!(last.text, "Too many requests. Please try again later.");
}

#[test]
fn message_ids_are_unique() {
    let mut chat = ChatState::default();
    chat.begin_question("a");
    chat.finish(Ok("b".to_owned()), Lang::Az);
    assert_ne!(chat.messages[0].id, chat.messages[1].id);
}

#[test]
fn toggle_open_flips() {
    let mut chat = ChatState::default();
    chat.toggle_open();
    assert!(chat.open);
    chat.toggle_open();
    assert!(!chat.open);
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn status_errors_map_to_fixed_messages() {
    let en = |err: ApiError| ChatError::Api(err).message(Lang::En);
    assert_eq!(en(ApiError::Unauthorized), "Your session has expired. Please log in again.");
    assert_eq!(en(ApiError::Forbidden), "You do not have access to this lesson.");
    assert_eq!(en(ApiError::NotFound), "The lesson could not be found.");
    assert_eq!(
        en(ApiError::Network("offline".to_owned())),
        "No response from server. Please check your internet connection."
    );
}

#[test]
fn other_errors_prefer_server_message() {
    let with_message = ChatError::Api(ApiError::Server { status: 500, message: Some("Quota".to_owned()) });
    assert_eq!(with_message.message(Lang::En), "Quota");
    let bare = ChatError::Api(ApiError::Server { status: 500, message: None });
    assert_eq!(bare.message(Lang::En), "An error occurred while processing your question.");
}

#[test]
fn session_expired_matches_unauthorized_text() {
    assert_eq!(
        ChatError::SessionExpired.message(Lang::Ru),
        ChatError::Api(ApiError::Unauthorized).message(Lang::Ru)
    );
}

#[test]
fn token_expired_checks_exp_claim() {
    let claims = TokenClaims { exp: Some(100), ..TokenClaims::default() };
    assert!(token_expired(Some(&claims), 100));
    assert!(!token_expired(Some(&claims), 50));
    assert!(!token_expired(None, 1_000));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn demo_lesson_resolution_fails_outside_the_browser() {
    let result = futures::executor::block_on(ask_assistant(DEMO_LESSON_ID, "hi"));
    assert_eq!(result, Err(ChatError::NoDemoLesson));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn real_lesson_question_reports_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(ask_assistant("l-1", "hi"));
    assert_eq!(result, Err(ChatError::Api(ApiError::Unavailable)));
}

// =============================================================
// Demo lesson
// =============================================================

fn lesson(id: &str, order: i32) -> Lesson {
    Lesson {
        id: id.to_owned(),
        title: id.to_owned(),
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

#[test]
fn demo_lesson_is_lowest_order_not_backend_order() {
    let lessons = vec![lesson("third", 3), lesson("first", 1), lesson("second", 2)];
    assert_eq!(demo_lesson_id(lessons).as_deref(), Some("first"));
    assert_eq!(demo_lesson_id(Vec::new()), None);
}
