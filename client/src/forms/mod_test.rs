use super::*;

#[test]
fn require_trims_non_blank_values() {
    assert_eq!(require("  Algebra ", "title"), Ok("Algebra".to_owned()));
}

#[test]
fn require_rejects_blank_values() {
    assert_eq!(require(" \t", "title"), Err(FormError::Required("title")));
}

#[test]
fn question_errors_name_question_and_option() {
    assert_eq!(
        FormError::QuestionText { question: 2 }.localized(Lang::Az),
        "Sual 2 boş ola bilməz"
    );
    assert_eq!(
        FormError::QuestionOption { question: 1, option: 3 }.localized(Lang::Az),
        "Sual 1, Variant 3 boş ola bilməz"
    );
    assert_eq!(
        FormError::QuestionOption { question: 1, option: 3 }.localized(Lang::En),
        "Question 1, Option 3 cannot be empty"
    );
}

#[test]
fn required_error_names_field_label() {
    assert_eq!(FormError::Required("username").localized(Lang::En), "Username is required");
}

#[test]
fn key_error_translates_key() {
    assert_eq!(
        FormError::Key("quizNeedsQuestion").localized(Lang::Az),
        "Test ən azı bir suala sahib olmalıdır"
    );
}
