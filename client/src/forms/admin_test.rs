use super::*;
use crate::i18n::Lang;

fn filled_quiz() -> QuizForm {
    let mut form = QuizForm {
        title: "Fractions".to_owned(),
        course_id: "c-1".to_owned(),
        ..QuizForm::default()
    };
    form.set_question_text(0, "1/2 + 1/4 = ?".to_owned());
    for (i, text) in ["3/4", "2/6", "1/8", "1"].into_iter().enumerate() {
        form.set_option(0, i, text.to_owned());
    }
    form
}

fn filled_package() -> PackageForm {
    PackageForm {
        title: "Starter".to_owned(),
        description: "Math and physics".to_owned(),
        price: "49.99".to_owned(),
        course_ids: vec!["c-1".to_owned()],
        ..PackageForm::default()
    }
}

// =============================================================
// Course
// =============================================================

#[test]
fn course_form_builds_multipart_fields() {
    let form = CourseForm {
        title: " Algebra ".to_owned(),
        description: "Basics".to_owned(),
        subject: SubjectType::Physics,
    };
    let body = form.to_form(None).unwrap();
    assert_eq!(body.field_names(), vec!["Title", "Description", "Subject"]);
    assert_eq!(body.field("Title"), Some("Algebra"));
    assert_eq!(body.field("Subject"), Some("Physics"));
}

#[test]
fn course_form_requires_title_and_description() {
    let form = CourseForm { description: "d".to_owned(), ..CourseForm::default() };
    assert_eq!(form.to_form(None).unwrap_err(), FormError::Required("title"));
    let form = CourseForm { title: "t".to_owned(), ..CourseForm::default() };
    let err = form.to_form(None).unwrap_err();
    assert_eq!(err, FormError::Required("description"));
    assert_eq!(err.localized(Lang::En), "Description is required");
}

// =============================================================
// Lesson
// =============================================================

fn filled_lesson() -> LessonForm {
    LessonForm {
        title: "Intro".to_owned(),
        description: "First steps".to_owned(),
        course_id: "c-1".to_owned(),
        order: "2".to_owned(),
        ..LessonForm::default()
    }
}

#[test]
fn lesson_form_builds_multipart_fields() {
    let body = filled_lesson().to_form(None, None).unwrap();
    assert_eq!(body.field("CourseId"), Some("c-1"));
    assert_eq!(body.field("Order"), Some("2"));
    assert_eq!(body.field("Content"), Some(""));
}

#[test]
fn lesson_form_requires_a_course() {
    let form = LessonForm { course_id: " ".to_owned(), ..filled_lesson() };
    assert_eq!(form.to_form(None, None).unwrap_err(), FormError::Key("selectCourse"));
}

#[test]
fn lesson_form_rejects_negative_or_garbled_order() {
    let form = LessonForm { order: "-1".to_owned(), ..filled_lesson() };
    assert_eq!(form.to_form(None, None).unwrap_err(), FormError::Key("orderMustBeNonNegative"));
    let form = LessonForm { order: "two".to_owned(), ..filled_lesson() };
    assert_eq!(form.to_form(None, None).unwrap_err(), FormError::Key("invalidNumber"));
}

// =============================================================
// Quiz
// =============================================================

#[test]
fn quiz_form_defaults() {
    let form = QuizForm::default();
    assert_eq!(form.time_limit, "30");
    assert_eq!(form.passing_score, "70");
    assert_eq!(form.questions.len(), 1);
    assert_eq!(form.questions[0].options.len(), DEFAULT_OPTION_COUNT);
}

#[test]
fn quiz_form_builds_input() {
    let input = filled_quiz().to_input().unwrap();
    assert_eq!(input.time_limit, Some(30));
    assert_eq!(input.passing_score, 70);
    assert_eq!(input.lesson_id, None);
    assert_eq!(input.questions[0].options[0], "3/4");
    assert_eq!(input.questions[0].correct_option_index, 0);
}

#[test]
fn quiz_form_blank_time_limit_means_none() {
    let mut form = filled_quiz();
    form.time_limit = " ".to_owned();
    form.lesson_id = "l-9".to_owned();
    let input = form.to_input().unwrap();
    assert_eq!(input.time_limit, None);
    assert_eq!(input.lesson_id.as_deref(), Some("l-9"));
}

#[test]
fn quiz_form_needs_a_question() {
    let mut form = filled_quiz();
    form.remove_question(0);
    assert_eq!(form.to_input().unwrap_err(), FormError::Key("quizNeedsQuestion"));
}

#[test]
fn quiz_form_names_blank_question_and_option() {
    let mut form = filled_quiz();
    form.add_question();
    assert_eq!(form.to_input().unwrap_err(), FormError::QuestionText { question: 2 });

    form.set_question_text(1, "2 + 2".to_owned());
    form.set_option(1, 0, "4".to_owned());
    let err = form.to_input().unwrap_err();
    assert_eq!(err, FormError::QuestionOption { question: 2, option: 2 });
    assert_eq!(err.localized(Lang::En), "Question 2, Option 2 cannot be empty");
}

#[test]
fn quiz_form_rejects_out_of_range_correct_option() {
    let mut form = filled_quiz();
    form.set_correct(0, 4);
    assert_eq!(form.to_input().unwrap_err(), FormError::CorrectOption { question: 1 });
}

#[test]
fn quiz_form_rejects_passing_score_over_100() {
    let mut form = filled_quiz();
    form.passing_score = "101".to_owned();
    assert_eq!(form.to_input().unwrap_err(), FormError::Key("invalidNumber"));
}

#[test]
fn quiz_form_loads_existing_quiz() {
    let quiz = Quiz {
        id: "q-1".to_owned(),
        title: "T".to_owned(),
        description: String::new(),
        course_id: "c-1".to_owned(),
        lesson_id: None,
        questions: vec![QuizQuestion {
            id: Some("qq-1".to_owned()),
            text: "x".to_owned(),
            options: vec!["a".to_owned(), "b".to_owned()],
            correct_option_index: 1,
        }],
        time_limit: None,
        passing_score: 50,
    };
    let form = QuizForm::from(&quiz);
    assert_eq!(form.time_limit, "");
    let input = form.to_input().unwrap();
    assert_eq!(input.questions[0].id.as_deref(), Some("qq-1"));
    assert_eq!(input.questions[0].correct_option_index, 1);
}

// =============================================================
// Package
// =============================================================

#[test]
fn package_form_defaults() {
    let form = PackageForm::default();
    assert_eq!(form.price, "0");
    assert_eq!(form.discount, "0");
    assert_eq!(form.duration, "30");
    assert_eq!(form.status, "active");
}

#[test]
fn package_form_builds_input() {
    let input = filled_package().to_input().unwrap();
    assert!((input.price - 49.99).abs() < f64::EPSILON);
    assert_eq!(input.duration, 30);
    assert_eq!(input.status, "active");
    assert_eq!(input.course_ids, vec!["c-1".to_owned()]);
}

#[test]
fn package_form_rejects_negative_price() {
    let form = PackageForm { price: "-5".to_owned(), ..filled_package() };
    assert_eq!(form.to_input().unwrap_err(), FormError::Key("priceMustBeNonNegative"));
}

#[test]
fn package_form_needs_a_course() {
    let mut form = filled_package();
    form.toggle_course("c-1");
    assert!(!form.has_course("c-1"));
    assert_eq!(form.to_input().unwrap_err(), FormError::Key("packageNeedsCourse"));
}

#[test]
fn toggle_course_keeps_pick_order() {
    let mut form = PackageForm::default();
    form.toggle_course("b");
    form.toggle_course("a");
    form.toggle_course("c");
    form.toggle_course("a");
    assert_eq!(form.course_ids, vec!["b".to_owned(), "c".to_owned()]);
}
