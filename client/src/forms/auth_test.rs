use super::*;

const GUID: &str = "3f2504e0-4f89-11d3-9a0c-0305e82c3301";

fn filled_register_form() -> RegisterForm {
    RegisterForm {
        username: "aysel".to_owned(),
        password: "secret1".to_owned(),
        first_name: "Aysel".to_owned(),
        last_name: "Mammadova".to_owned(),
        email: "aysel@example.az".to_owned(),
        phone: "50 123 45 67".to_owned(),
        group: 2,
        sector: Sector::Ru,
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login(" ", "x"), Err(FormError::Required("username")));
    assert_eq!(validate_login("u", ""), Err(FormError::Required("password")));
    assert_eq!(validate_login(" u ", "p w"), Ok(("u".to_owned(), "p w".to_owned())));
}

#[test]
fn post_login_destination_depends_on_subscriptions() {
    let sub = Subscription {
        id: "s".to_owned(),
        user_id: "u".to_owned(),
        package_id: "p".to_owned(),
        start_date: String::new(),
        end_date: String::new(),
        is_active: true,
    };
    assert_eq!(post_login_destination::<()>(&Ok(vec![sub])), "/dashboard");
    assert_eq!(post_login_destination::<()>(&Ok(Vec::new())), "/packages");
    assert_eq!(post_login_destination(&Err::<Vec<Subscription>, _>("boom")), "/packages");
}

// =============================================================
// Phone, email, GUID
// =============================================================

#[test]
fn format_phone_groups_digits_as_typed() {
    assert_eq!(format_phone(""), "");
    assert_eq!(format_phone("50"), "50");
    assert_eq!(format_phone("501"), "50 1");
    assert_eq!(format_phone("50123"), "50 123");
    assert_eq!(format_phone("501234"), "50 123 4");
    assert_eq!(format_phone("501234567"), "50 123 45 67");
}

#[test]
fn format_phone_drops_non_digits_and_caps_length() {
    assert_eq!(format_phone("+994 (50) 123-45-67"), "99 450 12 34");
    assert_eq!(format_phone("5012345678999"), "50 123 45 67");
}

#[test]
fn phone_validation_needs_exactly_nine_digits() {
    assert_eq!(phone_digits("50 123 45 67"), "501234567");
    assert!(is_valid_phone("501234567"));
    assert!(!is_valid_phone("50123456"));
    assert!(!is_valid_phone("5012345678"));
}

#[test]
fn email_validation_accepts_dotted_domains_only() {
    assert!(is_valid_email("a@b.az"));
    assert!(is_valid_email(" first.last@mail.example.com "));
    assert!(!is_valid_email("no-at-sign.az"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.az"));
    assert!(!is_valid_email("a@@b.az"));
    assert!(!is_valid_email("a@b..az"));
    assert!(!is_valid_email("a b@c.az"));
}

#[test]
fn guid_validation_is_case_insensitive() {
    assert!(is_guid(GUID));
    assert!(is_guid(&GUID.to_ascii_uppercase()));
    assert!(!is_guid("3f2504e0-4f89-11d3-9a0c"));
    assert!(!is_guid("zf2504e0-4f89-11d3-9a0c-0305e82c3301"));
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_form_builds_multipart_fields() {
    let form = filled_register_form().to_form(None).unwrap();
    assert_eq!(
        form.field_names(),
        vec!["Username", "Password", "FirstName", "LastName", "Email", "PhoneNumber", "Group", "Sector"]
    );
    assert_eq!(form.field("PhoneNumber"), Some("501234567"));
    assert_eq!(form.field("Sector"), Some("1"));
    assert_eq!(form.field("Group"), Some("2"));
    assert_eq!(form.file_count(), 0);
}

#[test]
fn register_form_rejects_short_phone() {
    let mut form = filled_register_form();
    form.phone = "50 123".to_owned();
    assert_eq!(form.to_form(None).unwrap_err(), FormError::Key("invalidPhone"));
    assert_eq!(
        FormError::Key("invalidPhone").localized(Lang::Az),
        "Düzgün telefon nömrəsi daxil edin (9 rəqəm)"
    );
}

#[test]
fn register_form_rejects_bad_email_and_blank_names() {
    let mut form = filled_register_form();
    form.email = "nope".to_owned();
    assert_eq!(form.to_form(None).unwrap_err(), FormError::Key("invalidEmail"));

    let mut form = filled_register_form();
    form.last_name = "  ".to_owned();
    assert_eq!(form.to_form(None).unwrap_err(), FormError::Required("lastName"));
}

#[test]
fn parse_registered_user_id_extracts_guid() {
    let text = format!("User with ID {} registered. Check your email.", GUID.to_ascii_uppercase());
    assert_eq!(parse_registered_user_id(&text), Ok(GUID.to_owned()));
    let quoted = format!("\"User with ID {GUID}\"");
    assert_eq!(parse_registered_user_id(&quoted), Ok(GUID.to_owned()));
}

#[test]
fn parse_registered_user_id_reports_missing_or_invalid_ids() {
    assert_eq!(parse_registered_user_id("Created"), Err(FormError::Key("missingUserId")));
    assert_eq!(
        parse_registered_user_id("User with ID 42 registered"),
        Err(FormError::Key("invalidUserIdFormat"))
    );
}

// =============================================================
// Verification
// =============================================================

#[test]
fn code_input_keeps_last_digit_and_advances_focus() {
    let mut input = CodeInput::default();
    assert_eq!(input.set_digit(0, "1"), Some(1));
    assert_eq!(input.set_digit(1, "29"), Some(2));
    assert_eq!(input.set_digit(2, "x"), None);
    assert_eq!(input.digits[2], "");
    assert_eq!(input.set_digit(2, "3"), Some(3));
    assert_eq!(input.set_digit(3, "4"), None);
    assert_eq!(input.code(), "1934");
}

#[test]
fn code_input_backspace_moves_left_from_empty_box() {
    let mut input = CodeInput::default();
    input.set_digit(0, "1");
    assert_eq!(input.backspace_target(1), Some(0));
    assert_eq!(input.backspace_target(0), None);
    input.set_digit(1, "2");
    assert_eq!(input.backspace_target(1), None);
}

#[test]
fn validate_verification_checks_length_then_id_then_digits() {
    assert_eq!(validate_verification(GUID, "123"), Err(FormError::Key("enterFullCode")));
    assert_eq!(validate_verification("bad", "1234"), Err(FormError::Key("invalidUserIdFormat")));
    assert_eq!(validate_verification(GUID, "12a4"), Err(FormError::Key("invalidCodeFormat")));
    assert_eq!(
        validate_verification(&GUID.to_ascii_uppercase(), "1234"),
        Ok((GUID.to_owned(), "1234".to_owned()))
    );
}

#[test]
fn verify_failures_are_classified_by_message() {
    assert_eq!(
        VerifyFailure::classify(Some("Invalid verification code.")),
        VerifyFailure::InvalidCode
    );
    assert_eq!(VerifyFailure::classify(Some("Code has expired")), VerifyFailure::Expired);
    let already = VerifyFailure::classify(Some("Email is already verified"));
    assert_eq!(already, VerifyFailure::AlreadyVerified);
    assert!(already.redirects_to_login());
    assert_eq!(VerifyFailure::classify(Some("Odd")).text(Lang::En), "Odd");
    assert_eq!(VerifyFailure::classify(None).text(Lang::En), "Verification failed");
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_form_round_trips_me_fields() {
    let me = Me {
        id: "u-1".to_owned(),
        username: "aysel".to_owned(),
        first_name: "Aysel".to_owned(),
        last_name: "M".to_owned(),
        email: "a@b.az".to_owned(),
        phone_number: "501234567".to_owned(),
        group: 3,
        sector: "english".to_owned(),
        profile_picture_url: None,
    };
    let form = ProfileForm::from(&me).to_form().unwrap();
    assert_eq!(form.field("Sector"), Some("English"));
    assert_eq!(form.field("Group"), Some("3"));
    assert_eq!(form.field("Username"), Some("aysel"));
}

#[test]
fn profile_form_requires_email() {
    let form = ProfileForm { username: "u".to_owned(), first_name: "f".to_owned(), last_name: "l".to_owned(), ..ProfileForm::default() };
    assert_eq!(form.to_form().unwrap_err(), FormError::Required("email"));
}
