//! Login, registration, email-verification and profile form rules.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::{FormError, require};
use crate::i18n::{Lang, t};
use crate::net::api::{FileHandle, FormBody};
use crate::net::types::{Me, Sector, Subscription};

/// Digits in a local phone number.
pub const PHONE_DIGITS: usize = 9;

/// Digits in an email verification code.
pub const CODE_DIGITS: usize = 4;

// ---- login ----

/// Trimmed `(username, password)`.
///
/// # Errors
///
/// Returns [`FormError::Required`] for the first blank field.
pub fn validate_login(username: &str, password: &str) -> Result<(String, String), FormError> {
    let username = require(username, "username")?;
    if password.is_empty() {
        return Err(FormError::Required("password"));
    }
    Ok((username, password.to_owned()))
}

/// Where to go after login: the dashboard with any active subscription,
/// otherwise (including on lookup failure) the package list.
pub fn post_login_destination<E>(subscriptions: &Result<Vec<Subscription>, E>) -> &'static str {
    match subscriptions {
        Ok(subs) if !subs.is_empty() => "/dashboard",
        _ => "/packages",
    }
}

// ---- phone & email ----

/// Format typed input as `XX XXX XX XX`, keeping at most nine digits.
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(PHONE_DIGITS).collect();
    let mut out = String::with_capacity(12);
    for (i, d) in digits.iter().enumerate() {
        if matches!(i, 2 | 5 | 7) {
            out.push(' ');
        }
        out.push(*d);
    }
    out
}

/// Strip formatting from a phone number.
pub fn phone_digits(formatted: &str) -> String {
    formatted.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_valid_phone(digits: &str) -> bool {
    digits.len() == PHONE_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
}

/// One `@`, a non-empty local part and a dotted domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

/// Case-insensitive `8-4-4-4-12` hex GUID.
pub fn is_guid(raw: &str) -> bool {
    let groups: Vec<&str> = raw.split('-').collect();
    groups.len() == 5
        && groups
            .iter()
            .zip([8, 4, 4, 4, 12])
            .all(|(g, len)| g.len() == len && g.chars().all(|c| c.is_ascii_hexdigit()))
}

// ---- registration ----

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// As typed, possibly formatted with spaces.
    pub phone: String,
    /// Exam group, 1 through 4.
    pub group: u8,
    pub sector: Sector,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            group: 1,
            sector: Sector::Az,
        }
    }
}

impl RegisterForm {
    /// Validate and build the multipart body for `/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: required fields, email shape, then
    /// phone length.
    pub fn to_form(&self, picture: Option<FileHandle>) -> Result<FormBody, FormError> {
        let username = require(&self.username, "username")?;
        if self.password.is_empty() {
            return Err(FormError::Required("password"));
        }
        let first_name = require(&self.first_name, "firstName")?;
        let last_name = require(&self.last_name, "lastName")?;
        let email = require(&self.email, "email")?;
        if !is_valid_email(&email) {
            return Err(FormError::Key("invalidEmail"));
        }
        let phone = phone_digits(&self.phone);
        if !is_valid_phone(&phone) {
            return Err(FormError::Key("invalidPhone"));
        }
        let group = self.group.clamp(1, 4);
        Ok(FormBody::new()
            .text("Username", username)
            .text("Password", self.password.clone())
            .text("FirstName", first_name)
            .text("LastName", last_name)
            .text("Email", email)
            .text("PhoneNumber", phone)
            .text("Group", group.to_string())
            .text("Sector", self.sector.code().to_string())
            .file("ProfilePicture", picture))
    }
}

/// Extract the new user's id from `"User with ID <guid> ..."`, lowercased.
///
/// # Errors
///
/// Returns `missingUserId` when the marker is absent and
/// `invalidUserIdFormat` when the id is not a GUID.
pub fn parse_registered_user_id(response: &str) -> Result<String, FormError> {
    const MARKER: &str = "User with ID ";
    let raw = response.trim().trim_matches('"');
    let Some(start) = raw.find(MARKER) else {
        return Err(FormError::Key("missingUserId"));
    };
    let id = raw[start + MARKER.len()..]
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_matches(|c: char| !c.is_ascii_hexdigit())
        .to_ascii_lowercase();
    if id.is_empty() {
        return Err(FormError::Key("missingUserId"));
    }
    if !is_guid(&id) {
        return Err(FormError::Key("invalidUserIdFormat"));
    }
    Ok(id)
}

// ---- email verification ----

/// Digit boxes of the verification form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeInput {
    pub digits: [String; CODE_DIGITS],
}

impl CodeInput {
    /// Apply typed `value` to box `index`. Non-digit input is rejected; the
    /// box keeps only the last digit typed. Returns the box to focus next.
    pub fn set_digit(&mut self, index: usize, value: &str) -> Option<usize> {
        if index >= CODE_DIGITS || !value.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        self.digits[index] = value.chars().last().map(String::from).unwrap_or_default();
        (!value.is_empty() && index + 1 < CODE_DIGITS).then_some(index + 1)
    }

    /// Box to focus on Backspace in an empty box.
    pub fn backspace_target(&self, index: usize) -> Option<usize> {
        (index > 0 && index < CODE_DIGITS && self.digits[index].is_empty()).then(|| index - 1)
    }

    pub fn code(&self) -> String {
        self.digits.concat()
    }
}

/// Check the user id and code before calling `/auth/verify-email`.
///
/// # Errors
///
/// Returns `enterFullCode`, `invalidUserIdFormat` or `invalidCodeFormat`.
pub fn validate_verification(user_id: &str, code: &str) -> Result<(String, String), FormError> {
    if code.chars().count() != CODE_DIGITS {
        return Err(FormError::Key("enterFullCode"));
    }
    if !is_guid(user_id) {
        return Err(FormError::Key("invalidUserIdFormat"));
    }
    let clean: String = code.chars().filter(char::is_ascii_digit).collect();
    if clean.len() != CODE_DIGITS {
        return Err(FormError::Key("invalidCodeFormat"));
    }
    Ok((user_id.to_ascii_lowercase(), clean))
}

/// Server-side verification failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyFailure {
    InvalidCode,
    Expired,
    AlreadyVerified,
    /// Unrecognized server text, shown verbatim.
    Other(String),
    /// No server text at all.
    Unknown,
}

impl VerifyFailure {
    pub fn classify(message: Option<&str>) -> Self {
        match message {
            None => Self::Unknown,
            Some(m) if m.contains("Invalid verification code") => Self::InvalidCode,
            Some(m) if m.contains("expired") => Self::Expired,
            Some(m) if m.contains("already verified") => Self::AlreadyVerified,
            Some(m) => Self::Other(m.to_owned()),
        }
    }

    pub fn text(&self, lang: Lang) -> String {
        match self {
            Self::InvalidCode => t(lang, "invalidVerificationCode").to_owned(),
            Self::Expired => t(lang, "codeExpired").to_owned(),
            Self::AlreadyVerified => t(lang, "emailAlreadyVerified").to_owned(),
            Self::Other(m) => m.clone(),
            Self::Unknown => t(lang, "verificationFailed").to_owned(),
        }
    }

    pub fn redirects_to_login(&self) -> bool {
        matches!(self, Self::AlreadyVerified)
    }
}

// ---- profile ----

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub group: i32,
    /// Sector name as the backend spells it.
    pub sector: String,
}

impl From<&Me> for ProfileForm {
    fn from(me: &Me) -> Self {
        Self {
            username: me.username.clone(),
            first_name: me.first_name.clone(),
            last_name: me.last_name.clone(),
            email: me.email.clone(),
            phone_number: me.phone_number.clone(),
            group: me.group,
            sector: Sector::from_name(&me.sector).unwrap_or_default().name().to_owned(),
        }
    }
}

impl ProfileForm {
    /// Validate and build the multipart body for `PUT /user/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Required`] for blank fields or `invalidEmail`.
    pub fn to_form(&self) -> Result<FormBody, FormError> {
        let username = require(&self.username, "username")?;
        let first_name = require(&self.first_name, "firstName")?;
        let last_name = require(&self.last_name, "lastName")?;
        let email = require(&self.email, "email")?;
        if !is_valid_email(&email) {
            return Err(FormError::Key("invalidEmail"));
        }
        Ok(FormBody::new()
            .text("Username", username)
            .text("FirstName", first_name)
            .text("LastName", last_name)
            .text("Email", email)
            .text("PhoneNumber", self.phone_number.trim())
            .text("Group", self.group.to_string())
            .text("Sector", self.sector.clone()))
    }
}
