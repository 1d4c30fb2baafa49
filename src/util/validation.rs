//! Field validation for the registration forms.
//!
//! Each validator checks every field, collects one message per failing
//! field, and only yields a request-ready value when nothing failed. The
//! forms show the messages inline; nothing reaches the network until the
//! validator returns `Ok`.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use time::Date;
use time::macros::format_description;

use crate::net::types::{CUSTOMER_ROLE, RegisterAccountRequest};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_FULL_NAME_LEN: usize = 2;

/// Per-field error messages keyed by a form's field enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, &'static str>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`; the first message per field wins.
    pub fn insert(&mut self, field: F, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }

    pub fn get(&self, field: F) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CredentialField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileField {
    FullName,
    Gender,
    Birthday,
}

/// Raw values of the account form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Raw values of the profile form. `birthday` is the date input's `YYYY-MM-DD` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileInput {
    pub full_name: String,
    pub gender: String,
    pub birthday: String,
}

/// Validated profile values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub gender: String,
    pub birthday: Date,
}

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok()).as_ref()
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

/// At least [`MIN_PASSWORD_LEN`] chars with one ASCII letter and one digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Validate the account form and build the registration body.
///
/// Field values go into the request exactly as entered.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate_credentials(input: &CredentialsInput) -> Result<RegisterAccountRequest, FieldErrors<CredentialField>> {
    let mut errors = FieldErrors::new();

    let username = input.username.trim();
    if username.is_empty() {
        errors.insert(CredentialField::Username, "Username is required.");
    } else if username.chars().count() < MIN_USERNAME_LEN {
        errors.insert(CredentialField::Username, "Username must be at least 3 characters.");
    }

    if input.email.trim().is_empty() {
        errors.insert(CredentialField::Email, "Email is required.");
    } else if !is_valid_email(&input.email) {
        errors.insert(CredentialField::Email, "Enter a valid email address.");
    }

    if input.password.is_empty() {
        errors.insert(CredentialField::Password, "Password is required.");
    } else if !is_valid_password(&input.password) {
        errors.insert(
            CredentialField::Password,
            "Password must be at least 6 characters and contain a letter and a number.",
        );
    }

    if input.confirm_password.is_empty() {
        errors.insert(CredentialField::ConfirmPassword, "Please confirm your password.");
    } else if input.confirm_password != input.password {
        errors.insert(CredentialField::ConfirmPassword, "Passwords do not match.");
    }

    errors.into_result(|| RegisterAccountRequest {
        username: input.username.clone(),
        email: input.email.clone(),
        password: input.password.clone(),
        confirm_password: input.confirm_password.clone(),
        role: CUSTOMER_ROLE.to_owned(),
    })
}

/// Parse a `YYYY-MM-DD` date input value.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Format as ISO-8601 `YYYY-MM-DD`. `None` for years outside four digits.
pub fn format_iso_date(date: Date) -> Option<String> {
    date.format(format_description!("[year]-[month]-[day]")).ok()
}

/// Validate the profile form against `today`.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate_profile(input: &ProfileInput, today: Date) -> Result<ProfileDraft, FieldErrors<ProfileField>> {
    let mut errors = FieldErrors::new();

    let full_name = input.full_name.trim();
    if full_name.is_empty() {
        errors.insert(ProfileField::FullName, "Full name is required.");
    } else if full_name.chars().count() < MIN_FULL_NAME_LEN {
        errors.insert(ProfileField::FullName, "Full name must be at least 2 characters.");
    }

    let gender = input.gender.trim();
    if gender.is_empty() {
        errors.insert(ProfileField::Gender, "Please select a gender.");
    }

    let birthday = if input.birthday.trim().is_empty() {
        errors.insert(ProfileField::Birthday, "Birth date is required.");
        None
    } else {
        match parse_iso_date(&input.birthday) {
            Some(date) if date < today => Some(date),
            Some(_) => {
                errors.insert(ProfileField::Birthday, "Birth date must be in the past.");
                None
            }
            None => {
                errors.insert(ProfileField::Birthday, "Enter a valid birth date.");
                None
            }
        }
    };

    match birthday {
        Some(birthday) if errors.is_empty() => {
            Ok(ProfileDraft { full_name: full_name.to_owned(), gender: gender.to_owned(), birthday })
        }
        _ => Err(errors),
    }
}

/// Today's calendar date in the visitor's local time zone (UTC outside a browser).
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let parts = (
            i32::try_from(now.get_full_year()).ok(),
            u8::try_from(now.get_month() + 1).ok().and_then(|m| time::Month::try_from(m).ok()),
            u8::try_from(now.get_date()).ok(),
        );
        if let (Some(year), Some(month), Some(day)) = parts {
            if let Ok(date) = Date::from_calendar_date(year, month, day) {
                return date;
            }
        }
        log::warn!("browser clock returned an invalid date; using the Unix epoch");
        time::OffsetDateTime::UNIX_EPOCH.date()
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
