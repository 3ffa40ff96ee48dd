//! Form validation for registration and job applications.
//!
//! Every check returns the first failing rule as a [`CoreError::Validation`]
//! carrying the field name and the message to show the applicant.

use crate::{ApplicationDetails, ApplicationForm, CoreError, CoreResult, NewApplicant};

use std::sync::LazyLock;

use regex::Regex;

// Patterns are constant; a failed compile simply rejects every input.
// Usernames are printable ASCII without commas: SQLite NOCASE only folds ASCII,
// and a comma would split the backup file line.
static USERNAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[[:graph:]&&[^,]]{3,25}$").ok());
static REGISTRATION_AGE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(1[89]|[2-5][0-9]|60)$").ok());
static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^09[0-9]{9}$").ok());

fn is_match(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    LazyLock::force(re).as_ref().is_some_and(|re| re.is_match(value))
}

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_APPLICATION_AGE: i64 = 18;
pub const MAX_APPLICATION_AGE: i64 = 100;

/// Validated registration, ready for account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub name: String,
    pub age: i64,
    pub phone: String,
}

#[track_caller]
pub fn validate_registration(input: &NewApplicant) -> CoreResult<Registration> {
    let username = input.username.trim();
    let name = input.name.trim();
    let age = input.age.trim();
    let phone = input.phone.trim();

    if username.is_empty()
        || input.password.is_empty()
        || name.is_empty()
        || age.is_empty()
        || phone.is_empty()
    {
        return Err(CoreError::validation(
            "form",
            "Please fill in all required fields.",
        ));
    }

    if input.password != input.confirm_password {
        return Err(CoreError::validation(
            "confirm_password",
            "Passwords do not match.",
        ));
    }

    validate_username(username)?;
    validate_password(&input.password)?;

    if !is_match(&REGISTRATION_AGE_RE, age) {
        return Err(CoreError::validation("age", "Age must be between 18 and 60."));
    }
    let age: i64 = age
        .parse()
        .map_err(|_| CoreError::validation("age", "Age must be a valid number."))?;

    if !is_match(&PHONE_RE, phone) {
        return Err(CoreError::validation(
            "phone",
            "Phone number must be 11 digits and start with 09.",
        ));
    }

    Ok(Registration {
        username: username.to_string(),
        password: input.password.clone(),
        name: name.to_string(),
        age,
        phone: phone.to_string(),
    })
}

#[track_caller]
pub fn validate_username(username: &str) -> CoreResult<()> {
    if is_match(&USERNAME_RE, username) {
        Ok(())
    } else {
        Err(CoreError::validation(
            "username",
            "Username must be 3-25 letters, digits or symbols, with no spaces or commas.",
        ))
    }
}

/// At least eight characters with upper, lower, digit and a non-alphanumeric.
#[track_caller]
pub fn validate_password(password: &str) -> CoreResult<()> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if password.contains(',') {
        return Err(CoreError::validation(
            "password",
            "Password cannot contain commas.",
        ));
    }

    if long_enough && has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        Err(CoreError::validation(
            "password",
            "Password must be 8+ chars with uppercase, lowercase, number, and special character.",
        ))
    }
}

#[track_caller]
pub fn validate_application(form: &ApplicationForm) -> CoreResult<ApplicationDetails> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(CoreError::validation(
            "name",
            "First Name and Last Name are required.",
        ));
    }

    let age = form.age.trim();
    if age.is_empty() {
        return Err(CoreError::validation("age", "Age is required."));
    }
    let age: i64 = age
        .parse()
        .map_err(|_| CoreError::validation("age", "Age must be a valid number."))?;
    if !(MIN_APPLICATION_AGE..=MAX_APPLICATION_AGE).contains(&age) {
        return Err(CoreError::validation(
            "age",
            "Age must be between 18 and 100.",
        ));
    }

    let address = form.address.trim();
    if address.is_empty() {
        return Err(CoreError::validation("address", "Address is required."));
    }

    let experience = form.experience.trim();
    if experience.is_empty() {
        return Err(CoreError::validation(
            "experience",
            "Work Experience is required.",
        ));
    }

    Ok(ApplicationDetails {
        job_id: form.job_id,
        first_name: first_name.to_string(),
        middle_name: form.middle_name.trim().to_string(),
        last_name: last_name.to_string(),
        gender: form.gender.trim().to_string(),
        age,
        address: address.to_string(),
        experience: experience.to_string(),
    })
}
