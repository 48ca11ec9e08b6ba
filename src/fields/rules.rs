//! The seven field validators.
//!
//! Each validator reads its field from the [`FormValues`] snapshot and returns
//! a [`ValidationResult`]. Checks run in a fixed order and the first failing
//! check decides the message. Validators are pure: same snapshot, same result.

use crate::fields::password::PasswordStrength;
use crate::fields::patterns::{EMAIL_REGEX, LEADING_INTEGER_REGEX, NAME_REGEX, PHONE_REGEX};
use crate::fields::result::ValidationResult;
use crate::fields::value::{FieldName, FormValues};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 120;

/// Run the built-in validator for `field`.
pub fn validate(field: FieldName, values: &FormValues) -> ValidationResult {
    match field {
        FieldName::FullName => validate_name(&values.full_name),
        FieldName::Email => validate_email(&values.email),
        FieldName::Phone => validate_phone(&values.phone),
        FieldName::Password => validate_password(&values.password),
        FieldName::ConfirmPassword => {
            validate_confirm_password(&values.confirm_password, &values.password)
        }
        FieldName::Age => validate_age(&values.age),
        FieldName::Terms => validate_terms(values.terms),
    }
}

pub fn validate_name(value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        ValidationResult::invalid("Full name is required")
    } else if !NAME_REGEX.is_match(value) {
        ValidationResult::invalid("Please enter a valid name (2-50 characters, letters only)")
    } else {
        ValidationResult::valid()
    }
}

pub fn validate_email(value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        ValidationResult::invalid("Email address is required")
    } else if !EMAIL_REGEX.is_match(value) {
        ValidationResult::invalid("Please enter a valid email address")
    } else {
        ValidationResult::valid()
    }
}

pub fn validate_phone(value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        ValidationResult::invalid("Phone number is required")
    } else if !PHONE_REGEX.is_match(value) {
        ValidationResult::invalid("Please enter a valid 10-digit phone number")
    } else {
        ValidationResult::valid()
    }
}

/// Passwords are not trimmed: surrounding spaces are part of the secret.
pub fn validate_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::invalid("Password is required");
    }
    match PasswordStrength::evaluate(value).first_missing() {
        Some(requirement) => ValidationResult::invalid(requirement.message()),
        None => ValidationResult::valid(),
    }
}

/// Compare against the password as it is now, not as it was when the
/// confirmation was typed.
pub fn validate_confirm_password(value: &str, password: &str) -> ValidationResult {
    if value.is_empty() {
        ValidationResult::invalid("Please confirm your password")
    } else if value != password {
        ValidationResult::invalid("Passwords do not match")
    } else {
        ValidationResult::valid()
    }
}

pub fn validate_age(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::invalid("Age is required");
    }
    match leading_integer(value) {
        Some(age) if age < MIN_AGE => ValidationResult::invalid("You must be at least 18 years old"),
        Some(age) if age > MAX_AGE => ValidationResult::invalid("Please enter a valid age"),
        Some(_) => ValidationResult::valid(),
        None => ValidationResult::invalid("Please enter a valid age"),
    }
}

/// Integer at the start of `value` after leading whitespace, ignoring any
/// trailing text ("25.0" and "30 years" read as 25 and 30). Out-of-range
/// digit runs saturate.
fn leading_integer(value: &str) -> Option<i64> {
    let digits = LEADING_INTEGER_REGEX.captures(value)?.get(1)?.as_str();
    match digits.parse::<i64>() {
        Ok(number) => Some(number),
        Err(_) if digits.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

pub fn validate_terms(checked: bool) -> ValidationResult {
    if checked {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid("You must agree to the terms and conditions")
    }
}
