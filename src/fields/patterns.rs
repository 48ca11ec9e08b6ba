//! Compiled patterns shared by the validators and the strength checklist.

use once_cell::sync::Lazy;
use regex::Regex;

// Patterns are constants; a failure to compile is a programming error.
pub(crate) static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]{2,50}$").expect("name pattern compiles"));
pub(crate) static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").expect("email pattern compiles")
});
pub(crate) static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));
pub(crate) static LEADING_INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("integer pattern compiles"));

pub(crate) static MIN_LENGTH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".{8,}").expect("length pattern compiles"));
pub(crate) static UPPERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern compiles"));
pub(crate) static LOWERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("lowercase pattern compiles"));
pub(crate) static DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern compiles"));
pub(crate) static SPECIAL_CHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("special pattern compiles"));

/// Characters that satisfy the special-character requirement.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*(),.?":{}|<>"#;
