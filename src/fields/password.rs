//! Live password-strength checklist.
//!
//! The checklist evaluates the same five requirements the password validator
//! enforces, but reports each one on its own so a UI can tick them off as the
//! user types. It is recomputed from the raw value on every change and never
//! stored.

use crate::fields::patterns::{
    DIGIT_REGEX, LOWERCASE_REGEX, MIN_LENGTH_REGEX, SPECIAL_CHAR_REGEX, UPPERCASE_REGEX,
};
use serde::{Deserialize, Serialize};

/// One password requirement, declared in the order the validator checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Requirement {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Requirement {
    pub const ALL: [Requirement; 5] = [
        Requirement::Length,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Digit,
        Requirement::Special,
    ];

    /// Error text shown when this is the first unmet requirement.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Length => "Password must be at least 8 characters",
            Self::Uppercase => "Password must contain at least one uppercase letter",
            Self::Lowercase => "Password must contain at least one lowercase letter",
            Self::Digit => "Password must contain at least one number",
            Self::Special => "Password must contain at least one special character",
        }
    }

    /// Key of the checklist item a UI renders for this requirement.
    pub fn checklist_key(&self) -> &'static str {
        match self {
            Self::Length => "length-check",
            Self::Uppercase => "uppercase-check",
            Self::Lowercase => "lowercase-check",
            Self::Digit => "number-check",
            Self::Special => "special-check",
        }
    }

    pub fn is_met_by(&self, password: &str) -> bool {
        match self {
            Self::Length => MIN_LENGTH_REGEX.is_match(password),
            Self::Uppercase => UPPERCASE_REGEX.is_match(password),
            Self::Lowercase => LOWERCASE_REGEX.is_match(password),
            Self::Digit => DIGIT_REGEX.is_match(password),
            Self::Special => SPECIAL_CHAR_REGEX.is_match(password),
        }
    }
}

/// Snapshot of the five requirement checks for one password value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordStrength {
    /// Evaluate every requirement independently.
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: Requirement::Length.is_met_by(password),
            uppercase: Requirement::Uppercase.is_met_by(password),
            lowercase: Requirement::Lowercase.is_met_by(password),
            digit: Requirement::Digit.is_met_by(password),
            special: Requirement::Special.is_met_by(password),
        }
    }

    /// The all-unchecked checklist shown on an empty form.
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_met(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Length => self.length,
            Requirement::Uppercase => self.uppercase,
            Requirement::Lowercase => self.lowercase,
            Requirement::Digit => self.digit,
            Requirement::Special => self.special,
        }
    }

    /// First unmet requirement in check order.
    pub fn first_missing(&self) -> Option<Requirement> {
        Requirement::ALL.into_iter().find(|r| !self.is_met(*r))
    }

    pub fn satisfied_count(&self) -> usize {
        Requirement::ALL.iter().filter(|r| self.is_met(**r)).count()
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }
}
