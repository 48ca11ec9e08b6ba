//! Pass/fail outcome of a single field validation.

use serde::{Deserialize, Serialize};

/// Outcome of running one validator.
///
/// The message is empty exactly when the result is valid. Fields are private
/// so the two can only be built together through [`ValidationResult::valid`]
/// and [`ValidationResult::invalid`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result carrying `message`.
    ///
    /// An empty message is replaced by a generic one so a failure is never
    /// silent.
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "Invalid value".to_string()
        } else {
            message
        };
        Self {
            valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Text for the field's error slot: empty when valid.
    pub fn message(&self) -> &str {
        &self.message
    }
}
