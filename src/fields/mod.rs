//! Field model and the built-in validation rules.
//!
//! Everything in this module is pure: validators take a snapshot of the form
//! and return a [`ValidationResult`] without touching any UI state.

mod password;
mod patterns;
mod result;
pub mod rules;
mod value;

pub use password::{PasswordStrength, Requirement};
pub use patterns::SPECIAL_CHARACTERS;
pub use result::ValidationResult;
pub use value::{FieldKind, FieldName, FieldValue, FormValues};
