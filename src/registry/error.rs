//! Errors raised while assembling a validator registry, and the failure type
//! accumulated when a whole form is checked.

use crate::fields::FieldName;
use thiserror::Error;

/// Errors that can occur when building a [`ValidatorRegistry`](super::ValidatorRegistry).
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No rule registered for field '{field}'. Call .rule({field:?}, ..) or .with_defaults()")]
    MissingRule { field: FieldName },
}

/// A single failing field, as accumulated by a form-wide check.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{field}: {message}")]
pub struct FieldFailure {
    pub field: FieldName,
    pub message: String,
}
