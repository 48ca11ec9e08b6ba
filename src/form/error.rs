//! Submission errors.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur when a submission cannot start.
#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("A successful submission is still on screen; the form resets at {due_at}")]
    ResetPending { due_at: DateTime<Utc> },
}
