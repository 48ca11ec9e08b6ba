//! Result of one submission.

use crate::fields::FieldName;
use crate::form::schedule::PendingReset;
use crate::registry::FieldFailure;

/// What a submission did.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// Every field passed; the form resets when `reset` comes due.
    Accepted { reset: PendingReset },

    /// At least one field failed; failures are in form order.
    Rejected { failures: Vec<FieldFailure> },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The field the user should be shown first.
    pub fn first_invalid(&self) -> Option<FieldName> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { failures } => failures.first().map(|f| f.field),
        }
    }

    pub fn invalid_fields(&self) -> Vec<FieldName> {
        match self {
            Self::Accepted { .. } => Vec::new(),
            Self::Rejected { failures } => failures.iter().map(|f| f.field).collect(),
        }
    }
}
