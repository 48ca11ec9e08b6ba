//! Lifecycle of one rendered form.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// Where a form is in its submit cycle.
///
/// `Idle -> Validating -> {Success -> Idle, Rejected -> Idle}`. `Success`
/// returns to `Idle` when the reset timer fires; `Rejected` returns at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Success,
    Rejected,
}

impl State for FormState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Validating => "Validating",
            Self::Success => "Success",
            Self::Rejected => "Rejected",
        }
    }
}
