//! Lifecycle transition history.
//!
//! Log of where the form has been, kept for diagnostics and tests. A form
//! lives as long as its page, so the log keeps only the most recent entries.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Entries kept by [`StateHistory::new`].
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single state transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// What caused it ("submit", "reset timer", ...)
    pub cause: String,
}

/// Ordered, bounded history of state transitions.
///
/// Once `limit` entries are held, recording a new one drops the oldest.
///
/// # Example
///
/// ```rust
/// use formguard::core::{StateHistory, StateTransition};
/// use formguard::form::FormState;
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: FormState::Idle,
///     to: FormState::Validating,
///     timestamp: Utc::now(),
///     cause: "submit".to_string(),
/// });
///
/// assert_eq!(history.get_path(), vec![&FormState::Idle, &FormState::Validating]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// History keeping at most `limit` transitions (at least one).
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            transitions: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Append a transition, evicting the oldest when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// States traversed: the oldest kept `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// How many kept transitions entered `state`.
    pub fn count_entries(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }
}
