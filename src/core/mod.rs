//! Lifecycle primitives.
//!
//! - States via the `State` trait
//! - A bounded log of transitions
//!
//! Nothing here has side effects; the form controller drives them.

mod history;
mod state;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::State;
