//! Form controller: event handling, submission and the timed reset.
//!
//! # Example
//!
//! ```rust
//! use formguard::config::FormConfig;
//! use formguard::fields::FieldName;
//! use formguard::form::{FormController, FormState, ManualClock};
//! use formguard::port::InMemoryForm;
//! use formguard::registry::ValidatorRegistry;
//!
//! let clock = ManualClock::new();
//! let mut controller = FormController::with_clock(
//!     ValidatorRegistry::registration(),
//!     FormConfig::default(),
//!     clock.clone(),
//! );
//! let mut form = InMemoryForm::new();
//!
//! form.input(FieldName::Email, "not-an-email");
//! let result = controller.field_changed(&mut form, FieldName::Email);
//! assert_eq!(result.message(), "Please enter a valid email address");
//!
//! let outcome = controller.submit(&mut form).unwrap();
//! assert_eq!(outcome.first_invalid(), Some(FieldName::FullName));
//! assert_eq!(controller.state(), FormState::Idle);
//! ```

mod controller;
mod error;
mod outcome;
mod schedule;
mod state;

pub use controller::FormController;
pub use error::SubmitError;
pub use outcome::SubmissionOutcome;
pub use schedule::{Clock, ManualClock, PendingReset, ResetToken, SystemClock};
pub use state::FormState;
