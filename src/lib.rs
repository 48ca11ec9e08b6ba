//! Formguard: validation core for a registration form
//!
//! Formguard keeps the rules of a seven-field registration form (name, email,
//! phone, password, confirmation, age, terms) apart from whatever renders it.
//! Validators are pure functions over a snapshot of the form; a controller
//! wires change and submit events to them and writes the results back through
//! a presentation port.
//!
//! # Core Concepts
//!
//! - **Fields**: the seven inputs and a [`FormValues`](fields::FormValues) snapshot
//! - **Registry**: one pure rule per field, checked singly or all at once
//! - **Strength checklist**: five independent password requirements
//! - **Port**: the [`PresentationPort`](port::PresentationPort) trait a UI implements
//! - **Controller**: lifecycle state machine with a timed reset after success
//!
//! # Example
//!
//! ```rust
//! use formguard::fields::FieldName;
//! use formguard::form::FormController;
//! use formguard::port::InMemoryForm;
//!
//! let mut controller = FormController::new();
//! let mut form = InMemoryForm::new();
//!
//! form.input(FieldName::Password, "abc");
//! let result = controller.field_changed(&mut form, FieldName::Password);
//!
//! assert_eq!(result.message(), "Password must be at least 8 characters");
//! assert_eq!(form.strength().satisfied_count(), 1);
//! ```

pub mod config;
pub mod core;
pub mod fields;
pub mod form;
pub mod port;
pub mod registry;

// Re-export commonly used types
pub use config::FormConfig;
pub use fields::{FieldName, FormValues, PasswordStrength, ValidationResult};
pub use form::{FormController, FormState, SubmissionOutcome};
pub use port::{InMemoryForm, PresentationPort, Validity};
pub use registry::ValidatorRegistry;
