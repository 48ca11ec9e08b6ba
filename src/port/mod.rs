//! Presentation port: the boundary between the validation core and a UI.
//!
//! The core never touches rendering primitives. It reads field values and
//! writes error text, validity styling, the strength checklist and the
//! success indicator through [`PresentationPort`]; a UI layer supplies the
//! adapter. [`InMemoryForm`] is a headless adapter that keeps everything in
//! memory.

mod memory;

pub use memory::InMemoryForm;

use crate::fields::{FieldName, FieldValue, PasswordStrength};
use serde::{Deserialize, Serialize};

/// Validity styling of a field. A field is styled one way or the other, never
/// both; "no styling" is expressed as `None` at the port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    /// CSS-style class name a UI adapter typically applies.
    pub fn class_name(&self) -> &'static str {
        match self {
            Validity::Valid => "valid",
            Validity::Invalid => "error",
        }
    }
}

/// Everything the core needs from a rendered form.
///
/// Adapters forward change and submit events to the
/// [`FormController`](crate::form::FormController) and suppress the host's own
/// submit action before doing so.
pub trait PresentationPort {
    /// Current value of `field`.
    fn read_value(&self, field: FieldName) -> FieldValue;

    /// Write the field's error text (`""` clears it).
    fn set_error(&mut self, field: FieldName, message: &str);

    /// Style the field as valid or invalid, or clear the styling.
    fn set_validity(&mut self, field: FieldName, validity: Option<Validity>);

    /// Render the password-strength checklist.
    fn set_strength(&mut self, strength: &PasswordStrength);

    /// Show or hide the form-level success indicator.
    fn set_success_visible(&mut self, visible: bool);

    /// Scroll or focus `field` so the user sees it.
    fn bring_into_view(&mut self, field: FieldName);

    /// Clear every field value.
    fn clear_values(&mut self);
}
