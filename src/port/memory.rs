//! Headless presentation adapter.

use crate::fields::{FieldName, FieldValue, FormValues, PasswordStrength};
use crate::port::{PresentationPort, Validity};
use std::collections::BTreeMap;

/// A form rendered into plain data.
///
/// Holds the field values the user "typed" plus the last thing the core wrote
/// to every sink, so callers can inspect what a real UI would show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InMemoryForm {
    values: FormValues,
    errors: BTreeMap<FieldName, String>,
    validity: BTreeMap<FieldName, Validity>,
    strength: PasswordStrength,
    success_visible: bool,
    focused: Vec<FieldName>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from prefilled values.
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Simulate user input.
    pub fn input(&mut self, field: FieldName, value: impl Into<FieldValue>) {
        self.values.set(field, value);
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Error text currently shown for `field` (empty when none).
    pub fn error(&self, field: FieldName) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn validity(&self, field: FieldName) -> Option<Validity> {
        self.validity.get(&field).copied()
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Every field brought into view, oldest first.
    pub fn focus_log(&self) -> &[FieldName] {
        &self.focused
    }

    /// True when no field shows an error or validity styling.
    pub fn is_pristine(&self) -> bool {
        self.errors.values().all(String::is_empty) && self.validity.is_empty()
    }
}

impl PresentationPort for InMemoryForm {
    fn read_value(&self, field: FieldName) -> FieldValue {
        self.values.get(field)
    }

    fn set_error(&mut self, field: FieldName, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn set_validity(&mut self, field: FieldName, validity: Option<Validity>) {
        match validity {
            Some(validity) => {
                self.validity.insert(field, validity);
            }
            None => {
                self.validity.remove(&field);
            }
        }
    }

    fn set_strength(&mut self, strength: &PasswordStrength) {
        self.strength = *strength;
    }

    fn set_success_visible(&mut self, visible: bool) {
        self.success_visible = visible;
    }

    fn bring_into_view(&mut self, field: FieldName) {
        self.focused.push(field);
    }

    fn clear_values(&mut self) {
        self.values = FormValues::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_is_exclusive() {
        let mut form = InMemoryForm::new();
        form.set_validity(FieldName::Email, Some(Validity::Valid));
        form.set_validity(FieldName::Email, Some(Validity::Invalid));
        assert_eq!(form.validity(FieldName::Email), Some(Validity::Invalid));

        form.set_validity(FieldName::Email, None);
        assert_eq!(form.validity(FieldName::Email), None);
    }

    #[test]
    fn clear_values_keeps_sinks() {
        let mut form = InMemoryForm::new();
        form.input(FieldName::FullName, "John");
        form.set_error(FieldName::FullName, "oops");
        form.clear_values();

        assert_eq!(form.values(), &FormValues::default());
        assert_eq!(form.error(FieldName::FullName), "oops");
        assert!(!form.is_pristine());
    }

    #[test]
    fn reads_back_typed_values() {
        let mut form = InMemoryForm::new();
        form.input(FieldName::Terms, true);
        form.input(FieldName::Age, "42");

        assert_eq!(form.read_value(FieldName::Terms), FieldValue::Checked(true));
        assert_eq!(form.read_value(FieldName::Age), FieldValue::Text("42".into()));
    }
}
