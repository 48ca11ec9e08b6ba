//! Field identities and the value snapshot handed to validators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a field holds text or a checked flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
}

/// One of the seven inputs of the registration form.
///
/// Variants are declared in the order the inputs appear in the form; that
/// order decides which field is "first invalid" after a rejected submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Age,
    Terms,
}

impl FieldName {
    /// Every field, in form order.
    pub const ALL: [FieldName; 7] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Age,
        FieldName::Terms,
    ];

    /// Stable key used by UI adapters to locate the input.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Age => "age",
            Self::Terms => "terms",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Terms => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// Look a field up by its UI key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current value of a single input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// The empty value for a field of the given kind.
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Checkbox => FieldValue::Checked(false),
        }
    }

    /// Text content; a checkbox value reads as empty text.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(_) => "",
        }
    }

    /// Checked flag; a text value reads as unchecked.
    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

/// Snapshot of every field, taken fresh at the start of each event.
///
/// Validators read their own field from here, and confirm-password reads the
/// password next to it, so a snapshot never outlives the event it was taken
/// for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub terms: bool,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot by reading every field through `read`.
    pub fn collect<F>(mut read: F) -> Self
    where
        F: FnMut(FieldName) -> FieldValue,
    {
        let mut values = Self::new();
        for field in FieldName::ALL {
            values.set(field, read(field));
        }
        values
    }

    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Terms => FieldValue::Checked(self.terms),
            _ => FieldValue::Text(self.text(field).to_string()),
        }
    }

    /// Text of a text field; the checkbox reads as empty.
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::Age => &self.age,
            FieldName::Terms => "",
        }
    }

    /// Store `value`; a value of the wrong kind stores the field's empty value.
    pub fn set(&mut self, field: FieldName, value: impl Into<FieldValue>) {
        let value = value.into();
        let text = value.as_text().to_string();
        match field {
            FieldName::FullName => self.full_name = text,
            FieldName::Email => self.email = text,
            FieldName::Phone => self.phone = text,
            FieldName::Password => self.password = text,
            FieldName::ConfirmPassword => self.confirm_password = text,
            FieldName::Age => self.age = text,
            FieldName::Terms => self.terms = value.is_checked(),
        }
    }

    /// Builder-style `set`, handy in tests and demos.
    pub fn with(mut self, field: FieldName, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }
}
