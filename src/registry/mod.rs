//! The validator registry: one rule per field.
//!
//! A registry maps each [`FieldName`] to a pure rule over the form snapshot.
//! Single-field validation follows the rule's own check order; a form-wide
//! check runs every rule and accumulates all failures with stillwater's
//! `Validation`, instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use formguard::fields::{FieldName, FormValues};
//! use formguard::registry::ValidatorRegistry;
//!
//! let registry = ValidatorRegistry::registration();
//! let values = FormValues::new().with(FieldName::FullName, "John Smith");
//!
//! assert!(registry.validate(FieldName::FullName, &values).is_valid());
//! assert!(registry.enforce(&values).is_failure());
//! ```

mod builder;
mod error;

pub use builder::RegistryBuilder;
pub use error::{BuildError, FieldFailure};

use crate::fields::{rules, FieldName, FormValues, ValidationResult};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for field validation rules
pub type ValidationRule = Box<dyn Fn(&FormValues) -> ValidationResult + Send + Sync>;

/// Per-field outcome of a form-wide check, in form order.
pub type FieldResults = Vec<(FieldName, ValidationResult)>;

/// Rules for every field of the form.
pub struct ValidatorRegistry {
    pub(crate) rules: BTreeMap<FieldName, ValidationRule>,
}

impl ValidatorRegistry {
    /// Registry with the built-in registration-form rules.
    pub fn registration() -> Self {
        let rules = FieldName::ALL
            .into_iter()
            .map(|field| {
                let rule: ValidationRule =
                    Box::new(move |values: &FormValues| rules::validate(field, values));
                (field, rule)
            })
            .collect();
        Self { rules }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Run the rule for one field.
    pub fn validate(&self, field: FieldName, values: &FormValues) -> ValidationResult {
        match self.rules.get(&field) {
            Some(rule) => rule(values),
            // The builder guarantees a rule per field.
            None => rules::validate(field, values),
        }
    }

    /// Run every rule, without short-circuiting, in form order.
    pub fn validate_all(&self, values: &FormValues) -> FieldResults {
        FieldName::ALL
            .into_iter()
            .map(|field| (field, self.validate(field, values)))
            .collect()
    }

    /// Fold per-field results into one accumulated outcome.
    /// Failures keep form order, so the head is the first invalid field.
    pub fn aggregate(
        results: &[(FieldName, ValidationResult)],
    ) -> Validation<(), NonEmptyVec<FieldFailure>> {
        let checks: Vec<Validation<(), NonEmptyVec<FieldFailure>>> = results
            .iter()
            .map(|(field, result)| {
                if result.is_valid() {
                    Validation::success(())
                } else {
                    Validation::fail(FieldFailure {
                        field: *field,
                        message: result.message().to_string(),
                    })
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Check the whole form, accumulating ALL failing fields.
    pub fn enforce(&self, values: &FormValues) -> Validation<(), NonEmptyVec<FieldFailure>> {
        Self::aggregate(&self.validate_all(values))
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::registration()
    }
}
