//! Builder API for validator registries.

use crate::fields::{rules, FieldName, FormValues, ValidationResult};
use crate::registry::error::BuildError;
use crate::registry::{ValidationRule, ValidatorRegistry};
use std::collections::BTreeMap;

/// Builder for a [`ValidatorRegistry`].
///
/// Every field must end up with a rule; `build` refuses a registry with gaps.
pub struct RegistryBuilder {
    rules: BTreeMap<FieldName, ValidationRule>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Register (or replace) the rule for `field`
    pub fn rule<F>(mut self, field: FieldName, rule: F) -> Self
    where
        F: Fn(&FormValues) -> ValidationResult + Send + Sync + 'static,
    {
        self.rules.insert(field, Box::new(rule));
        self
    }

    /// Fill every field that has no rule yet with its built-in validator.
    pub fn with_defaults(mut self) -> Self {
        for field in FieldName::ALL {
            if !self.rules.contains_key(&field) {
                let rule: ValidationRule =
                    Box::new(move |values: &FormValues| rules::validate(field, values));
                self.rules.insert(field, rule);
            }
        }
        self
    }

    pub fn build(self) -> Result<ValidatorRegistry, BuildError> {
        if let Some(field) = FieldName::ALL
            .into_iter()
            .find(|field| !self.rules.contains_key(field))
        {
            return Err(BuildError::MissingRule { field });
        }
        Ok(ValidatorRegistry { rules: self.rules })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_every_field() {
        let result = RegistryBuilder::new()
            .rule(FieldName::FullName, |_| ValidationResult::valid())
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::MissingRule {
                field: FieldName::Email
            })
        );
    }

    #[test]
    fn defaults_fill_the_gaps() {
        let registry = RegistryBuilder::new()
            .rule(FieldName::Phone, |_| ValidationResult::invalid("no phones"))
            .with_defaults()
            .build()
            .unwrap();

        let values = FormValues::new().with(FieldName::Phone, "0123456789");
        assert_eq!(registry.validate(FieldName::Phone, &values).message(), "no phones");
        assert_eq!(
            registry.validate(FieldName::FullName, &values).message(),
            "Full name is required"
        );
    }

    #[test]
    fn later_rule_replaces_earlier() {
        let registry = RegistryBuilder::new()
            .rule(FieldName::Age, |_| ValidationResult::invalid("first"))
            .rule(FieldName::Age, |_| ValidationResult::valid())
            .with_defaults()
            .build()
            .unwrap();

        assert!(registry.validate(FieldName::Age, &FormValues::new()).is_valid());
    }
}
