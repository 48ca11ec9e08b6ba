//! Property-based tests for the field validators and the strength checklist.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use formguard::fields::{rules, FieldName, FormValues, PasswordStrength, Requirement};
use formguard::registry::ValidatorRegistry;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_form()(
        full_name in ".{0,60}",
        email in "[a-z0-9.@_-]{0,20}",
        phone in "[0-9 ]{0,12}",
        password in ".{0,16}",
        confirm_password in ".{0,16}",
        age in "-?[0-9]{0,4}|[a-z ]{0,3}",
        terms in any::<bool>(),
    ) -> FormValues {
        FormValues {
            full_name,
            email,
            phone,
            password,
            confirm_password,
            age,
            terms,
        }
    }
}

proptest! {
    #[test]
    fn message_is_empty_iff_valid(values in arbitrary_form()) {
        let registry = ValidatorRegistry::registration();
        for field in FieldName::ALL {
            let result = registry.validate(field, &values);
            prop_assert_eq!(result.is_valid(), result.message().is_empty());
        }
    }

    #[test]
    fn validators_are_idempotent(values in arbitrary_form()) {
        for field in FieldName::ALL {
            prop_assert_eq!(rules::validate(field, &values), rules::validate(field, &values));
        }
    }

    #[test]
    fn form_check_agrees_with_field_checks(values in arbitrary_form()) {
        let registry = ValidatorRegistry::registration();
        let all_valid = FieldName::ALL
            .iter()
            .all(|field| registry.validate(*field, &values).is_valid());
        prop_assert_eq!(registry.enforce(&values).is_success(), all_valid);
    }

    #[test]
    fn password_valid_iff_checklist_complete(password in ".{1,20}") {
        let strength = PasswordStrength::evaluate(&password);
        prop_assert_eq!(rules::validate_password(&password).is_valid(), strength.is_complete());
    }

    #[test]
    fn password_message_names_first_missing(password in ".{1,20}") {
        let strength = PasswordStrength::evaluate(&password);
        let result = rules::validate_password(&password);
        match strength.first_missing() {
            Some(requirement) => prop_assert_eq!(result.message(), requirement.message()),
            None => prop_assert!(result.is_valid()),
        }
    }

    #[test]
    fn checklist_counts_each_requirement(password in ".{0,20}") {
        let strength = PasswordStrength::evaluate(&password);
        let met = Requirement::ALL.iter().filter(|r| r.is_met_by(&password)).count();
        prop_assert_eq!(strength.satisfied_count(), met);
    }

    #[test]
    fn ages_in_range_are_valid(age in 18i64..=120) {
        prop_assert!(rules::validate_age(&age.to_string()).is_valid());
    }

    #[test]
    fn ages_out_of_range_are_invalid(age in prop_oneof![-1000i64..18, 121i64..100_000]) {
        prop_assert!(!rules::validate_age(&age.to_string()).is_valid());
    }

    #[test]
    fn confirmation_matches_only_identical_passwords(a in ".{1,12}", b in ".{1,12}") {
        let result = rules::validate_confirm_password(&a, &b);
        prop_assert_eq!(result.is_valid(), a == b);
    }

    #[test]
    fn ten_digit_phones_pass(phone in "[0-9]{10}") {
        prop_assert!(rules::validate_phone(&phone).is_valid());
    }
}
