//! End-to-end flows through the controller and the in-memory port.

use formguard::config::FormConfig;
use formguard::fields::{FieldName, FormValues, PasswordStrength};
use formguard::form::{FormController, FormState, ManualClock, SubmissionOutcome, SubmitError};
use formguard::port::{InMemoryForm, Validity};
use formguard::registry::ValidatorRegistry;
use std::time::Duration;

fn controller_with(clock: &ManualClock, config: FormConfig) -> FormController<ManualClock> {
    FormController::with_clock(ValidatorRegistry::registration(), config, clock.clone())
}

fn valid_values() -> FormValues {
    FormValues::new()
        .with(FieldName::FullName, "John Smith")
        .with(FieldName::Email, "a@b.com")
        .with(FieldName::Phone, "5551234567")
        .with(FieldName::Password, "Abcdef1!")
        .with(FieldName::ConfirmPassword, "Abcdef1!")
        .with(FieldName::Age, "18")
        .with(FieldName::Terms, true)
}

#[test]
fn changing_password_revalidates_confirmation() {
    let clock = ManualClock::new();
    let mut controller = controller_with(&clock, FormConfig::default());
    let mut form = InMemoryForm::new();

    form.input(FieldName::Password, "Abcdef1!");
    controller.field_changed(&mut form, FieldName::Password);
    form.input(FieldName::ConfirmPassword, "Abcdef1!");
    controller.field_changed(&mut form, FieldName::ConfirmPassword);
    assert_eq!(form.validity(FieldName::ConfirmPassword), Some(Validity::Valid));

    // Only the password is touched; the confirmation must follow.
    form.input(FieldName::Password, "Abcdef2!");
    controller.field_changed(&mut form, FieldName::Password);

    assert_eq!(form.error(FieldName::ConfirmPassword), "Passwords do not match");
    assert_eq!(form.validity(FieldName::ConfirmPassword), Some(Validity::Invalid));

    form.input(FieldName::Password, "Abcdef1!");
    controller.field_changed(&mut form, FieldName::Password);
    assert_eq!(form.error(FieldName::ConfirmPassword), "");
}

#[test]
fn one_failing_field_rejects_and_focuses_it() {
    for failing in FieldName::ALL {
        let clock = ManualClock::new();
        let mut controller = controller_with(&clock, FormConfig::default());
        let mut values = valid_values();
        match failing {
            FieldName::Terms => values.set(failing, false),
            // Emptying the password also breaks the confirmation; break the
            // confirmation alone instead when testing the password.
            FieldName::Password => {
                values.set(FieldName::Password, "abcdefgh");
                values.set(FieldName::ConfirmPassword, "abcdefgh");
            }
            _ => values.set(failing, ""),
        }
        let mut form = InMemoryForm::with_values(values);

        let outcome = controller.submit(&mut form).unwrap();

        assert_eq!(outcome.invalid_fields(), vec![failing], "{failing}");
        assert_eq!(form.focus_log(), &[failing]);
        assert!(!form.success_visible());
        assert_eq!(controller.state(), FormState::Idle);
        assert!(!form.error(failing).is_empty());
    }
}

#[test]
fn submission_runs_every_validator() {
    let clock = ManualClock::new();
    let mut controller = controller_with(&clock, FormConfig::default());
    let mut form = InMemoryForm::new();

    let outcome = controller.submit(&mut form).unwrap();

    assert_eq!(outcome.invalid_fields(), FieldName::ALL.to_vec());
    assert_eq!(outcome.first_invalid(), Some(FieldName::FullName));
    assert_eq!(form.focus_log(), &[FieldName::FullName]);
    assert_eq!(form.error(FieldName::FullName), "Full name is required");
    assert_eq!(form.error(FieldName::Email), "Email address is required");
    assert_eq!(form.error(FieldName::Phone), "Phone number is required");
    assert_eq!(form.error(FieldName::Password), "Password is required");
    assert_eq!(
        form.error(FieldName::ConfirmPassword),
        "Please confirm your password"
    );
    assert_eq!(form.error(FieldName::Age), "Age is required");
    assert_eq!(
        form.error(FieldName::Terms),
        "You must agree to the terms and conditions"
    );
}

#[test]
fn success_reverts_after_configured_delay() {
    let clock = ManualClock::new();
    let config = FormConfig::builder()
        .reset_delay(Duration::from_millis(500))
        .build()
        .unwrap();
    let mut controller = controller_with(&clock, config);
    let mut form = InMemoryForm::with_values(valid_values());

    form.input(FieldName::Password, "Abcdef1!");
    controller.field_changed(&mut form, FieldName::Password);
    assert!(form.strength().is_complete());

    let outcome = controller.submit(&mut form).unwrap();
    assert!(outcome.is_accepted());
    assert!(form.success_visible());
    for field in FieldName::ALL {
        assert_eq!(form.error(field), "");
    }
    assert_eq!(form.validity(FieldName::Email), Some(Validity::Valid));

    clock.advance(Duration::from_millis(499));
    assert!(!controller.poll_reset(&mut form));
    clock.advance(Duration::from_millis(1));
    assert!(controller.poll_reset(&mut form));

    assert_eq!(form.values(), &FormValues::default());
    assert!(form.is_pristine());
    assert!(!form.success_visible());
    assert_eq!(form.strength(), PasswordStrength::cleared());
    assert_eq!(controller.state(), FormState::Idle);
    assert_eq!(controller.history().count_entries(&FormState::Success), 1);
}

#[test]
fn form_can_be_submitted_again_after_reset() {
    let clock = ManualClock::new();
    let mut controller = controller_with(&clock, FormConfig::default());
    let mut form = InMemoryForm::with_values(valid_values());

    controller.submit(&mut form).unwrap();
    assert!(matches!(
        controller.submit(&mut form),
        Err(SubmitError::ResetPending { .. })
    ));

    clock.advance(Duration::from_secs(3));
    assert!(controller.poll_reset(&mut form));

    // Values were cleared by the reset, so the next attempt is rejected.
    let outcome = controller.submit(&mut form).unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Rejected { .. }));
}

#[test]
fn edits_while_reset_pending_are_still_validated() {
    let clock = ManualClock::new();
    let mut controller = controller_with(&clock, FormConfig::default());
    let mut form = InMemoryForm::with_values(valid_values());

    controller.submit(&mut form).unwrap();
    form.input(FieldName::Age, "121");
    let result = controller.field_changed(&mut form, FieldName::Age);

    assert_eq!(result.message(), "Please enter a valid age");
    assert_eq!(controller.state(), FormState::Success);
}

#[test]
fn custom_registry_rules_are_used() {
    let clock = ManualClock::new();
    let registry = ValidatorRegistry::builder()
        .rule(FieldName::Phone, |values: &FormValues| {
            if values.phone.starts_with('+') {
                formguard::ValidationResult::valid()
            } else {
                formguard::ValidationResult::invalid("Use international format")
            }
        })
        .with_defaults()
        .build()
        .unwrap();
    let mut controller = FormController::with_clock(registry, FormConfig::default(), clock);
    let mut form = InMemoryForm::with_values(valid_values());

    let outcome = controller.submit(&mut form).unwrap();
    assert_eq!(outcome.first_invalid(), Some(FieldName::Phone));
    assert_eq!(form.error(FieldName::Phone), "Use international format");
}
