//! Registration Form Walkthrough
//!
//! This example drives a form through typing, a rejected submission, a
//! successful one and the timed reset, using the in-memory port and a
//! manual clock.
//!
//! Run with: cargo run --example registration

use formguard::config::FormConfig;
use formguard::fields::{FieldName, Requirement};
use formguard::form::{Clock, FormController, ManualClock, SubmissionOutcome};
use formguard::port::InMemoryForm;
use formguard::registry::ValidatorRegistry;
use std::time::Duration;

fn print_checklist(form: &InMemoryForm) {
    let strength = form.strength();
    for requirement in Requirement::ALL {
        let mark = if strength.is_met(requirement) { "x" } else { " " };
        println!("    [{mark}] {}", requirement.checklist_key());
    }
}

fn main() {
    println!("=== Registration Form Example ===\n");

    let clock = ManualClock::new();
    let mut controller = FormController::with_clock(
        ValidatorRegistry::registration(),
        FormConfig::default(),
        clock.clone(),
    );
    let mut form = InMemoryForm::new();

    println!("Typing a weak password:");
    form.input(FieldName::Password, "secret");
    let result = controller.field_changed(&mut form, FieldName::Password);
    println!("  error: {}", result.message());
    print_checklist(&form);

    println!("\nStrengthening it:");
    form.input(FieldName::Password, "Secret12!");
    controller.field_changed(&mut form, FieldName::Password);
    print_checklist(&form);

    println!("\nSubmitting with most fields empty:");
    match controller.submit(&mut form) {
        Ok(SubmissionOutcome::Rejected { failures }) => {
            for failure in &failures {
                println!("  {failure}");
            }
            println!("  scrolled to: {:?}", form.focus_log().last());
        }
        Ok(other) => println!("  unexpected: {other:?}"),
        Err(err) => println!("  refused: {err}"),
    }

    println!("\nFilling in the rest and submitting again:");
    form.input(FieldName::FullName, "Ada Lovelace");
    form.input(FieldName::Email, "ada@example.com");
    form.input(FieldName::Phone, "0123456789");
    form.input(FieldName::ConfirmPassword, "Secret12!");
    form.input(FieldName::Age, "36");
    form.input(FieldName::Terms, true);
    match controller.submit(&mut form) {
        Ok(SubmissionOutcome::Accepted { reset }) => {
            println!("  accepted, success shown: {}", form.success_visible());
            println!("  reset due in {:?}", reset.remaining(clock.now()));
        }
        Ok(other) => println!("  unexpected: {other:?}"),
        Err(err) => println!("  refused: {err}"),
    }

    clock.advance(Duration::from_secs(3));
    controller.poll_reset(&mut form);
    println!("\nAfter 3 seconds:");
    println!("  success shown: {}", form.success_visible());
    println!("  form pristine: {}", form.is_pristine());
    println!("  state: {:?}", controller.state());

    println!("\n=== Example Complete ===");
}
