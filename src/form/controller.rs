//! Wires presentation events to the validator registry.

use crate::config::FormConfig;
use crate::core::{State, StateHistory, StateTransition};
use crate::fields::{FieldKind, FieldName, FormValues, PasswordStrength, ValidationResult};
use crate::form::error::SubmitError;
use crate::form::outcome::SubmissionOutcome;
use crate::form::schedule::{Clock, PendingReset, ResetToken, SystemClock};
use crate::form::state::FormState;
use crate::port::{PresentationPort, Validity};
use crate::registry::{FieldResults, ValidatorRegistry};
use stillwater::validation::Validation;
use tracing::{debug, info};

/// Controller for one rendered registration form.
///
/// Owns the rules, the lifecycle state and the pending reset. Field values
/// stay with the [`PresentationPort`]; each event reads a fresh snapshot.
pub struct FormController<C: Clock = SystemClock> {
    registry: ValidatorRegistry,
    config: FormConfig,
    clock: C,
    state: FormState,
    history: StateHistory<FormState>,
    pending: Option<PendingReset>,
}

impl FormController<SystemClock> {
    /// Built-in rules, default configuration, wall-clock time.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    pub fn with_config(config: FormConfig) -> Self {
        Self::with_clock(ValidatorRegistry::registration(), config, SystemClock)
    }
}

impl Default for FormController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FormController<C> {
    pub fn with_clock(registry: ValidatorRegistry, config: FormConfig, clock: C) -> Self {
        Self {
            registry,
            config,
            clock,
            state: FormState::Idle,
            history: StateHistory::new(),
            pending: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn history(&self) -> &StateHistory<FormState> {
        &self.history
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn pending_reset(&self) -> Option<&PendingReset> {
        self.pending.as_ref()
    }

    /// Validate `field` after the user changed it and render the result.
    ///
    /// A password change also refreshes the strength checklist and, when a
    /// confirmation has been typed, re-validates it against the new password.
    pub fn field_changed<P: PresentationPort>(
        &mut self,
        port: &mut P,
        field: FieldName,
    ) -> ValidationResult {
        let values = snapshot(port);
        let result = self.registry.validate(field, &values);
        render(port, field, &result);

        if field == FieldName::Password {
            port.set_strength(&PasswordStrength::evaluate(&values.password));
            if !values.confirm_password.is_empty() {
                let confirm = self.registry.validate(FieldName::ConfirmPassword, &values);
                render(port, FieldName::ConfirmPassword, &confirm);
            }
        }

        result
    }

    /// Validate every field and either accept the form or point the user at
    /// the first invalid field.
    ///
    /// All seven rules run even after one fails so every field shows its
    /// state. Refused while a previous success is still waiting for its reset.
    pub fn submit<P: PresentationPort>(
        &mut self,
        port: &mut P,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if let Some(pending) = &self.pending {
            debug!(token = %pending.token, "Submission refused while reset pending");
            return Err(SubmitError::ResetPending {
                due_at: pending.due_at,
            });
        }

        self.transition(FormState::Validating, "submit");

        let values = snapshot(port);
        let results: FieldResults = self.registry.validate_all(&values);
        for (field, result) in &results {
            render(port, *field, result);
        }

        match ValidatorRegistry::aggregate(&results) {
            Validation::Success(_) => {
                self.transition(FormState::Success, "submit");
                port.set_success_visible(true);

                let pending = PendingReset::after(self.clock.now(), self.config.reset_delay());
                info!(
                    token = %pending.token,
                    due_at = %pending.due_at,
                    "Registration form accepted"
                );
                self.pending = Some(pending.clone());
                Ok(SubmissionOutcome::Accepted { reset: pending })
            }
            Validation::Failure(errors) => {
                let failures: Vec<_> = errors.iter().cloned().collect();
                self.transition(FormState::Rejected, "submit");

                if let Some(first) = failures.first() {
                    port.bring_into_view(first.field);
                }
                info!(invalid = failures.len(), "Registration form rejected");

                self.transition(FormState::Idle, "submit");
                Ok(SubmissionOutcome::Rejected { failures })
            }
        }
    }

    /// Fire the pending reset if its deadline has passed.
    /// Returns true when a reset ran.
    pub fn poll_reset<P: PresentationPort>(&mut self, port: &mut P) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.is_due(self.clock.now()));
        if due {
            self.clear_form(port, "reset timer");
        }
        due
    }

    /// Cancel the pending reset identified by `token`.
    ///
    /// The success indicator is hidden and the form goes back to `Idle` with
    /// its values kept. Returns false if `token` is not the pending reset.
    pub fn cancel_reset<P: PresentationPort>(&mut self, port: &mut P, token: ResetToken) -> bool {
        match &self.pending {
            Some(pending) if pending.token == token => {
                info!(token = %token, "Form reset cancelled");
                self.pending = None;
                port.set_success_visible(false);
                self.transition(FormState::Idle, "reset cancelled");
                true
            }
            _ => false,
        }
    }

    /// Reset the form immediately, whatever its state.
    pub fn reset_now<P: PresentationPort>(&mut self, port: &mut P) {
        self.clear_form(port, "forced reset");
    }

    fn clear_form<P: PresentationPort>(&mut self, port: &mut P, cause: &str) {
        port.clear_values();
        for field in FieldName::ALL {
            port.set_error(field, "");
            port.set_validity(field, None);
        }
        port.set_strength(&PasswordStrength::cleared());
        port.set_success_visible(false);

        self.pending = None;
        info!(cause = %cause, "Registration form reset");
        self.transition(FormState::Idle, cause);
    }

    fn transition(&mut self, to: FormState, cause: &str) {
        if self.state == to {
            return;
        }
        debug!(
            from = self.state.name(),
            to = to.name(),
            cause = %cause,
            "Form state changed"
        );
        self.history.record(StateTransition {
            from: self.state,
            to,
            timestamp: self.clock.now(),
            cause: cause.to_string(),
        });
        self.state = to;
    }
}

fn snapshot<P: PresentationPort>(port: &P) -> FormValues {
    FormValues::collect(|field| port.read_value(field))
}

/// Write one result to the field's sinks. The checkbox gets its message but
/// no validity styling.
fn render<P: PresentationPort>(port: &mut P, field: FieldName, result: &ValidationResult) {
    debug!(field = field.key(), valid = result.is_valid(), "Field validated");
    port.set_error(field, result.message());
    if field.kind() == FieldKind::Text {
        port.set_validity(field, Some(Validity::from_valid(result.is_valid())));
    }
}
