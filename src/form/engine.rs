//! The form engine: folds events into state.
//!
//! `FormEngine` owns the configuration and implements the transition
//! function `state × event → state`:
//! - Edits run the field's input transform, then re-validate live once a
//!   submit has been attempted
//! - Submit runs the full validation pass and completes the form when
//!   every field passes
//! - Continue resets a completed form back to an empty entry screen
//!
//! The engine holds no state of its own; hosts own the `FormState` and
//! may keep as many as they like.

use log::{debug, trace};

use crate::core::{FieldId, FormConfig, FormEvent, FormState};
use crate::input::{card_number_transform, clamp_chars};
use crate::validate::validate_field;

/// Event-to-state transition engine for one form configuration.
#[derive(Clone, Debug, Default)]
pub struct FormEngine {
    config: FormConfig,
}

impl FormEngine {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    /// Engine for the stock card-details form.
    #[must_use]
    pub fn card_details() -> Self {
        Self::new(FormConfig::card_details())
    }

    /// Get the engine's configuration.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Apply one event to the state.
    ///
    /// Applied events are recorded in the state's history, except
    /// `Continue`, whose effect is resetting the session (history
    /// included).
    pub fn apply(&self, state: &mut FormState, event: FormEvent) {
        trace!("apply {:?}", event);

        match &event {
            FormEvent::Edit { field, input } => {
                state.set_value(*field, self.transform(*field, input));

                // Errors clear/update live after the first failed submit.
                if state.submitted && !state.completed {
                    self.validate(state);
                }
            }

            FormEvent::Submit => {
                if self.validate(state) {
                    state.completed = true;
                    debug!("form completed");
                }
            }

            FormEvent::ClearCardNumber => {
                state.set_value(FieldId::CardNumber, "");
            }

            FormEvent::Continue => {
                // Only reachable from the confirmation screen; a stray
                // Continue must not wipe in-progress entry.
                if state.completed {
                    state.reset();
                } else {
                    debug!("ignoring Continue on entry screen");
                }
                return;
            }
        }

        state.record_event(event);
    }

    /// Run the full validation pass over all five fields.
    ///
    /// Records per-field errors in the state, marks the submit attempt,
    /// and returns whether every field passed.
    pub fn validate(&self, state: &mut FormState) -> bool {
        state.submitted = true;

        let mut valid = true;
        for field in FieldId::all() {
            match validate_field(field, state.value(field), self.config.expiry_window) {
                Ok(()) => state.set_error(field, None),
                Err(error) => {
                    trace!("{} failed validation: {}", field, error);
                    state.set_error(field, Some(error));
                    valid = false;
                }
            }
        }

        debug!("validation pass: valid={}", valid);
        valid
    }

    /// The per-field input transform.
    fn transform(&self, field: FieldId, input: &str) -> String {
        match field {
            FieldId::CardNumber => card_number_transform(input),
            _ => match self.config.max_len(field) {
                Some(max) => clamp_chars(input, max),
                None => input.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::FieldError;

    fn engine() -> FormEngine {
        FormEngine::card_details()
    }

    fn fill_valid(engine: &FormEngine, state: &mut FormState) {
        engine.apply(state, FormEvent::edit(FieldId::CardNumber, "4242424242424242"));
        engine.apply(state, FormEvent::edit(FieldId::CardHolder, "Jane Appleseed"));
        engine.apply(state, FormEvent::edit(FieldId::ExpiryMonth, "12"));
        engine.apply(state, FormEvent::edit(FieldId::ExpiryYear, "27"));
        engine.apply(state, FormEvent::edit(FieldId::Cvc, "123"));
    }

    #[test]
    fn test_edit_card_number_groups() {
        let engine = engine();
        let mut state = FormState::new();

        engine.apply(
            &mut state,
            FormEvent::edit(FieldId::CardNumber, "4242424242424242"),
        );

        assert_eq!(state.value(FieldId::CardNumber), "4242 4242 4242 4242");
    }

    #[test]
    fn test_edit_cvc_clamps_to_budget() {
        let engine = engine();
        let mut state = FormState::new();

        engine.apply(&mut state, FormEvent::edit(FieldId::Cvc, "12345"));

        assert_eq!(state.value(FieldId::Cvc), "123");
    }

    #[test]
    fn test_edit_holder_passes_through() {
        let engine = engine();
        let mut state = FormState::new();

        engine.apply(
            &mut state,
            FormEvent::edit(FieldId::CardHolder, "Jane Appleseed"),
        );

        assert_eq!(state.value(FieldId::CardHolder), "Jane Appleseed");
    }

    #[test]
    fn test_edit_before_submit_does_not_validate() {
        let engine = engine();
        let mut state = FormState::new();

        engine.apply(&mut state, FormEvent::edit(FieldId::Cvc, "1"));

        assert!(!state.submitted);
        assert!(!state.has_errors());
    }

    #[test]
    fn test_edit_after_failed_submit_revalidates() {
        let engine = engine();
        let mut state = FormState::new();

        engine.apply(&mut state, FormEvent::Submit);
        assert_eq!(state.error(FieldId::Cvc), Some(FieldError::Required));

        engine.apply(&mut state, FormEvent::edit(FieldId::Cvc, "123"));

        // Corrected field clears without a second submit
        assert_eq!(state.error(FieldId::Cvc), None);
        // Untouched fields still carry their errors
        assert_eq!(state.error(FieldId::CardHolder), Some(FieldError::Required));
    }

    #[test]
    fn test_submit_marks_attempt_and_errors() {
        let engine = engine();
        let mut state = FormState::new();

        engine.apply(&mut state, FormEvent::Submit);

        assert!(state.submitted);
        assert!(!state.completed);
        for field in FieldId::all() {
            assert_eq!(state.error(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn test_submit_with_valid_fields_completes() {
        let engine = engine();
        let mut state = FormState::new();
        fill_valid(&engine, &mut state);

        engine.apply(&mut state, FormEvent::Submit);

        assert!(state.completed);
        assert!(!state.has_errors());
    }

    #[test]
    fn test_clear_card_number_only() {
        let engine = engine();
        let mut state = FormState::new();
        fill_valid(&engine, &mut state);
        engine.apply(&mut state, FormEvent::edit(FieldId::Cvc, "1"));
        engine.apply(&mut state, FormEvent::Submit);
        assert_eq!(state.error(FieldId::Cvc), Some(FieldError::InvalidCvc));

        engine.apply(&mut state, FormEvent::ClearCardNumber);

        assert_eq!(state.value(FieldId::CardNumber), "");
        // Other fields and all recorded errors are unaffected
        assert_eq!(state.value(FieldId::CardHolder), "Jane Appleseed");
        assert_eq!(state.error(FieldId::Cvc), Some(FieldError::InvalidCvc));
        assert_eq!(state.error(FieldId::CardNumber), None);
    }

    #[test]
    fn test_continue_resets_completed_form() {
        let engine = engine();
        let mut state = FormState::new();
        fill_valid(&engine, &mut state);
        engine.apply(&mut state, FormEvent::Submit);
        assert!(state.completed);

        engine.apply(&mut state, FormEvent::Continue);

        assert_eq!(state, FormState::new());
    }

    #[test]
    fn test_continue_ignored_on_entry_screen() {
        let engine = engine();
        let mut state = FormState::new();
        engine.apply(&mut state, FormEvent::edit(FieldId::CardHolder, "Jane"));

        engine.apply(&mut state, FormEvent::Continue);

        assert_eq!(state.value(FieldId::CardHolder), "Jane");
    }

    #[test]
    fn test_events_recorded_in_history() {
        let engine = engine();
        let mut state = FormState::new();

        engine.apply(&mut state, FormEvent::edit(FieldId::Cvc, "123"));
        engine.apply(&mut state, FormEvent::Submit);

        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[0].sequence, 0);
        assert_eq!(state.history()[1].event, FormEvent::Submit);
    }

    #[test]
    fn test_custom_expiry_window() {
        use crate::core::ExpiryWindow;

        let engine =
            FormEngine::new(FormConfig::card_details().with_expiry_window(ExpiryWindow::new(20, 40)));
        let mut state = FormState::new();
        fill_valid(&engine, &mut state);
        engine.apply(&mut state, FormEvent::edit(FieldId::ExpiryYear, "39"));

        engine.apply(&mut state, FormEvent::Submit);

        assert!(state.completed);
    }
}
