//! Full view projection: which screen renders, and with what.
//!
//! `FormView::project` flattens state + configuration into plain display
//! data - screen selection, card preview, per-field copy and error
//! messages - so a host renders without touching validation logic.

use serde::{Deserialize, Serialize};

use super::preview::CardPreview;
use crate::core::{ConfirmationCopy, FieldId, FieldMap, FormConfig, FormState};

/// Which of the two screens renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// The entry form.
    Entry,
    /// The post-submit confirmation.
    Confirmation,
}

impl Screen {
    /// The screen the given state renders.
    #[must_use]
    pub fn of(state: &FormState) -> Self {
        if state.completed {
            Screen::Confirmation
        } else {
            Screen::Entry
        }
    }
}

/// Display data for one input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    /// The field this renders.
    pub field: FieldId,

    /// Current value, post-transform.
    pub value: String,

    /// Label above the input.
    pub label: String,

    /// Placeholder inside the empty input.
    pub placeholder: String,

    /// Input length budget, if any.
    pub max_len: Option<usize>,

    /// Inline error message from the last validation pass.
    pub error: Option<String>,
}

impl FieldView {
    /// Whether the input renders in its error style.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// The complete projected view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    /// Which screen renders.
    pub screen: Screen,

    /// Card artwork display strings.
    pub preview: CardPreview,

    /// Per-field display data.
    pub fields: FieldMap<FieldView>,

    /// Submit button label.
    pub submit_label: String,

    /// Confirmation screen copy.
    pub confirmation: ConfirmationCopy,
}

impl FormView {
    /// Project the view for the current state.
    #[must_use]
    pub fn project(state: &FormState, config: &FormConfig) -> Self {
        let fields = FieldMap::new(|field| {
            let field_config = config.field(field);
            FieldView {
                field,
                value: state.value(field).to_string(),
                label: field_config.label.clone(),
                placeholder: field_config.placeholder.clone(),
                max_len: field_config.max_len,
                error: state
                    .error(field)
                    .map(|error| config.error_message(field, error)),
            }
        });

        Self {
            screen: Screen::of(state),
            preview: CardPreview::project(state, &config.preview),
            fields,
            submit_label: config.submit_label.clone(),
            confirmation: config.confirmation.clone(),
        }
    }

    /// Get one field's view.
    #[must_use]
    pub fn field(&self, field: FieldId) -> &FieldView {
        &self.fields[field]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::FieldError;

    #[test]
    fn test_screen_selection() {
        let mut state = FormState::new();
        assert_eq!(Screen::of(&state), Screen::Entry);

        state.completed = true;
        assert_eq!(Screen::of(&state), Screen::Confirmation);
    }

    #[test]
    fn test_project_empty_form() {
        let state = FormState::new();
        let view = FormView::project(&state, &FormConfig::card_details());

        assert_eq!(view.screen, Screen::Entry);
        assert_eq!(view.preview.number, "0000 0000 0000 0000");
        assert_eq!(view.submit_label, "Confirm");
        assert_eq!(view.confirmation.heading, "Thank you!");

        let holder = view.field(FieldId::CardHolder);
        assert_eq!(holder.label, "Cardholder Name");
        assert_eq!(holder.placeholder, "e.g. Jane Appleseed");
        assert_eq!(holder.value, "");
        assert!(!holder.has_error());
    }

    #[test]
    fn test_project_error_messages() {
        let mut state = FormState::new();
        state.set_error(FieldId::CardNumber, Some(FieldError::Required));
        state.set_error(FieldId::Cvc, Some(FieldError::InvalidCvc));

        let view = FormView::project(&state, &FormConfig::card_details());

        assert_eq!(
            view.field(FieldId::CardNumber).error.as_deref(),
            Some("This field is required")
        );
        assert_eq!(
            view.field(FieldId::Cvc).error.as_deref(),
            Some("Must be a valid cvc")
        );
        assert_eq!(view.field(FieldId::CardHolder).error, None);
    }

    #[test]
    fn test_project_honors_message_override() {
        let mut state = FormState::new();
        state.set_error(FieldId::Cvc, Some(FieldError::InvalidCvc));

        let config = FormConfig::card_details()
            .with_invalid_message(FieldId::Cvc, "Security code must be 3 digits");
        let view = FormView::project(&state, &config);

        assert_eq!(
            view.field(FieldId::Cvc).error.as_deref(),
            Some("Security code must be 3 digits")
        );
    }

    #[test]
    fn test_project_confirmation_screen() {
        let mut state = FormState::new();
        state.completed = true;

        let view = FormView::project(&state, &FormConfig::card_details());

        assert_eq!(view.screen, Screen::Confirmation);
        assert_eq!(view.confirmation.detail, "We've added your card details");
        assert_eq!(view.confirmation.action, "Continue");
    }

    #[test]
    fn test_view_serialization() {
        let view = FormView::project(&FormState::new(), &FormConfig::card_details());

        let json = serde_json::to_string(&view).unwrap();
        let deserialized: FormView = serde_json::from_str(&json).unwrap();

        assert_eq!(view, deserialized);
    }
}
