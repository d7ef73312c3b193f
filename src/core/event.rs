//! Form events: the inputs of the state transition function.
//!
//! Every change to the form flows through a `FormEvent`:
//! - `Edit` carries a keystroke-level value change for one field
//! - `Submit` requests a full validation pass
//! - `ClearCardNumber` is the preview's one-field clear affordance
//! - `Continue` dismisses the confirmation screen
//!
//! The engine doesn't render anything - it just folds events into state.

use serde::{Deserialize, Serialize};

use super::field::FieldId;

/// A single form event.
///
/// ## Example
///
/// ```
/// use card_entry::core::{FieldId, FormEvent};
///
/// // Typing into the CVC field
/// let edit = FormEvent::edit(FieldId::Cvc, "123");
///
/// // Pressing the confirm button
/// let submit = FormEvent::Submit;
///
/// assert_ne!(edit, submit);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormEvent {
    /// The host input for `field` changed to `input` (raw, pre-transform).
    Edit { field: FieldId, input: String },

    /// The confirm button was pressed.
    Submit,

    /// The clear affordance on the card-number input was pressed.
    ClearCardNumber,

    /// The confirmation screen's continue button was pressed.
    Continue,
}

impl FormEvent {
    /// Create an edit event.
    #[must_use]
    pub fn edit(field: FieldId, input: impl Into<String>) -> Self {
        FormEvent::Edit {
            field,
            input: input.into(),
        }
    }

    /// The field this event targets, if it targets exactly one.
    #[must_use]
    pub fn field(&self) -> Option<FieldId> {
        match self {
            FormEvent::Edit { field, .. } => Some(*field),
            FormEvent::ClearCardNumber => Some(FieldId::CardNumber),
            FormEvent::Submit | FormEvent::Continue => None,
        }
    }
}

/// A recorded event with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Host-side session inspection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The event applied.
    pub event: FormEvent,

    /// Sequence number within the session (for ordering).
    pub sequence: u32,
}

impl EventRecord {
    /// Create a new event record.
    #[must_use]
    pub fn new(event: FormEvent, sequence: u32) -> Self {
        Self { event, sequence }
    }
}
