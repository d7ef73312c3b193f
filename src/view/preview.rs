//! Card preview projection.
//!
//! The preview mirrors the entry fields onto the card artwork, falling
//! back to configured placeholder values while a field is empty. It is a
//! pure projection; the state is never consulted for errors or flags.

use serde::{Deserialize, Serialize};

use crate::core::{FieldId, FormState, PreviewDefaults};

/// Display strings for the card artwork.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPreview {
    /// Grouped card number, or the placeholder number.
    pub number: String,

    /// Holder name as entered, or the placeholder holder.
    pub holder: String,

    /// `MM/YY`, each part substituted independently when empty.
    pub expiry: String,
}

impl CardPreview {
    /// Project the preview from the current field values.
    #[must_use]
    pub fn project(state: &FormState, defaults: &PreviewDefaults) -> Self {
        let part = |field: FieldId, default: &str| -> String {
            let value = state.value(field);
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };

        let month = part(FieldId::ExpiryMonth, &defaults.month);
        let year = part(FieldId::ExpiryYear, &defaults.year);

        Self {
            number: part(FieldId::CardNumber, &defaults.number),
            holder: part(FieldId::CardHolder, &defaults.holder),
            expiry: format!("{}/{}", month, year),
        }
    }
}
