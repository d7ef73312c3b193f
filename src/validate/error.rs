//! Field validation errors.
//!
//! A `FieldError` is a value, not a control-flow error: it lives inside the
//! form state and its `Display` output is the exact inline message a host
//! renders under the field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::FieldId;

/// Why a field failed its last validation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum FieldError {
    /// The field was empty on a validation pass.
    #[error("This field is required")]
    Required,

    /// Not 4 space-separated groups of 4 digits.
    #[error("Must be a valid card number")]
    InvalidCardNumber,

    /// Not at least two words of at least two letters each.
    #[error("Must be a valid card holder name")]
    InvalidCardHolder,

    /// Not a number in 1..=12.
    #[error("Must be a valid month")]
    InvalidMonth,

    /// Not a number inside the accepted expiry window.
    #[error("Must be a valid year")]
    InvalidYear,

    /// Not exactly three digits.
    #[error("Must be a valid cvc")]
    InvalidCvc,
}

impl FieldError {
    /// The invalid-variant for a given field.
    #[must_use]
    pub fn invalid(field: FieldId) -> Self {
        match field {
            FieldId::CardNumber => FieldError::InvalidCardNumber,
            FieldId::CardHolder => FieldError::InvalidCardHolder,
            FieldId::ExpiryMonth => FieldError::InvalidMonth,
            FieldId::ExpiryYear => FieldError::InvalidYear,
            FieldId::Cvc => FieldError::InvalidCvc,
        }
    }

    /// Whether this is the empty-field error.
    #[must_use]
    pub fn is_required(self) -> bool {
        self == FieldError::Required
    }
}
