//! Field validation rules as named predicates.
//!
//! Each form field has one lexical/numeric shape rule. The rules are plain
//! predicate functions over `&str` so they stay portable and independently
//! testable; `validate_field` dispatches a field to its rule and maps
//! failures to the field's error.

use crate::core::{ExpiryWindow, FieldId};

use super::error::FieldError;

/// Parse a non-empty all-digit string to its integer value.
///
/// Returns `None` for empty input, any non-digit character, or overflow.
fn parse_numeric(value: &str) -> Option<u32> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Exactly 4 groups of 4 ASCII digits joined by single spaces.
#[must_use]
pub fn is_grouped_card_number(value: &str) -> bool {
    let mut groups = 0;
    for group in value.split(' ') {
        if group.len() != 4 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

/// At least two words, each of at least two ASCII letters, separated by
/// exactly one whitespace character each, with no leading or trailing
/// whitespace.
#[must_use]
pub fn is_holder_name(value: &str) -> bool {
    let mut words = 0;
    for word in value.split(char::is_whitespace) {
        if word.len() < 2 || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        words += 1;
    }
    words >= 2
}

/// A numeric month in 1..=12.
#[must_use]
pub fn is_month(value: &str) -> bool {
    parse_numeric(value).is_some_and(|month| (1..=12).contains(&month))
}

/// A numeric two-digit year inside the accepted window.
#[must_use]
pub fn is_year_in_window(value: &str, window: ExpiryWindow) -> bool {
    parse_numeric(value).is_some_and(|year| window.contains(year))
}

/// Exactly three ASCII digits.
#[must_use]
pub fn is_cvc(value: &str) -> bool {
    value.len() == 3 && value.chars().all(|c| c.is_ascii_digit())
}

/// Validate one field's value against its rule.
///
/// An empty value is always `Required`; otherwise the field's shape rule
/// decides. The expiry window comes from configuration.
pub fn validate_field(
    field: FieldId,
    value: &str,
    window: ExpiryWindow,
) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }

    let passes = match field {
        FieldId::CardNumber => is_grouped_card_number(value),
        FieldId::CardHolder => is_holder_name(value),
        FieldId::ExpiryMonth => is_month(value),
        FieldId::ExpiryYear => is_year_in_window(value, window),
        FieldId::Cvc => is_cvc(value),
    };

    if passes {
        Ok(())
    } else {
        Err(FieldError::invalid(field))
    }
}
