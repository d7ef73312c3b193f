//! Field validation: shape rules and their errors.
//!
//! Rules are named predicate functions over `&str`; failures surface as
//! `FieldError` values stored in the form state, never as propagated
//! errors. The displayed message is the error's `Display` output (or a
//! configured override).

pub mod error;
pub mod rules;

pub use error::FieldError;
pub use rules::{
    is_cvc, is_grouped_card_number, is_holder_name, is_month, is_year_in_window, validate_field,
};
