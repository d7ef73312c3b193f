//! Keystroke-level input transforms.
//!
//! Transforms run on every `Edit` event, before the value lands in state:
//! the card number is filtered to digits and regrouped, length-budgeted
//! fields are clamped. The displayed value is always the transform of the
//! raw input.

pub mod transform;

pub use transform::{card_number_transform, clamp_chars, digits_only, group_digits};
