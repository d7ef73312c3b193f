//! # card-entry
//!
//! A renderer-agnostic engine for a card-details entry form.
//!
//! ## Design Principles
//!
//! 1. **Renderer-Agnostic**: No DOM, no widgets, no I/O. Hosts feed
//!    `FormEvent`s in and project `FormView`s out.
//!
//! 2. **Pure Transitions**: All behavior is the transition function
//!    `state × event → state`. No globals, no interior mutability.
//!
//! 3. **Configuration Over Convention**: Copy, placeholders, length
//!    budgets, and the expiry window come from `FormConfig`;
//!    `FormConfig::card_details()` is the stock form.
//!
//! ## Architecture
//!
//! - **Explicit Validation Rules**: Field shapes are named predicate
//!   functions, not regexes. Failures are `FieldError` values stored in
//!   state; their `Display` output is the inline message.
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs` so
//!   hosts can snapshot per frame.
//!
//! - **Two-Screen Lifecycle**: Entry until a submit passes every field,
//!   confirmation until dismissed, then back to an empty entry screen.
//!
//! ## Modules
//!
//! - `core`: Field IDs, state, events, configuration
//! - `input`: Keystroke transforms (digit filtering, grouping, clamping)
//! - `validate`: Shape predicates and field errors
//! - `form`: The event-to-state engine
//! - `view`: Screen, card preview, and per-field projections

pub mod core;
pub mod form;
pub mod input;
pub mod validate;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    ConfirmationCopy, ExpiryWindow, FieldConfig, FieldId, FieldMap, FormConfig, PreviewDefaults,
    EventRecord, FormEvent,
    FormState, SnapshotError,
};

pub use crate::input::{card_number_transform, digits_only, group_digits};

pub use crate::validate::{validate_field, FieldError};

pub use crate::form::FormEngine;

pub use crate::view::{CardPreview, FieldView, FormView, Screen};
