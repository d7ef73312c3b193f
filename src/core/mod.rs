//! Core engine types: fields, state, events, configuration.
//!
//! This module contains the fundamental building blocks that are
//! renderer-agnostic. Hosts configure copy and ranges via `FormConfig`
//! rather than modifying the core.

pub mod config;
pub mod event;
pub mod field;
pub mod state;

pub use config::{ConfirmationCopy, ExpiryWindow, FieldConfig, FormConfig, PreviewDefaults};
pub use event::{EventRecord, FormEvent};
pub use field::{FieldId, FieldMap, FIELD_COUNT};
pub use state::{FormState, SnapshotError};
