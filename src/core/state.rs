//! Form state: the single source of truth the engine folds events into.
//!
//! ## FormState
//!
//! Everything a host needs to render the form:
//! - Field values and per-field validation errors
//! - The submitted flag (gates live re-validation after the first attempt)
//! - The completed flag (selects the entry or confirmation screen)
//! - Sequence-numbered event history

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::event::{EventRecord, FormEvent};
use super::field::{FieldId, FieldMap};
use crate::validate::FieldError;

/// Failed to encode or decode a state snapshot.
#[derive(Debug, Error)]
#[error("state snapshot codec failure: {0}")]
pub struct SnapshotError(#[from] bincode::Error);

/// Complete form state.
///
/// Uses an `im` persistent vector for the event history so cloning the
/// state is O(1) in the history length; hosts that snapshot per frame pay
/// only for the five field strings.
///
/// All mutation goes through the accessor methods; the engine in
/// `crate::form` is the only intended writer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// Current field values (post-transform, as displayed).
    values: FieldMap<String>,

    /// Outcome of the last validation pass, per field.
    errors: FieldMap<Option<FieldError>>,

    /// A submit has been attempted this session.
    pub submitted: bool,

    /// All five fields passed validation on submit; the confirmation
    /// screen renders while this is set.
    pub completed: bool,

    /// Event sequence within the session.
    event_sequence: u32,

    /// Applied events, for replay/debugging.
    history: Vector<EventRecord>,
}

impl FormState {
    /// Create an empty form state.
    ///
    /// All fields start empty, unvalidated, on the entry screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: FieldMap::with_default(),
            errors: FieldMap::with_default(),
            submitted: false,
            completed: false,
            event_sequence: 0,
            history: Vector::new(),
        }
    }

    // === Values ===

    /// Get a field's current value.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        &self.values[field]
    }

    /// Set a field's value.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field] = value.into();
    }

    /// Check if a field is empty.
    #[must_use]
    pub fn is_empty(&self, field: FieldId) -> bool {
        self.values[field].is_empty()
    }

    // === Errors ===

    /// Get a field's error from the last validation pass.
    #[must_use]
    pub fn error(&self, field: FieldId) -> Option<FieldError> {
        self.errors[field]
    }

    /// Set or clear a field's error.
    pub fn set_error(&mut self, field: FieldId, error: Option<FieldError>) {
        self.errors[field] = error;
    }

    /// Clear all field errors.
    pub fn clear_errors(&mut self) {
        for field in FieldId::all() {
            self.errors[field] = None;
        }
    }

    /// Check if any field currently has an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        FieldId::all().any(|field| self.errors[field].is_some())
    }

    // === Event History ===

    /// Record an applied event, assigning it the next sequence number.
    pub fn record_event(&mut self, event: FormEvent) {
        let sequence = self.next_sequence();
        self.history.push_back(EventRecord::new(event, sequence));
    }

    /// Get the event history.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// Get the next event sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.event_sequence;
        self.event_sequence += 1;
        seq
    }

    // === Lifecycle ===

    /// Reset to the initial state: fields empty, errors cleared, flags
    /// down, history emptied.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // === Snapshot ===

    /// Encode the state to compact bytes.
    ///
    /// Lets a host carry in-progress entry across its own reloads; the
    /// crate itself never writes these anywhere.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state from `snapshot()` bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
