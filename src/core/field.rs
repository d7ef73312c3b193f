//! Field identification and per-field data storage.
//!
//! ## FieldId
//!
//! Type-safe identifier for the five form fields.
//!
//! ## FieldMap
//!
//! Efficient per-field data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `FieldId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of fields on the form.
pub const FIELD_COUNT: usize = 5;

/// Identifier for a form field.
///
/// The form owns exactly five fields; ordering follows the visual layout
/// of the entry screen (holder name first, CVC last is intentional for
/// the expiry pair).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    /// 16-digit card number, displayed grouped in 4s.
    CardNumber,
    /// Free-text cardholder name.
    CardHolder,
    /// Two-digit expiry month.
    ExpiryMonth,
    /// Two-digit expiry year.
    ExpiryYear,
    /// Three-digit card verification code.
    Cvc,
}

impl FieldId {
    /// Get the dense index of this field (0-based, stable).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            FieldId::CardNumber => 0,
            FieldId::CardHolder => 1,
            FieldId::ExpiryMonth => 2,
            FieldId::ExpiryYear => 3,
            FieldId::Cvc => 4,
        }
    }

    /// Iterate over all field IDs in dense-index order.
    ///
    /// ```
    /// use card_entry::core::FieldId;
    ///
    /// let fields: Vec<_> = FieldId::all().collect();
    /// assert_eq!(fields.len(), 5);
    /// assert_eq!(fields[0], FieldId::CardNumber);
    /// assert_eq!(fields[4], FieldId::Cvc);
    /// ```
    pub fn all() -> impl Iterator<Item = FieldId> {
        [
            FieldId::CardNumber,
            FieldId::CardHolder,
            FieldId::ExpiryMonth,
            FieldId::ExpiryYear,
            FieldId::Cvc,
        ]
        .into_iter()
    }

    /// Recover a field ID from its dense index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<FieldId> {
        match index {
            0 => Some(FieldId::CardNumber),
            1 => Some(FieldId::CardHolder),
            2 => Some(FieldId::ExpiryMonth),
            3 => Some(FieldId::ExpiryYear),
            4 => Some(FieldId::Cvc),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldId::CardNumber => "card number",
            FieldId::CardHolder => "card holder",
            FieldId::ExpiryMonth => "expiry month",
            FieldId::ExpiryYear => "expiry year",
            FieldId::Cvc => "cvc",
        };
        write!(f, "{}", name)
    }
}

/// Per-field data storage with O(1) access.
///
/// Backed by a fixed `[T; FIELD_COUNT]` with one entry per field.
/// Use `FieldMap::new()` to create with a factory function,
/// or `FieldMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use card_entry::core::{FieldId, FieldMap};
///
/// // Create with factory
/// let mut lengths: FieldMap<usize> = FieldMap::new(|f| f.index());
///
/// // Access by field
/// assert_eq!(lengths[FieldId::CardNumber], 0);
///
/// // Modify
/// lengths[FieldId::Cvc] = 3;
/// assert_eq!(lengths[FieldId::Cvc], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldMap<T> {
    data: [T; FIELD_COUNT],
}

impl<T> FieldMap<T> {
    /// Create a new FieldMap with values from a factory function.
    ///
    /// The factory receives the `FieldId` for each field.
    pub fn new(factory: impl Fn(FieldId) -> T) -> Self {
        Self {
            data: [
                factory(FieldId::CardNumber),
                factory(FieldId::CardHolder),
                factory(FieldId::ExpiryMonth),
                factory(FieldId::ExpiryYear),
                factory(FieldId::Cvc),
            ],
        }
    }

    /// Create a new FieldMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new FieldMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a field's data.
    #[must_use]
    pub fn get(&self, field: FieldId) -> &T {
        &self.data[field.index()]
    }

    /// Get a mutable reference to a field's data.
    pub fn get_mut(&mut self, field: FieldId) -> &mut T {
        &mut self.data[field.index()]
    }

    /// Iterate over (FieldId, &T) pairs in dense-index order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &T)> {
        FieldId::all().zip(self.data.iter())
    }

    /// Iterate over (FieldId, &mut T) pairs in dense-index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FieldId, &mut T)> {
        FieldId::all().zip(self.data.iter_mut())
    }
}

impl<T> Index<FieldId> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: FieldId) -> &Self::Output {
        self.get(field)
    }
}

impl<T> IndexMut<FieldId> for FieldMap<T> {
    fn index_mut(&mut self, field: FieldId) -> &mut Self::Output {
        self.get_mut(field)
    }
}
