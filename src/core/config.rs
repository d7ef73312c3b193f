//! Form configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `FieldConfig`: Label, placeholder, input length budget per field
//! - `ExpiryWindow`: The accepted two-digit expiry year range
//! - `FormConfig`: Combines all configuration
//!
//! The engine never hardcodes copy or ranges - configuration defines them.
//! `FormConfig::card_details()` is the stock card-details form.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::field::{FieldId, FieldMap};
use crate::validate::FieldError;

/// Configuration for a single field.
///
/// Labels and placeholders are presentation copy passed through to the
/// view projection; `max_len` is the input length budget enforced by the
/// edit transform (the original form relied on the input element for this).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// The field this configures.
    pub id: FieldId,

    /// Label shown above the input.
    pub label: String,

    /// Placeholder shown inside the empty input.
    pub placeholder: String,

    /// Maximum accepted input length in characters. `None` for unlimited.
    pub max_len: Option<usize>,
}

impl FieldConfig {
    /// Create a new field configuration.
    pub fn new(id: FieldId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            placeholder: String::new(),
            max_len: None,
        }
    }

    /// Set the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the input length budget.
    #[must_use]
    pub fn with_max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }
}

/// Accepted two-digit expiry year range, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryWindow {
    min: u32,
    max: u32,
}

impl ExpiryWindow {
    /// Create a new expiry window.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        assert!(min <= max, "Window must not be empty");
        assert!(max <= 99, "Years are two-digit");

        Self { min, max }
    }

    /// Smallest accepted year.
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    /// Largest accepted year.
    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Check if a year value falls inside the window.
    #[must_use]
    pub fn contains(self, year: u32) -> bool {
        year >= self.min && year <= self.max
    }
}

impl Default for ExpiryWindow {
    /// The stock window: 2025 through 2030.
    fn default() -> Self {
        Self::new(25, 30)
    }
}

/// Placeholder values the card preview substitutes for empty fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDefaults {
    /// Shown while no card number is entered.
    pub number: String,
    /// Shown while no holder name is entered.
    pub holder: String,
    /// Shown while no expiry month is entered.
    pub month: String,
    /// Shown while no expiry year is entered.
    pub year: String,
}

impl Default for PreviewDefaults {
    fn default() -> Self {
        Self {
            number: "0000 0000 0000 0000".to_string(),
            holder: "Jane Appleseed".to_string(),
            month: "00".to_string(),
            year: "00".to_string(),
        }
    }
}

/// Copy shown on the confirmation screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationCopy {
    /// Heading line.
    pub heading: String,
    /// Detail line under the heading.
    pub detail: String,
    /// Label on the dismiss button.
    pub action: String,
}

impl Default for ConfirmationCopy {
    fn default() -> Self {
        Self {
            heading: "Thank you!".to_string(),
            detail: "We've added your card details".to_string(),
            action: "Continue".to_string(),
        }
    }
}

/// Complete form configuration.
///
/// Hosts provide this at startup; `card_details()` matches the original
/// card-details form exactly.
#[derive(Clone, Debug)]
pub struct FormConfig {
    /// Per-field configuration.
    pub fields: FieldMap<FieldConfig>,

    /// Accepted expiry year range.
    pub expiry_window: ExpiryWindow,

    /// Card preview placeholder values.
    pub preview: PreviewDefaults,

    /// Confirmation screen copy.
    pub confirmation: ConfirmationCopy,

    /// Label on the submit button.
    pub submit_label: String,

    /// Per-field overrides for the invalid-value message.
    /// The required-field message is not overridable.
    invalid_messages: FxHashMap<FieldId, String>,
}

impl FormConfig {
    /// The stock card-details form configuration.
    #[must_use]
    pub fn card_details() -> Self {
        let fields = FieldMap::new(|id| match id {
            FieldId::CardNumber => FieldConfig::new(id, "Card Number")
                .with_placeholder("0000 0000 0000 0000")
                .with_max_len(19),
            FieldId::CardHolder => {
                FieldConfig::new(id, "Cardholder Name").with_placeholder("e.g. Jane Appleseed")
            }
            FieldId::ExpiryMonth => {
                FieldConfig::new(id, "Exp. date (mm/yy)").with_placeholder("MM")
            }
            FieldId::ExpiryYear => {
                FieldConfig::new(id, "Exp. date (mm/yy)").with_placeholder("YY")
            }
            FieldId::Cvc => FieldConfig::new(id, "CVC")
                .with_placeholder("e.g. 123")
                .with_max_len(3),
        });

        Self {
            fields,
            expiry_window: ExpiryWindow::default(),
            preview: PreviewDefaults::default(),
            confirmation: ConfirmationCopy::default(),
            submit_label: "Confirm".to_string(),
            invalid_messages: FxHashMap::default(),
        }
    }

    /// Replace one field's configuration.
    #[must_use]
    pub fn with_field(mut self, field: FieldConfig) -> Self {
        let id = field.id;
        self.fields[id] = field;
        self
    }

    /// Set the expiry window.
    #[must_use]
    pub fn with_expiry_window(mut self, window: ExpiryWindow) -> Self {
        self.expiry_window = window;
        self
    }

    /// Set the submit button label.
    #[must_use]
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Override the invalid-value message for a field.
    #[must_use]
    pub fn with_invalid_message(mut self, field: FieldId, message: impl Into<String>) -> Self {
        self.invalid_messages.insert(field, message.into());
        self
    }

    /// Get a field's configuration.
    #[must_use]
    pub fn field(&self, id: FieldId) -> &FieldConfig {
        &self.fields[id]
    }

    /// Get a field's input length budget.
    #[must_use]
    pub fn max_len(&self, id: FieldId) -> Option<usize> {
        self.fields[id].max_len
    }

    /// Render an error to its display message, honoring overrides.
    #[must_use]
    pub fn error_message(&self, field: FieldId, error: FieldError) -> String {
        if !error.is_required() {
            if let Some(message) = self.invalid_messages.get(&field) {
                return message.clone();
            }
        }
        error.to_string()
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::card_details()
    }
}
