//! View projections: state to display data.
//!
//! Hosts never read validation internals; they project a `FormView`
//! (screen, card preview, per-field copy and error messages) and render
//! that.

pub mod preview;
pub mod screen;

pub use preview::CardPreview;
pub use screen::{FieldView, FormView, Screen};
