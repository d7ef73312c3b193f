//! The event-to-state transition engine.
//!
//! `FormEngine` is the only writer of `FormState`:
//! - Input transforms on edits
//! - Full validation passes on submit
//! - The entry → confirmation → entry lifecycle

pub mod engine;

pub use engine::FormEngine;
