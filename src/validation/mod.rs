//! Validation Engine
//!
//! Checks a pair of candidate sequences before they are compared.
//! Kept apart from sanitization so either can be exercised on its own.

pub mod engine;

pub use engine::{ValidatedPair, ValidationError, validate_pair};
