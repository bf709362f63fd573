//! Sequence Input
//!
//! Alphabet definition and the live input sanitizer applied on every edit.
//! Nothing here knows about validation or rendering.

pub mod alphabet;
pub mod sanitize;

pub use alphabet::{ALPHABET, GAP, is_residue, matches_alphabet};
pub use sanitize::{SanitizedInput, sanitize};
