//! Live Input Sanitizer
//!
//! Applied to the raw text of an input field on every change:
//! upper-case everything, then drop anything outside the alphabet.

use super::alphabet::is_residue;

/// Outcome of sanitizing one input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedInput {
    /// The accepted value
    pub value: String,
    /// Number of characters removed after upper-casing
    pub dropped: usize,
}

impl SanitizedInput {
    /// Sanitize `raw`, the full current text of the field
    pub fn from_raw(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        let mut dropped = 0;
        let value: String = upper
            .chars()
            .filter(|&c| {
                let keep = is_residue(c);
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();

        if dropped > 0 {
            log::debug!("sanitizer dropped {} character(s) from input", dropped);
        }

        Self { value, dropped }
    }
}

/// Sanitize raw field text into an accepted value
///
/// The result depends only on `raw`; the previous accepted value never
/// influences it.
pub fn sanitize(raw: &str) -> String {
    SanitizedInput::from_raw(raw).value
}
