//! Validation Engine
//!
//! Pure pair validation. Rules run in a fixed order and the first failure
//! wins, so exactly one error is ever reported.

use thiserror::Error;

use crate::sequence::matches_alphabet;

/// Why a pair of sequences cannot be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// One or both sequences are empty
    #[error("Please enter both sequences.")]
    MissingInput,
    /// A sequence contains a character outside the alphabet
    #[error(
        "Sequences may only contain the amino acid codes ARNDCEQGHILKMFPSTWYV and the gap character '-'."
    )]
    BadAlphabet,
    /// Both sequences are valid but their lengths differ
    #[error("Both sequences must have the same length.")]
    LengthMismatch,
}

/// Two sequences that passed validation
///
/// Only [`validate_pair`] constructs this type, so holding one guarantees
/// both sequences are non-empty, uppercase, in the alphabet, and of equal
/// length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPair {
    first: String,
    second: String,
}

impl ValidatedPair {
    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// Shared length of both sequences
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Never true for a validated pair
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }
}

/// Validate two candidate sequences
///
/// Rules, first failure wins:
/// 1. both non-empty, else [`ValidationError::MissingInput`]
/// 2. both match the alphabet once uppercased, else [`ValidationError::BadAlphabet`]
/// 3. equal length, else [`ValidationError::LengthMismatch`]
///
/// Input that already went through the sanitizer is returned unchanged.
pub fn validate_pair(first: &str, second: &str) -> Result<ValidatedPair, ValidationError> {
    if first.is_empty() || second.is_empty() {
        return Err(ValidationError::MissingInput);
    }

    let first = first.to_uppercase();
    let second = second.to_uppercase();
    if !matches_alphabet(&first) || !matches_alphabet(&second) {
        return Err(ValidationError::BadAlphabet);
    }

    // Alphabet symbols are ASCII, so byte length is character count here.
    if first.len() != second.len() {
        return Err(ValidationError::LengthMismatch);
    }

    Ok(ValidatedPair { first, second })
}
