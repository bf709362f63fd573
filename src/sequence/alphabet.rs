//! Residue Alphabet
//!
//! The 20 standard amino acid codes plus the gap character.

use std::sync::LazyLock;

use regex::Regex;

/// Gap character
pub const GAP: char = '-';

/// Every accepted symbol, in the conventional amino acid ordering
pub const ALPHABET: [char; 21] = [
    'A', 'R', 'N', 'D', 'C', 'E', 'Q', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T', 'W', 'Y',
    'V', GAP,
];

static ALPHABET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ARNDCEQGHILKMFPSTWYV\-]*$").expect("alphabet pattern is a valid regex")
});

/// Check whether a single (already uppercased) character is in the alphabet
pub fn is_residue(c: char) -> bool {
    ALPHABET.contains(&c)
}

/// Check that every character of `text` is in the alphabet
///
/// Matching is case-sensitive: callers normalize to uppercase first.
/// The empty string matches; emptiness is a separate validation rule.
pub fn matches_alphabet(text: &str) -> bool {
    ALPHABET_RE.is_match(text)
}
