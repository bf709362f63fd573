//! The documented compare scenarios, end to end through the public API
use std::num::NonZeroUsize;

use seqdiff::{CellColor, DiffChunk, Palette, ValidationError, render_diff, sanitize, validate_pair};

fn chunk_size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn test_empty_first_sequence_is_missing_input() {
    assert_eq!(validate_pair("", "AR"), Err(ValidationError::MissingInput));
}

#[test]
fn test_sanitizer_strips_digit_before_validation() {
    let first = sanitize("AR1");
    let second = sanitize("AR");
    assert_eq!(first, "AR");
    assert!(validate_pair(&first, &second).is_ok());
}

#[test]
fn test_different_lengths_are_a_length_mismatch() {
    assert_eq!(validate_pair("AR", "ARN"), Err(ValidationError::LengthMismatch));
}

#[test]
fn test_single_substitution_is_highlighted_with_its_own_color() {
    let palette = Palette::builtin();
    let pair = validate_pair("ARN", "ARD").unwrap();
    let chunks = render_diff(&pair, chunk_size(20), palette);

    assert_eq!(chunks.len(), 1);
    let second = &chunks[0].second;
    assert_eq!(second[0].color, CellColor::Transparent);
    assert_eq!(second[1].color, CellColor::Transparent);
    assert_eq!(second[2].color, CellColor::Rgb(palette.color_for('D')));
    assert!(second[2].highlighted);
}

#[test]
fn test_length_45_with_chunk_20_gives_three_chunks() {
    let first: String = "ARNDCEQGHILKMFPSTWYV-".chars().cycle().take(45).collect();
    let second: String = first.chars().rev().collect();
    let pair = validate_pair(&first, &second).unwrap();
    let chunks = render_diff(&pair, chunk_size(20), Palette::builtin());

    let sizes: Vec<usize> = chunks.iter().map(DiffChunk::len).collect();
    assert_eq!(sizes, vec![20, 20, 5]);
}

#[test]
fn test_rules_apply_in_order() {
    // Empty beats everything, alphabet beats length.
    assert_eq!(validate_pair("", "1"), Err(ValidationError::MissingInput));
    assert_eq!(validate_pair("A1", "A"), Err(ValidationError::BadAlphabet));
    assert_eq!(validate_pair("A", "AA"), Err(ValidationError::LengthMismatch));
}
