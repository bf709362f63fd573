//! Property tests for validation and rendering
use std::num::NonZeroUsize;

use proptest::prelude::*;
use seqdiff::{CellColor, DiffChunk, Palette, render_diff, sanitize, validate_pair};

const SYMBOLS: &str = "ARNDCEQGHILKMFPSTWYV-";

fn residue() -> impl Strategy<Value = char> {
    proptest::sample::select(SYMBOLS.chars().collect::<Vec<_>>())
}

/// Two non-empty equal-length alphabet strings
fn equal_pair() -> impl Strategy<Value = (String, String)> {
    (1usize..300).prop_flat_map(|len| {
        (
            proptest::collection::vec(residue(), len),
            proptest::collection::vec(residue(), len),
        )
            .prop_map(|(a, b)| (a.into_iter().collect::<String>(), b.into_iter().collect::<String>()))
    })
}

proptest! {
    #[test]
    fn test_equal_length_pairs_validate_and_conserve_length(
        (a, b) in equal_pair(),
        size in 1usize..80,
    ) {
        let pair = validate_pair(&a, &b).unwrap();
        let chunks = render_diff(&pair, NonZeroUsize::new(size).unwrap(), Palette::builtin());

        prop_assert!(!chunks.is_empty());
        let total: usize = chunks.iter().map(DiffChunk::len).sum();
        prop_assert_eq!(total, a.len());
        for chunk in &chunks {
            prop_assert_eq!(chunk.first.len(), chunk.second.len());
        }
    }

    #[test]
    fn test_rendering_is_pure((a, b) in equal_pair(), size in 1usize..80) {
        let pair = validate_pair(&a, &b).unwrap();
        let size = NonZeroUsize::new(size).unwrap();
        let once = render_diff(&pair, size, Palette::builtin());
        let twice = render_diff(&pair, size, Palette::builtin());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_second_sequence_colors_follow_equality((a, b) in equal_pair(), size in 1usize..80) {
        let palette = Palette::builtin();
        let pair = validate_pair(&a, &b).unwrap();
        let chunks = render_diff(&pair, NonZeroUsize::new(size).unwrap(), palette);

        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        for chunk in &chunks {
            for (offset, cell) in chunk.second.iter().enumerate() {
                let i = chunk.start + offset;
                prop_assert_eq!(cell.symbol, b[i]);
                if a[i] == b[i] {
                    prop_assert_eq!(cell.color, CellColor::Transparent);
                    prop_assert!(!cell.highlighted);
                } else {
                    prop_assert_eq!(cell.color, CellColor::Rgb(palette.color_for(b[i])));
                    prop_assert!(cell.highlighted);
                }
            }
        }
    }

    #[test]
    fn test_chunk_sizes_follow_boundaries(len in 1usize..500, size in 1usize..100) {
        let seq = "A".repeat(len);
        let pair = validate_pair(&seq, &seq).unwrap();
        let chunks = render_diff(&pair, NonZeroUsize::new(size).unwrap(), Palette::builtin());

        prop_assert_eq!(chunks.len(), len.div_ceil(size));
        let (last, rest) = chunks.split_last().unwrap();
        prop_assert!(rest.iter().all(|c| c.len() == size));
        let expected_last = if len % size == 0 { size } else { len % size };
        prop_assert_eq!(last.len(), expected_last);
    }

    #[test]
    fn test_sanitized_text_always_passes_alphabet_rule(raw in ".{1,64}", other in ".{1,64}") {
        let a = sanitize(&raw);
        let b = sanitize(&other);
        if let Err(e) = validate_pair(&a, &b) {
            prop_assert_ne!(e, seqdiff::ValidationError::BadAlphabet);
        }
    }
}
