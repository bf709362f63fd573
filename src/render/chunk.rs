//! Positional Diff Renderer
//!
//! Splits a validated pair into fixed-size windows and colors each
//! residue. Sequence 1 always shows its palette color; sequence 2 is
//! transparent where it matches and palette-colored where it differs.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::palette::{CellColor, Palette};
use crate::validation::ValidatedPair;

/// One rendered residue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffCell {
    pub symbol: char,
    pub color: CellColor,
    /// Set only on sequence 2 cells that differ from sequence 1
    pub highlighted: bool,
}

/// A window of both sequences, rendered side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffChunk {
    pub index: usize,
    /// Offset of the first position in the full sequences
    pub start: usize,
    pub first: Vec<DiffCell>,
    pub second: Vec<DiffCell>,
}

impl DiffChunk {
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    pub fn mismatches(&self) -> usize {
        self.second.iter().filter(|c| c.highlighted).count()
    }
}

/// Totals over a rendered diff
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiffSummary {
    pub length: usize,
    pub mismatches: usize,
    /// Percentage of identical positions
    pub identity: f64,
}

impl DiffSummary {
    pub fn from_chunks(chunks: &[DiffChunk]) -> Self {
        let length: usize = chunks.iter().map(DiffChunk::len).sum();
        let mismatches: usize = chunks.iter().map(DiffChunk::mismatches).sum();
        let identity = if length == 0 {
            0.0
        } else {
            (length - mismatches) as f64 * 100.0 / length as f64
        };

        Self {
            length,
            mismatches,
            identity,
        }
    }
}

/// Render a validated pair into chunks of `chunk_size` positions
///
/// Every chunk but the last holds exactly `chunk_size` positions. Output
/// depends only on the arguments.
pub fn render_diff(
    pair: &ValidatedPair,
    chunk_size: NonZeroUsize,
    palette: &Palette,
) -> Vec<DiffChunk> {
    let size = chunk_size.get();
    let first = pair.first().as_bytes().chunks(size);
    let second = pair.second().as_bytes().chunks(size);

    let chunks: Vec<DiffChunk> = first
        .zip(second)
        .enumerate()
        .map(|(index, (a, b))| render_window(index, index * size, a, b, palette))
        .collect();

    log::debug!(
        "rendered {} positions into {} chunk(s) of up to {}",
        pair.len(),
        chunks.len(),
        size
    );
    chunks
}

fn render_window(index: usize, start: usize, a: &[u8], b: &[u8], palette: &Palette) -> DiffChunk {
    let first = a
        .iter()
        .map(|&s| {
            let symbol = char::from(s);
            DiffCell {
                symbol,
                color: CellColor::Rgb(palette.color_for(symbol)),
                highlighted: false,
            }
        })
        .collect();

    let second = a
        .iter()
        .zip(b)
        .map(|(&s1, &s2)| {
            let symbol = char::from(s2);
            if s1 == s2 {
                DiffCell {
                    symbol,
                    color: CellColor::Transparent,
                    highlighted: false,
                }
            } else {
                DiffCell {
                    symbol,
                    color: CellColor::Rgb(palette.color_for(symbol)),
                    highlighted: true,
                }
            }
        })
        .collect();

    DiffChunk {
        index,
        start,
        first,
        second,
    }
}
