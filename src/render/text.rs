//! Plain Text Rendering
//!
//! The diff area as plain text: what a reader sees and what a selection
//! copies.

use super::chunk::{DiffCell, DiffChunk};

fn symbols(cells: &[DiffCell]) -> String {
    cells.iter().map(|c| c.symbol).collect()
}

/// Text content of the diff area
///
/// Each chunk contributes two lines (sequence 1, sequence 2) and chunks
/// are separated by one blank line. Selection offsets index into this
/// text by character.
pub fn diff_area_text(chunks: &[DiffChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| format!("{}\n{}\n", symbols(&chunk.first), symbols(&chunk.second)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Width of the position label column for these chunks
pub(crate) fn label_width(chunks: &[DiffChunk]) -> usize {
    chunks
        .last()
        .map(|c| (c.start + 1).to_string().len())
        .unwrap_or(1)
}

/// Plain report: 1-based start labels and a `^` under each difference
pub fn to_plain(chunks: &[DiffChunk]) -> String {
    let width = label_width(chunks);
    let mut out = String::new();

    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{:>width$} {}\n", chunk.start + 1, symbols(&chunk.first)));
        out.push_str(&format!("{:>width$} {}\n", "", symbols(&chunk.second)));

        if chunk.mismatches() > 0 {
            let markers: String = chunk
                .second
                .iter()
                .map(|c| if c.highlighted { '^' } else { ' ' })
                .collect();
            out.push_str(&format!("{:>width$} {}\n", "", markers.trim_end()));
        }
    }

    out
}
