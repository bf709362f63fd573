//! HTML Rendering
//!
//! A self-contained fragment: one block per chunk, one span per residue.
//! Symbols come from the alphabet, so nothing needs escaping.

use super::chunk::{DiffCell, DiffChunk};

fn push_cells(out: &mut String, class: &str, cells: &[DiffCell]) {
    out.push_str(&format!("    <div class=\"sequence {}\">", class));
    for cell in cells {
        match cell.color.rgb() {
            Some(rgb) if cell.highlighted => out.push_str(&format!(
                "<span class=\"diff\" style=\"background-color: {}\">{}</span>",
                rgb, cell.symbol
            )),
            Some(rgb) => out.push_str(&format!(
                "<span style=\"background-color: {}\">{}</span>",
                rgb, cell.symbol
            )),
            None => out.push_str(&format!("<span>{}</span>", cell.symbol)),
        }
    }
    out.push_str("</div>\n");
}

/// Render chunks as an HTML fragment
pub fn to_html(chunks: &[DiffChunk]) -> String {
    let mut out = String::from("<div class=\"sequence-diff\">\n");
    for chunk in chunks {
        out.push_str(&format!(
            "  <div class=\"diff-chunk\" data-index=\"{}\" data-start=\"{}\">\n",
            chunk.index,
            chunk.start + 1
        ));
        push_cells(&mut out, "sequence-1", &chunk.first);
        push_cells(&mut out, "sequence-2", &chunk.second);
        out.push_str("  </div>\n");
    }
    out.push_str("</div>\n");
    out
}
