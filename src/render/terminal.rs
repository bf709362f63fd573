//! Terminal Rendering
//!
//! ANSI output with residue colors as cell backgrounds.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use super::chunk::{DiffCell, DiffChunk};
use super::text::label_width;
use crate::palette::CellColor;

fn write_cells<W: Write>(out: &mut W, cells: &[DiffCell]) -> io::Result<()> {
    for cell in cells {
        match cell.color {
            CellColor::Transparent => queue!(out, Print(cell.symbol))?,
            CellColor::Rgb(rgb) => queue!(
                out,
                SetBackgroundColor(Color::Rgb {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b,
                }),
                SetForegroundColor(Color::Black),
                Print(cell.symbol),
                ResetColor
            )?,
        }
    }
    Ok(())
}

/// Write chunks as colored rows, each chunk labelled with its 1-based start
pub fn write_chunks<W: Write>(out: &mut W, chunks: &[DiffChunk]) -> io::Result<()> {
    let width = label_width(chunks);

    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            queue!(out, Print("\n"))?;
        }
        queue!(out, Print(format!("{:>width$} ", chunk.start + 1)))?;
        write_cells(out, &chunk.first)?;
        queue!(out, Print("\n"), Print(format!("{:>width$} ", "")))?;
        write_cells(out, &chunk.second)?;
        queue!(out, Print("\n"))?;
    }

    out.flush()
}
