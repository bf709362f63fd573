//! Diff Rendering
//!
//! Turns a validated pair into display chunks, and chunks into text,
//! ANSI or HTML output.

pub mod chunk;
pub mod html;
pub mod layout;
pub mod terminal;
pub mod text;

pub use chunk::{DiffCell, DiffChunk, DiffSummary, render_diff};
pub use layout::Layout;
