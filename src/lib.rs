//! seqdiff
//!
//! Positional comparison of two equal-length protein sequences.
//!
//! This library provides:
//! - Live input sanitization and pair validation
//! - Chunked diff rendering with per-residue colors
//! - Palettes, form state and selection copy
//! - Configuration and the command-line front end

pub mod cli;
pub mod config;
pub mod palette;
pub mod render;
pub mod sequence;
pub mod session;
pub mod validation;

pub use config::Config;
pub use palette::{CellColor, Palette, PaletteRegistry, Rgb};
pub use render::{DiffCell, DiffChunk, DiffSummary, Layout, render_diff};
pub use sequence::sanitize;
pub use session::{CompareForm, Field};
pub use validation::{ValidatedPair, ValidationError, validate_pair};
