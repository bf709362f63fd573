//! Residue Palettes
//!
//! Symbol to color tables. One palette is built in; more can be loaded
//! from `*.palette.toml` files and selected by name.

pub mod registry;
pub mod schema;

pub use registry::{LoadedPalette, PaletteRegistry, PaletteSource};
pub use schema::{CellColor, FALLBACK_COLOR, Palette, PaletteFile, Rgb};
