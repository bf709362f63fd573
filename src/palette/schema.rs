//! Palette Schema Types
//!
//! TOML file shape for palettes plus the runtime lookup table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Color used for symbols missing from a palette
pub const FALLBACK_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// A 24-bit color, written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color '{}' must start with '#'", s))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Color '{}' is not of the form #RRGGBB", s));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("Color '{}' has a bad channel: {}", s, e))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Display color of one rendered residue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum CellColor {
    /// No highlight; the residue reads as "same"
    Transparent,
    Rgb(Rgb),
}

impl CellColor {
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            CellColor::Transparent => None,
            CellColor::Rgb(rgb) => Some(*rgb),
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellColor::Transparent => f.write_str("transparent"),
            CellColor::Rgb(rgb) => write!(f, "{}", rgb),
        }
    }
}

impl From<CellColor> for String {
    fn from(color: CellColor) -> Self {
        color.to_string()
    }
}

/// Root palette file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PaletteFile {
    pub palette: PaletteMeta,
    pub colors: Vec<ColorDef>,
}

/// Palette metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PaletteMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// One symbol to color entry
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ColorDef {
    pub symbol: String,
    pub color: Rgb,
}

/// Runtime palette (optimized for lookups)
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    colors: HashMap<char, Rgb>,
}

const EMBEDDED_DEFAULT: &str = include_str!("../../resources/palettes/default.palette.toml");

static BUILTIN: LazyLock<Palette> = LazyLock::new(|| match Palette::from_toml(EMBEDDED_DEFAULT) {
    Ok(palette) => palette,
    Err(e) => {
        log::warn!(
            "Failed to parse embedded default palette: {}. Using minimal fallback.",
            e
        );
        Palette::minimal()
    }
});

impl Palette {
    /// The built-in default palette, parsed once per process
    pub fn builtin() -> &'static Palette {
        &BUILTIN
    }

    /// Parse a palette from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let file: PaletteFile = toml::from_str(content).map_err(|e| e.to_string())?;
        Self::try_from(file)
    }

    /// Compiled-in copy of the default table, used if the embedded file is unusable
    pub fn minimal() -> Self {
        const TABLE: [(char, Rgb); 21] = [
            ('A', Rgb::new(0x80, 0xA0, 0xF0)),
            ('R', Rgb::new(0xF0, 0x15, 0x05)),
            ('N', Rgb::new(0x15, 0xC0, 0x15)),
            ('D', Rgb::new(0xC0, 0x48, 0xC0)),
            ('C', Rgb::new(0xF0, 0x80, 0x80)),
            ('E', Rgb::new(0xA0, 0x3C, 0xA0)),
            ('Q', Rgb::new(0x30, 0xD0, 0x70)),
            ('G', Rgb::new(0xF0, 0x90, 0x48)),
            ('H', Rgb::new(0x15, 0xA4, 0xA4)),
            ('I', Rgb::new(0x60, 0x80, 0xE0)),
            ('L', Rgb::new(0x40, 0x60, 0xD0)),
            ('K', Rgb::new(0xD0, 0x40, 0x20)),
            ('M', Rgb::new(0xA0, 0xB0, 0xF8)),
            ('F', Rgb::new(0x50, 0x70, 0xC8)),
            ('P', Rgb::new(0xE0, 0xE0, 0x00)),
            ('S', Rgb::new(0x50, 0xE0, 0x50)),
            ('T', Rgb::new(0x10, 0xA0, 0x10)),
            ('W', Rgb::new(0x90, 0x80, 0xE0)),
            ('Y', Rgb::new(0x30, 0xC0, 0xC0)),
            ('V', Rgb::new(0x70, 0x90, 0xF0)),
            ('-', Rgb::new(0xD3, 0xD3, 0xD3)),
        ];

        Self {
            name: "default".to_string(),
            version: Some("minimal-fallback".to_string()),
            description: Some("Minimal fallback palette".to_string()),
            colors: TABLE.into_iter().collect(),
        }
    }

    /// Color for a symbol, or [`FALLBACK_COLOR`] if the palette has none
    pub fn color_for(&self, symbol: char) -> Rgb {
        self.colors.get(&symbol).copied().unwrap_or(FALLBACK_COLOR)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl TryFrom<PaletteFile> for Palette {
    type Error = String;

    fn try_from(file: PaletteFile) -> Result<Self, Self::Error> {
        let mut colors = HashMap::with_capacity(file.colors.len());
        for def in file.colors {
            let mut chars = def.symbol.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_ascii_uppercase(),
                _ => {
                    return Err(format!(
                        "Palette '{}': symbol '{}' must be a single character",
                        file.palette.name, def.symbol
                    ));
                }
            };
            if colors.insert(symbol, def.color).is_some() {
                log::debug!(
                    "Palette '{}' defines '{}' more than once; last entry wins",
                    file.palette.name,
                    symbol
                );
            }
        }

        Ok(Self {
            name: file.palette.name,
            version: file.palette.version,
            description: file.palette.description,
            colors,
        })
    }
}
