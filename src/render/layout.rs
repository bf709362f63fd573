//! Display Layout
//!
//! Chooses a chunk size from the available display width. Purely
//! presentational: it changes how output wraps, never what it says.

use std::num::NonZeroUsize;

use serde::Deserialize;

/// Width used when the display size cannot be determined
pub const DEFAULT_WIDTH: u16 = 80;

const NARROW_CHUNK: NonZeroUsize = NonZeroUsize::new(30).unwrap();
const WIDE_CHUNK: NonZeroUsize = NonZeroUsize::new(60).unwrap();

/// Narrow/wide chunk sizes split at a width breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Layout {
    /// Widths below this use `narrow_chunk`
    pub breakpoint: u16,
    pub narrow_chunk: NonZeroUsize,
    pub wide_chunk: NonZeroUsize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            breakpoint: 80,
            narrow_chunk: NARROW_CHUNK,
            wide_chunk: WIDE_CHUNK,
        }
    }
}

impl Layout {
    pub fn chunk_size(&self, width: u16) -> NonZeroUsize {
        if width < self.breakpoint {
            self.narrow_chunk
        } else {
            self.wide_chunk
        }
    }
}

/// Current terminal width, if stdout is attached to one
pub fn terminal_width() -> Option<u16> {
    match crossterm::terminal::size() {
        Ok((columns, _rows)) if columns > 0 => Some(columns),
        Ok(_) => None,
        Err(e) => {
            log::debug!("Could not query terminal size: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = Layout::default();
        assert_eq!(layout.chunk_size(60).get(), 30);
        assert_eq!(layout.chunk_size(79).get(), 30);
        assert_eq!(layout.chunk_size(80).get(), 60);
        assert_eq!(layout.chunk_size(200).get(), 60);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let layout: Layout = toml::from_str("narrow_chunk = 10").unwrap();
        assert_eq!(layout.narrow_chunk.get(), 10);
        assert_eq!(layout.wide_chunk.get(), 60);
        assert_eq!(layout.breakpoint, 80);
    }

    #[test]
    fn test_zero_chunk_rejected() {
        assert!(toml::from_str::<Layout>("wide_chunk = 0").is_err());
    }
}
