//! Compare Form
//!
//! Two sequence fields, a Compare action, a Clear action. Editing either
//! field drops the displayed diff and error, so a comparison on screen
//! always reflects the current inputs.

use std::num::NonZeroUsize;

use crate::palette::Palette;
use crate::render::{DiffChunk, DiffSummary, Layout, render_diff, text::diff_area_text};
use crate::sequence::SanitizedInput;
use crate::validation::{ValidationError, validate_pair};

/// Which input field an event targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    First,
    Second,
}

impl Field {
    pub fn number(&self) -> usize {
        match self {
            Field::First => 1,
            Field::Second => 2,
        }
    }
}

/// Form state
#[derive(Debug, Clone)]
pub struct CompareForm {
    first: String,
    second: String,
    error: Option<ValidationError>,
    diff: Option<Vec<DiffChunk>>,
    layout: Layout,
    chunk_override: Option<NonZeroUsize>,
    width: u16,
    palette: Palette,
}

impl CompareForm {
    pub fn new(palette: Palette, layout: Layout, width: u16) -> Self {
        Self {
            first: String::new(),
            second: String::new(),
            error: None,
            diff: None,
            layout,
            chunk_override: None,
            width,
            palette,
        }
    }

    /// Use a fixed chunk size regardless of width
    pub fn with_chunk_size(mut self, chunk_size: Option<NonZeroUsize>) -> Self {
        self.chunk_override = chunk_size;
        self
    }

    /// Apply an input event carrying the field's full current text
    ///
    /// Returns the accepted (sanitized) value.
    pub fn input(&mut self, field: Field, raw: &str) -> &str {
        let sanitized = SanitizedInput::from_raw(raw);
        self.error = None;
        self.diff = None;

        let slot = match field {
            Field::First => &mut self.first,
            Field::Second => &mut self.second,
        };
        *slot = sanitized.value;
        slot
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::First => &self.first,
            Field::Second => &self.second,
        }
    }

    /// Field label, with the current length once non-empty
    pub fn label(&self, field: Field) -> String {
        let value = self.value(field);
        if value.is_empty() {
            format!("Sequence {}", field.number())
        } else {
            format!("Sequence {} ({})", field.number(), value.len())
        }
    }

    /// Validate the inputs and, if they pass, render the diff
    pub fn compare(&mut self) -> Result<&[DiffChunk], ValidationError> {
        self.diff = None;
        match validate_pair(&self.first, &self.second) {
            Ok(pair) => {
                self.error = None;
                let chunks = render_diff(&pair, self.chunk_size(), &self.palette);
                Ok(self.diff.insert(chunks).as_slice())
            }
            Err(e) => {
                log::debug!("compare rejected: {:?}", e);
                self.error = Some(e);
                Err(e)
            }
        }
    }

    /// Reset both fields, the error and the diff
    pub fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
        self.error = None;
        self.diff = None;
    }

    /// Change the display width; a shown diff is re-rendered to the new chunk size
    pub fn set_width(&mut self, width: u16) {
        let before = self.chunk_size();
        self.width = width;
        if self.chunk_size() != before && self.diff.is_some() {
            // Inputs are unchanged, so this cannot fail.
            if let Ok(pair) = validate_pair(&self.first, &self.second) {
                self.diff = Some(render_diff(&pair, self.chunk_size(), &self.palette));
            }
        }
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_override
            .unwrap_or_else(|| self.layout.chunk_size(self.width))
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// The message currently shown, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub fn diff(&self) -> Option<&[DiffChunk]> {
        self.diff.as_deref()
    }

    pub fn summary(&self) -> Option<DiffSummary> {
        self.diff().map(DiffSummary::from_chunks)
    }

    /// Plain text of the diff area, empty when no diff is shown
    pub fn diff_text(&self) -> String {
        self.diff().map(diff_area_text).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CompareForm {
        CompareForm::new(Palette::builtin().clone(), Layout::default(), 120)
    }

    #[test]
    fn test_input_is_sanitized() {
        let mut f = form();
        assert_eq!(f.input(Field::First, "ar1"), "AR");
        assert_eq!(f.value(Field::First), "AR");
    }

    #[test]
    fn test_labels() {
        let mut f = form();
        assert_eq!(f.label(Field::First), "Sequence 1");
        f.input(Field::Second, "arnd");
        assert_eq!(f.label(Field::Second), "Sequence 2 (4)");
    }

    #[test]
    fn test_compare_success() {
        let mut f = form();
        f.input(Field::First, "ARN");
        f.input(Field::Second, "ARD");
        let chunks = f.compare().unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(f.error().is_none());
        assert!(f.diff().is_some());
    }

    #[test]
    fn test_compare_failure_shows_one_error() {
        let mut f = form();
        f.input(Field::First, "AR");
        assert_eq!(f.compare().unwrap_err(), ValidationError::MissingInput);
        assert_eq!(f.error(), Some(ValidationError::MissingInput));
        assert!(f.diff().is_none());
    }

    #[test]
    fn test_edit_clears_diff_and_error() {
        let mut f = form();
        f.input(Field::First, "AR");
        f.input(Field::Second, "AR");
        f.compare().unwrap();
        f.input(Field::Second, "ARN");
        assert!(f.diff().is_none());

        f.compare().unwrap_err();
        assert!(f.error().is_some());
        f.input(Field::First, "ARN");
        assert!(f.error().is_none());
    }

    #[test]
    fn test_clear() {
        let mut f = form();
        f.input(Field::First, "AR");
        f.input(Field::Second, "AR");
        f.compare().unwrap();
        f.clear();
        assert_eq!(f.value(Field::First), "");
        assert_eq!(f.value(Field::Second), "");
        assert!(f.diff().is_none());
        assert!(f.error().is_none());
        assert_eq!(f.diff_text(), "");
    }

    #[test]
    fn test_width_changes_chunking_only() {
        let mut f = form();
        let s = "A".repeat(90);
        f.input(Field::First, &s);
        f.input(Field::Second, &s);
        assert_eq!(f.compare().unwrap().len(), 2);

        f.set_width(40);
        assert_eq!(f.diff().unwrap().len(), 3);
        assert_eq!(f.summary().unwrap().length, 90);
    }

    #[test]
    fn test_chunk_override() {
        let mut f = form().with_chunk_size(NonZeroUsize::new(20));
        f.input(Field::First, &"A".repeat(45));
        f.input(Field::Second, &"A".repeat(45));
        let lens: Vec<usize> = f.compare().unwrap().iter().map(DiffChunk::len).collect();
        assert_eq!(lens, vec![20, 20, 5]);
    }
}
