//! Selection Copy
//!
//! When a selection starts and ends inside the diff area, its trimmed text
//! goes to the clipboard and a short acknowledgment is shown. Clipboard
//! failures are logged and otherwise ignored.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// How long the "copied" acknowledgment stays visible
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(1000);

/// Destination for copied text
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Terminal clipboard using the OSC 52 escape sequence
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let payload = STANDARD.encode(text.as_bytes());
        write!(self.out, "\x1b]52;c;{}\x07", payload)
            .context("Failed to write OSC 52 sequence")?;
        self.out.flush().context("Failed to flush OSC 52 sequence")
    }
}

/// A finished selection gesture over the diff area text
///
/// Offsets are character positions; `None` means that end of the gesture
/// landed outside the diff area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl Selection {
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Text covered by the selection, if both ends are inside the area
    pub fn extract<'a>(&self, area_text: &'a str) -> Option<&'a str> {
        let (start, end) = (self.start?, self.end?);
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        if hi > area_text.chars().count() {
            return None;
        }

        let byte_at = |n: usize| {
            area_text
                .char_indices()
                .nth(n)
                .map_or(area_text.len(), |(i, _)| i)
        };
        Some(&area_text[byte_at(lo)..byte_at(hi)])
    }
}

/// What happened on a selection gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The selection did not fall inside the diff area, or held only whitespace
    Ignored,
    /// Text was copied and the acknowledgment is showing
    Copied(String),
    /// The clipboard write failed; already logged
    Failed,
}

/// Copies selections and tracks the acknowledgment timer
#[derive(Debug)]
pub struct CopyNotifier<C: Clipboard> {
    clipboard: C,
    ack_until: Option<Instant>,
    ack_duration: Duration,
}

impl<C: Clipboard> CopyNotifier<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            ack_until: None,
            ack_duration: COPY_ACK_DURATION,
        }
    }

    /// Handle the end of a selection gesture
    pub fn on_selection(
        &mut self,
        area_text: &str,
        selection: Selection,
        now: Instant,
    ) -> CopyOutcome {
        let Some(selected) = selection.extract(area_text) else {
            return CopyOutcome::Ignored;
        };
        let text = selected.trim();
        if text.is_empty() {
            return CopyOutcome::Ignored;
        }

        match self.clipboard.write_text(text) {
            Ok(()) => {
                self.ack_until = Some(now + self.ack_duration);
                CopyOutcome::Copied(text.to_string())
            }
            Err(e) => {
                log::warn!("Failed to copy selection: {:#}", e);
                CopyOutcome::Failed
            }
        }
    }

    /// Whether the acknowledgment is visible at `now`
    pub fn is_ack_visible(&self, now: Instant) -> bool {
        self.ack_until.is_some_and(|until| now < until)
    }

    /// When the acknowledgment will hide, if it is showing
    pub fn ack_deadline(&self) -> Option<Instant> {
        self.ack_until
    }

    /// Hide the acknowledgment once its time is up; returns true if it was hidden now
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.ack_until {
            Some(until) if now >= until => {
                self.ack_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}
