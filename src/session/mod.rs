//! Compare Session
//!
//! State of the two-field compare form and the selection copy notice.
//! Everything here is driven synchronously by input events.

pub mod copy;
pub mod form;

pub use copy::{COPY_ACK_DURATION, Clipboard, CopyNotifier, CopyOutcome, Osc52Clipboard, Selection};
pub use form::{CompareForm, Field};
