//! System clipboard access for the copy action.

use arboard::Clipboard;
use quarter_core::{CopyFeedback, CopyTicket};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Destination for copied result text.
///
/// Writes run on a background thread, so implementations must be shareable.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(
        &self,
        text: &str,
    ) -> Result<(), ClipboardError>;
}

/// Writes to the desktop clipboard through `arboard`.
///
/// A fresh handle is opened per write; the handle is not `Send` on every
/// platform, and copies are rare.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(
        &self,
        text: &str,
    ) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}

/// Applies the result of a clipboard write to the copy indicator.
///
/// Returns the ticket that may later clear the indicator, or `None` when the
/// write failed and there is nothing to clear.
pub fn record_copy_outcome(
    feedback: &mut CopyFeedback,
    outcome: Result<(), ClipboardError>,
) -> Option<CopyTicket> {
    match outcome {
        Ok(()) => {
            debug!("results copied to clipboard");
            Some(feedback.confirm())
        }
        Err(error) => {
            warn!(%error, "copy to clipboard failed");
            feedback.fail();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingClipboard(Mutex<Vec<String>>);

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(
            &self,
            text: &str,
        ) -> Result<(), ClipboardError> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct UnavailableClipboard;

    impl ClipboardWriter for UnavailableClipboard {
        fn write_text(
            &self,
            _text: &str,
        ) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }

    #[test]
    fn writer_is_usable_as_trait_object() {
        let clipboard = RecordingClipboard::default();
        let writer: &dyn ClipboardWriter = &clipboard;

        writer.write_text("Amount: 1").unwrap();

        assert_eq!(*clipboard.0.lock().unwrap(), vec!["Amount: 1".to_string()]);
    }

    #[test]
    fn successful_write_confirms_copy() {
        let mut feedback = CopyFeedback::default();
        let outcome = RecordingClipboard::default().write_text("Amount: 1");

        let ticket = record_copy_outcome(&mut feedback, outcome);

        assert!(ticket.is_some());
        assert!(feedback.is_copied());
        assert_eq!(feedback.label(), "Copied ✓");
    }

    #[test]
    fn failed_write_leaves_label_unchanged() {
        let mut feedback = CopyFeedback::default();
        let outcome = UnavailableClipboard.write_text("Amount: 1");

        let ticket = record_copy_outcome(&mut feedback, outcome);

        assert_eq!(ticket, None);
        assert!(!feedback.is_copied());
        assert_eq!(feedback.label(), "Copy results");
    }

    #[test]
    fn failure_message_names_the_cause() {
        let error = UnavailableClipboard.write_text("Amount: 1").unwrap_err();

        assert_eq!(error.to_string(), "clipboard unavailable: no display");
    }
}
