//! System clipboard export

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Writes draft text to the system clipboard.
///
/// A fresh clipboard handle is opened per copy; a long-lived handle would
/// keep the X11 selection owned by this process.
#[derive(Default)]
pub struct ClipboardExporter;

impl ClipboardExporter {
    pub fn new() -> Self {
        Self
    }

    /// Copy `text` to the system clipboard
    pub fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}
