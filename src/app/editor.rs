// PDK Manager - app/editor.rs
//
// The edit pane's buffer. Remembers which PDK and file it was opened from so
// a later save goes back to the same path even if the dropdown has moved on.

use crate::core::model::EditableFile;
use std::path::PathBuf;

/// A file loaded into the edit pane.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// PDK selected when the file was opened.
    pub pdk: String,
    pub file: EditableFile,
    /// Absolute path the buffer was read from and will be written to.
    pub path: PathBuf,
    /// Text bound to the editor widget.
    pub text: String,
    /// Content as last read from or written to disk.
    saved_text: String,
}

impl EditSession {
    pub fn new(pdk: String, file: EditableFile, path: PathBuf, text: String) -> Self {
        Self {
            pdk,
            file,
            path,
            saved_text: text.clone(),
            text,
        }
    }

    /// True when the buffer differs from the file as last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        self.text != self.saved_text
    }

    /// Replace the buffer with fresh disk content, discarding edits.
    pub fn reload(&mut self, text: String) {
        self.saved_text = text.clone();
        self.text = text;
    }

    /// Record that the current buffer is now what is on disk.
    pub fn mark_saved(&mut self) {
        self.saved_text = self.text.clone();
    }
}
