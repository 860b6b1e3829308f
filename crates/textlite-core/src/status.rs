//! Status bar model.

use std::fmt;

use textlite_buffer::Position;

use crate::document::LineEnding;

/// Files are always read and written as UTF-8.
pub const ENCODING: &str = "UTF-8";

/// Snapshot of everything the status bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    /// Caret, 0-indexed internally
    pub position: Position,
    pub zoom_percent: u32,
    pub line_ending: LineEnding,
    /// Transient message such as "Saved"
    pub message: Option<String>,
}

impl StatusBar {
    /// "Ln 3, Col 7", both 1-based.
    pub fn position_label(&self) -> String {
        format!(
            "Ln {}, Col {}",
            self.position.display_line(),
            self.position.display_column()
        )
    }

    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom_percent)
    }

    pub fn line_ending_label(&self) -> &'static str {
        self.line_ending.label()
    }

    pub fn encoding_label(&self) -> &'static str {
        ENCODING
    }
}

impl fmt::Display for StatusBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.position_label(),
            self.zoom_label(),
            self.line_ending_label(),
            self.encoding_label()
        )
    }
}
